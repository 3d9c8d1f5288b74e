//! Trip service tests over the file-backed repositories

use tempfile::tempdir;
use tripcost_app::app::TripService;
use tripcost_domain::model::{DischargingLegForm, LoadingLegForm, TripForms, VesselRecord};
use tripcost_domain::repository::VesselRepository;
use tripcost_infra::persistence::{FileTripReportRepository, FileVesselRepository};
use tripcost_types::{Error, Phase, StoreError};

fn ocean_star() -> VesselRecord {
    let mut v = VesselRecord::new("MV Ocean Star");
    v.id = "ocean-star".to_string();
    v.do_price = Some(500.0);
    v.do_standby = Some(1.0);
    v.do_at_sea = Some(3.0);
    v.do_discharge = Some(2.5);
    v.do_idle = Some(2.0);
    v.loading = Some(20.0);
    v.idle = Some(5.0);
    v.hire = Some(0.0);
    v.hire_per_day = Some(10000.0);
    v.vessel_capacity = Some("50000 MT".to_string());
    v.sea_ballast_with_cargo_temp = Some(1.0);
    v.discharging = Some(18.0);
    v
}

fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

fn forms() -> TripForms {
    TripForms {
        loading: LoadingLegForm {
            loading_sailing_days: text("2"),
            idle_days: text("1"),
            loading_days: text("3"),
            surveyor_days: text("0.5"),
            pda_cost: text("5000"),
            surveyor_cost: text("1000"),
            bunker_price: text("600"),
            laden_bunker_per_day: text("30"),
            revenue_per_mt: text("15"),
        },
        discharging: DischargingLegForm {
            discharging_sailing_days: text("2"),
            discharge_days: text("2"),
            awrp_crew_bonus_piracy: text("3000"),
            bunker_price: text("600"),
            laden_bunker_per_day: text("28"),
        },
    }
}

#[test]
fn test_calculate_and_save_report() {
    let dir = tempdir().unwrap();
    let vessels = FileVesselRepository::open(dir.path().to_path_buf()).unwrap();
    let reports = FileTripReportRepository::open(dir.path().to_path_buf()).unwrap();
    vessels.save(&ocean_star()).unwrap();
    let service = TripService::new(&vessels, &reports);

    let result = service.calculate("MV Ocean Star", &forms()).unwrap();
    assert_eq!(result.loading.total_cost, 154700.0);
    assert_eq!(result.totals.total_cost, 259600.0);
    assert!(result.warnings.is_empty());

    let report = service
        .save_report(
            "ocean-star",
            &forms(),
            result,
            Some("March trip".to_string()),
            None,
        )
        .unwrap();
    assert_eq!(report.vessel_id, "ocean-star");
    assert_eq!(report.display_title(), "March trip");
    assert!((report.loading_input.revenue_per_mt - 15.0).abs() < f64::EPSILON);

    // Reopen from disk
    let reports = FileTripReportRepository::open(dir.path().to_path_buf()).unwrap();
    let service = TripService::new(&vessels, &reports);
    let saved = service.reports(Some("ocean-star")).unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id, report.id);
    assert!(service.reports(None).unwrap().len() == 1);
}

#[test]
fn test_not_found_and_not_eligible_are_distinct() {
    let dir = tempdir().unwrap();
    let vessels = FileVesselRepository::open(dir.path().to_path_buf()).unwrap();
    let reports = FileTripReportRepository::open(dir.path().to_path_buf()).unwrap();
    let mut partial = ocean_star();
    partial.id = "partial".to_string();
    partial.name = "MV Partial".to_string();
    partial.hire = None;
    vessels.save(&partial).unwrap();
    let service = TripService::new(&vessels, &reports);

    match service.calculate("ghost", &forms()) {
        Err(Error::VesselNotFound(q)) => assert_eq!(q, "ghost"),
        other => panic!("expected VesselNotFound, got {:?}", other),
    }
    match service.calculate("partial", &forms()) {
        Err(Error::VesselNotEligible { id, missing }) => {
            assert_eq!(id, "partial");
            assert_eq!(missing, vec!["hire".to_string()]);
        }
        other => panic!("expected VesselNotEligible, got {:?}", other),
    }
}

#[test]
fn test_selectable_vessels_excludes_incomplete() {
    let dir = tempdir().unwrap();
    let vessels = FileVesselRepository::open(dir.path().to_path_buf()).unwrap();
    let reports = FileTripReportRepository::open(dir.path().to_path_buf()).unwrap();
    vessels.save(&ocean_star()).unwrap();
    vessels.save(&VesselRecord::new("MV Empty")).unwrap();
    let service = TripService::new(&vessels, &reports);

    let selectable = service.selectable_vessels().unwrap();
    assert_eq!(selectable.len(), 1);
    assert_eq!(selectable[0].id, "ocean-star");
}

#[test]
fn test_invalid_form_names_field_and_phase() {
    let dir = tempdir().unwrap();
    let vessels = FileVesselRepository::open(dir.path().to_path_buf()).unwrap();
    let reports = FileTripReportRepository::open(dir.path().to_path_buf()).unwrap();
    vessels.save(&ocean_star()).unwrap();
    let service = TripService::new(&vessels, &reports);

    let mut bad = forms();
    bad.discharging.discharge_days = text("two");
    match service.calculate("ocean-star", &bad) {
        Err(Error::InvalidField { field, phase }) => {
            assert_eq!(field, "dischargeDays");
            assert_eq!(phase, Phase::Discharging);
        }
        other => panic!("expected InvalidField, got {:?}", other),
    }

    let mut bad = forms();
    bad.loading.bunker_price = text("x");
    assert!(matches!(
        service.calculate("ocean-star", &bad),
        Err(Error::InvalidField {
            field: "bunkerPrice",
            phase: Phase::Loading
        })
    ));
}

#[test]
fn test_vessel_management_goes_through_repository() {
    let dir = tempdir().unwrap();
    let vessels = FileVesselRepository::open(dir.path().to_path_buf()).unwrap();
    let reports = FileTripReportRepository::open(dir.path().to_path_buf()).unwrap();
    let service = TripService::new(&vessels, &reports);

    let mut vessel = ocean_star();
    service.add_vessel(&vessel).unwrap();
    assert!(matches!(
        service.add_vessel(&vessel),
        Err(Error::Store(StoreError::Duplicate(_)))
    ));

    vessel.flag = Some("PA".to_string());
    assert!(service.upsert_vessel(&vessel).unwrap());
    assert!(!service.upsert_vessel(&VesselRecord::new("MV Fresh")).unwrap());
    assert_eq!(service.all_vessels().unwrap().len(), 2);

    let removed = service.remove_vessel("mv ocean star").unwrap();
    assert_eq!(removed.id, "ocean-star");
    assert!(!service.is_registered("ocean-star").unwrap());
    assert!(matches!(
        service.remove_vessel("ocean-star"),
        Err(Error::VesselNotFound(_))
    ));
}

#[test]
fn test_report_show_attach_remove() {
    let dir = tempdir().unwrap();
    let vessels = FileVesselRepository::open(dir.path().to_path_buf()).unwrap();
    let reports = FileTripReportRepository::open(dir.path().join("store")).unwrap();
    let service = TripService::new(&vessels, &reports);
    service.add_vessel(&ocean_star()).unwrap();

    let result = service.calculate("ocean-star", &forms()).unwrap();
    let report = service
        .save_report("ocean-star", &forms(), result, None, Some("fixture".to_string()))
        .unwrap();

    let invoice = dir.path().join("invoice.txt");
    std::fs::write(&invoice, b"abc").unwrap();
    let attachment = service.attach_file(&report.id, &invoice).unwrap();
    assert_eq!(attachment.size_bytes, 3);

    let loaded = service.report(&report.id).unwrap();
    assert_eq!(loaded.notes.as_deref(), Some("fixture"));
    assert_eq!(loaded.attachments.len(), 1);

    service.remove_report(&report.id).unwrap();
    assert!(matches!(
        service.report(&report.id),
        Err(Error::ReportNotFound(_))
    ));
    assert!(matches!(
        service.remove_report(&report.id),
        Err(Error::ReportNotFound(_))
    ));
}
