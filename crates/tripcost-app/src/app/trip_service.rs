//! Trip Service - vessel selection, calculation and trip reports
//!
//! Works against the repository traits so the same flow runs over the JSON
//! stores or any other backing.

use std::path::Path;

use tracing::{debug, info};
use tripcost_domain::model::{
    AttachmentRef, TripCalculationResult, TripForms, TripReport, VesselProfile, VesselRecord,
};
use tripcost_domain::repository::{TripReportRepository, VesselRepository};
use tripcost_domain::service::{calculate_from_forms, eligible_vessels, find_vessel};
use tripcost_types::{Error, Result};

pub struct TripService<'a, V, R> {
    vessels: &'a V,
    reports: &'a R,
}

impl<'a, V, R> TripService<'a, V, R>
where
    V: VesselRepository,
    R: TripReportRepository,
{
    pub fn new(vessels: &'a V, reports: &'a R) -> Self {
        Self { vessels, reports }
    }

    /// Every stored vessel, sorted by name
    pub fn all_vessels(&self) -> Result<Vec<VesselRecord>> {
        self.vessels.find_all()
    }

    /// Vessels that carry every field the calculator needs
    pub fn selectable_vessels(&self) -> Result<Vec<VesselRecord>> {
        let all = self.vessels.find_all()?;
        Ok(eligible_vessels(&all).into_iter().cloned().collect())
    }

    /// Look a vessel up by id, then by name
    pub fn resolve_vessel(&self, query: &str) -> Result<VesselRecord> {
        if let Some(vessel) = self.vessels.find_by_id(query)? {
            return Ok(vessel);
        }
        let all = self.vessels.find_all()?;
        find_vessel(query, &all)
            .cloned()
            .ok_or_else(|| Error::VesselNotFound(query.to_string()))
    }

    /// Resolve a vessel and its calculation profile
    pub fn resolve_profile(&self, query: &str) -> Result<(VesselRecord, VesselProfile)> {
        let vessel = self.resolve_vessel(query)?;
        match vessel.profile() {
            Some(profile) => Ok((vessel, profile)),
            None => Err(Error::VesselNotEligible {
                id: vessel.id.clone(),
                missing: vessel
                    .missing_trip_fields()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            }),
        }
    }

    /// Validate the forms and run the trip calculation for one vessel
    pub fn calculate(&self, query: &str, forms: &TripForms) -> Result<TripCalculationResult> {
        let (vessel, profile) = self.resolve_profile(query)?;
        debug!(vessel = %vessel.id, "calculating trip");
        let result = calculate_from_forms(Some(&profile), &forms.loading, &forms.discharging)?;
        Ok(result)
    }

    /// Persist a calculated trip with the parsed inputs and a vessel snapshot
    pub fn save_report(
        &self,
        query: &str,
        forms: &TripForms,
        result: TripCalculationResult,
        title: Option<String>,
        notes: Option<String>,
    ) -> Result<TripReport> {
        let vessel = self.resolve_vessel(query)?;
        let loading = forms.loading.parse()?;
        let discharging = forms.discharging.parse()?;

        let mut report = TripReport::new(&vessel, loading, discharging, result);
        if let Some(title) = title {
            report = report.with_title(title);
        }
        if let Some(notes) = notes {
            report = report.with_notes(notes);
        }
        self.reports.save(&report)?;
        info!(report = %report.id, vessel = %vessel.id, "trip report recorded");
        Ok(report)
    }

    /// Saved reports, optionally for one vessel, newest first
    pub fn reports(&self, vessel: Option<&str>) -> Result<Vec<TripReport>> {
        match vessel {
            Some(query) => {
                let vessel = self.resolve_vessel(query)?;
                self.reports.find_by_vessel(&vessel.id)
            }
            None => self.reports.find_all(),
        }
    }

    /// Register a new vessel; an id already stored is a duplicate error
    pub fn add_vessel(&self, vessel: &VesselRecord) -> Result<()> {
        self.vessels.add(vessel)
    }

    /// Insert or replace a vessel, returning whether it replaced one
    pub fn upsert_vessel(&self, vessel: &VesselRecord) -> Result<bool> {
        let replaced = self.is_registered(&vessel.id)?;
        self.vessels.save(vessel)?;
        Ok(replaced)
    }

    pub fn is_registered(&self, vessel_id: &str) -> Result<bool> {
        Ok(self.vessels.find_by_id(vessel_id)?.is_some())
    }

    /// Remove a vessel looked up by id or name; its reports are kept
    pub fn remove_vessel(&self, query: &str) -> Result<VesselRecord> {
        let vessel = self.resolve_vessel(query)?;
        self.vessels.remove(&vessel.id)?;
        info!(vessel = %vessel.id, "vessel removed");
        Ok(vessel)
    }

    pub fn report(&self, report_id: &str) -> Result<TripReport> {
        self.reports
            .find_by_id(report_id)?
            .ok_or_else(|| Error::ReportNotFound(report_id.to_string()))
    }

    pub fn attach_file(&self, report_id: &str, path: &Path) -> Result<AttachmentRef> {
        self.reports.attach_file(report_id, path)
    }

    pub fn remove_report(&self, report_id: &str) -> Result<()> {
        if self.reports.remove(report_id)? {
            Ok(())
        } else {
            Err(Error::ReportNotFound(report_id.to_string()))
        }
    }
}
