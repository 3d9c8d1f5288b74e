//! Output formatting module

use serde::Serialize;
use tripcost_domain::model::{TripCalculationResult, TripReport, VesselRecord};
use tripcost_domain::service::render_trip_summary;
use tripcost_types::{OutputFormat, Result};

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

fn opt_number(value: Option<f64>) -> String {
    value
        .map(|n| format!("{}", n))
        .unwrap_or_else(|| "-".to_string())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

pub fn output_trip_result(
    output_format: OutputFormat,
    vessel_name: &str,
    result: &TripCalculationResult,
    currency: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(result);
    }
    println!();
    print!("{}", render_trip_summary(vessel_name, result));
    println!("\n  Amounts in {}", currency);
    Ok(())
}

pub fn output_vessel_list(output_format: OutputFormat, vessels: &[VesselRecord]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(vessels);
    }
    if vessels.is_empty() {
        println!("No vessels found.");
        return Ok(());
    }

    println!(
        "{:<38} {:<28} {:>14} {:<10}",
        "ID", "Name", "Capacity", "Trip-ready"
    );
    println!("{}", "-".repeat(93));
    for v in vessels {
        let missing = v.missing_trip_fields();
        let ready = if missing.is_empty() {
            "yes".to_string()
        } else {
            format!("no ({})", missing.len())
        };
        println!(
            "{:<38} {:<28} {:>14} {:<10}",
            truncate(&v.id, 38),
            truncate(&v.name, 28),
            truncate(v.vessel_capacity.as_deref().unwrap_or("-"), 14),
            ready
        );
    }
    println!("\n{} vessel(s)", vessels.len());
    Ok(())
}

pub fn output_vessel(output_format: OutputFormat, v: &VesselRecord) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(v);
    }
    println!("\nVessel");
    println!("======");
    println!("ID:                    {}", v.id);
    println!("Name:                  {}", v.name);
    if let Some(ref imo) = v.imo_number {
        println!("IMO:                   {}", imo);
    }
    if let Some(ref vessel_type) = v.vessel_type {
        println!("Type:                  {}", vessel_type);
    }
    if let Some(ref flag) = v.flag {
        println!("Flag:                  {}", flag);
    }
    println!("Registered:            {}", v.registered_at.format("%Y-%m-%d %H:%M"));

    println!("\n--- Technical ---");
    println!("DO price:              {}", opt_number(v.do_price));
    println!("DO standby:            {}", opt_number(v.do_standby));
    println!("DO at sea:             {}", opt_number(v.do_at_sea));
    println!("DO discharge:          {}", opt_number(v.do_discharge));
    println!("DO idle:               {}", opt_number(v.do_idle));
    println!("Loading:               {}", opt_number(v.loading));
    println!("Idle:                  {}", opt_number(v.idle));
    println!("Hire:                  {}", opt_number(v.hire));
    println!("Hire per day:          {}", opt_number(v.hire_per_day));
    println!(
        "Capacity:              {}",
        v.vessel_capacity.as_deref().unwrap_or("-")
    );
    println!("Laden increment:       {}", opt_number(v.sea_ballast_with_cargo_temp));
    println!("Discharging:           {}", opt_number(v.discharging));

    let missing = v.missing_trip_fields();
    if missing.is_empty() {
        println!("\nTrip-ready:            yes");
    } else {
        println!("\nTrip-ready:            no (missing: {})", missing.join(", "));
    }
    if let Some(ref notes) = v.notes {
        println!("\nNotes:\n{}", notes);
    }
    Ok(())
}

pub fn output_report_list(
    output_format: OutputFormat,
    reports: &[TripReport],
    total: usize,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(reports);
    }

    println!("Trip Reports");
    println!("============");
    println!("Total reports: {}", total);
    println!();

    if reports.is_empty() {
        println!("No reports found.");
        return Ok(());
    }

    println!(
        "{:<38} {:<30} {:>14} {:>14} {:>12}",
        "ID", "Title", "Cost", "Profit", "Date"
    );
    println!("{}", "-".repeat(112));
    for r in reports {
        println!(
            "{:<38} {:<30} {:>14.2} {:>14.2} {:>12}",
            r.id,
            truncate(&r.display_title(), 30),
            r.result.totals.total_cost,
            r.result.totals.total_profit,
            r.created_at.format("%Y-%m-%d")
        );
    }
    Ok(())
}

pub fn output_report(output_format: OutputFormat, report: &TripReport, currency: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(report);
    }
    println!("\n{}", report.display_title());
    println!("ID:      {}", report.id);
    println!("Vessel:  {} ({})", report.vessel.name, report.vessel_id);
    println!("Created: {}", report.created_at.format("%Y-%m-%d %H:%M"));
    if let Some(ref notes) = report.notes {
        println!("Notes:   {}", notes);
    }
    output_trip_result(OutputFormat::Table, &report.vessel.name, &report.result, currency)?;

    if !report.attachments.is_empty() {
        println!("\nAttachments");
        for a in &report.attachments {
            println!(
                "  {} ({} bytes) sha256:{} [{}]",
                a.file_name,
                a.size_bytes,
                a.sha256,
                a.attached_at.format("%Y-%m-%d")
            );
        }
    }
    Ok(())
}
