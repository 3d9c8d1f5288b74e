//! Plain-text trip summary

use crate::model::TripCalculationResult;

const RULE: &str = "==================================================";

fn money_row(label: &str, value: f64) -> String {
    format!("  {:<28} {:>16.2}\n", label, value)
}

/// Render a fixed-width summary of a calculation result
pub fn render_trip_summary(vessel_name: &str, result: &TripCalculationResult) -> String {
    let l = &result.loading;
    let d = &result.discharging;
    let t = &result.totals;

    let mut report = String::new();
    report.push_str(RULE);
    report.push('\n');
    report.push_str("              Trip Cost Calculation               \n");
    report.push_str(RULE);
    report.push_str("\n\n");
    report.push_str(&format!("  Vessel:   {}\n", vessel_name));
    report.push_str(&format!(
        "  Capacity: {:.2} MT{}\n\n",
        result.capacity.value,
        if result.capacity.fallback { " (fallback)" } else { "" }
    ));

    report.push_str(&format!("[Loading] {:.2} days\n", l.total_days));
    report.push_str(&"-".repeat(50));
    report.push('\n');
    report.push_str(&money_row("Bunker idle", l.bunker_idle_cost));
    report.push_str(&money_row("Bunker laden", l.bunker_laden_cost));
    report.push_str(&money_row("Bunker loading", l.bunker_loading_cost));
    report.push_str(&money_row("Surveyor bunker", l.surveyor_bunker_cost));
    report.push_str(&money_row("Hire", l.hire_cost));
    report.push_str(&money_row("PDA", l.pda_cost));
    report.push_str(&money_row("Surveyor", l.surveyor_cost));
    report.push_str(&money_row("Total cost", l.total_cost));
    report.push_str(&money_row("Cost per MT", l.cost_per_mt));
    report.push_str(&money_row("Revenue", l.revenue));
    report.push_str(&money_row("Profit", l.profit));
    report.push_str(&format!("  {:<28} {:>15.2}%\n\n", "Margin", l.profit_margin_pct));

    report.push_str(&format!("[Discharging] {:.2} days\n", d.total_days));
    report.push_str(&"-".repeat(50));
    report.push('\n');
    report.push_str(&money_row("Bunker sailing", d.bunker_sailing_cost));
    report.push_str(&money_row("Bunker discharging", d.bunker_discharging_cost));
    report.push_str(&money_row("Hire", d.hire_cost));
    report.push_str(&money_row("AWRP / crew bonus / piracy", d.awrp_crew_bonus_piracy));
    report.push_str(&money_row("Total cost", d.total_cost));
    report.push_str(&money_row("Cost per MT", d.cost_per_mt));
    report.push_str(&money_row("Revenue", d.revenue));
    report.push_str(&money_row("Profit", d.profit));
    report.push_str(&format!("  {:<28} {:>15.2}%\n\n", "Margin", d.profit_margin_pct));

    report.push_str(&format!("[Trip total] {:.2} days\n", t.grand_total_days));
    report.push_str(&"-".repeat(50));
    report.push('\n');
    report.push_str(&money_row("Total cost", t.total_cost));
    report.push_str(&money_row("Cost per MT", t.total_cost_per_mt));
    report.push_str(&money_row("Revenue per MT", t.total_revenue_per_mt));
    report.push_str(&money_row("Revenue", t.total_revenue));
    report.push_str(&money_row("Profit", t.total_profit));
    report.push_str(&money_row("Profit per MT", t.total_profit_per_mt));
    report.push_str(&format!(
        "  {:<28} {:>15.2}%\n\n",
        "Margin", t.total_profit_margin_pct
    ));

    report.push_str("  Note: trip revenue is booked on the loading phase;\n");
    report.push_str("  discharging always shows zero revenue.\n");

    if !result.warnings.is_empty() {
        report.push_str("\n[Warnings]\n");
        for warning in &result.warnings {
            report.push_str(&format!("  - {}\n", warning));
        }
    }

    report.push_str(RULE);
    report.push('\n');
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DischargingLegInput, LoadingLegInput, VesselProfile};
    use crate::service::calculate;

    fn result(capacity: &str) -> TripCalculationResult {
        let vessel = VesselProfile {
            do_price: 500.0,
            do_idle: 2.0,
            do_at_sea: 3.0,
            do_discharge: 2.5,
            loading: 20.0,
            idle: 5.0,
            hire_per_day: 10000.0,
            vessel_capacity: capacity.to_string(),
            sea_ballast_with_cargo_temp: 1.0,
            discharging: 18.0,
        };
        let loading = LoadingLegInput {
            loading_sailing_days: 2.0,
            idle_days: 1.0,
            loading_days: 3.0,
            surveyor_days: 0.5,
            pda_cost: 5000.0,
            surveyor_cost: 1000.0,
            bunker_price: 600.0,
            laden_bunker_per_day: 30.0,
            revenue_per_mt: 15.0,
        };
        let discharging = DischargingLegInput {
            discharging_sailing_days: 2.0,
            discharge_days: 2.0,
            awrp_crew_bonus_piracy: 3000.0,
            bunker_price: 600.0,
            laden_bunker_per_day: 28.0,
        };
        calculate(&vessel, &loading, &discharging)
    }

    #[test]
    fn test_summary_contains_totals() {
        let text = render_trip_summary("MV Ocean Star", &result("50000"));
        assert!(text.contains("MV Ocean Star"));
        assert!(text.contains("154700.00"));
        assert!(text.contains("259600.00"));
        assert!(!text.contains("[Warnings]"));
    }

    #[test]
    fn test_summary_lists_capacity_warning() {
        let text = render_trip_summary("MV Unknown", &result("n/a"));
        assert!(text.contains("(fallback)"));
        assert!(text.contains("[Warnings]"));
        assert!(text.contains("\"n/a\""));
    }
}
