//! Trip cost, revenue and profit calculation
//!
//! Bunker costs combine main fuel (rate x days x bunker price) with diesel
//! oil for the auxiliary engine (DO price x DO rate x days). Alongside states
//! (loading days, surveyor days) burn DO at the idle rate.

use tracing::{debug, warn};

use crate::error::CalculationError;
use crate::model::{
    CalculationWarning, DischargingBreakdown, DischargingLegForm, DischargingLegInput,
    LoadingBreakdown, LoadingLegForm, LoadingLegInput, TripCalculationResult, TripTotals,
    VesselProfile,
};
use crate::service::capacity::extract_capacity_mt;

struct Profit {
    profit: f64,
    per_mt: f64,
    margin_pct: f64,
}

fn profit_of(revenue: f64, cost: f64, capacity_mt: f64) -> Profit {
    let profit = revenue - cost;
    Profit {
        profit,
        per_mt: profit / capacity_mt,
        margin_pct: if revenue > 0.0 {
            (profit / revenue) * 100.0
        } else {
            0.0
        },
    }
}

fn loading_breakdown(
    vessel: &VesselProfile,
    input: &LoadingLegInput,
    capacity_mt: f64,
) -> LoadingBreakdown {
    let bunker_idle_cost = input.idle_days * vessel.idle * input.bunker_price
        + vessel.do_price * vessel.do_idle * input.idle_days;
    let bunker_laden_cost = input.loading_sailing_days
        * (input.laden_bunker_per_day + vessel.sea_ballast_with_cargo_temp)
        * input.bunker_price
        + vessel.do_price * vessel.do_at_sea * input.loading_sailing_days;
    let bunker_loading_cost = input.loading_days * vessel.loading * input.bunker_price
        + vessel.do_price * vessel.do_idle * input.loading_days;
    let surveyor_bunker_cost = vessel.do_price * vessel.do_idle * input.surveyor_days;
    let hire_cost = vessel.hire_per_day
        * (input.loading_sailing_days + input.idle_days + input.loading_days + input.surveyor_days);

    let total_cost = bunker_idle_cost
        + bunker_laden_cost
        + bunker_loading_cost
        + surveyor_bunker_cost
        + hire_cost
        + input.pda_cost
        + input.surveyor_cost;
    let total_days =
        input.loading_sailing_days + input.idle_days + input.loading_days + input.surveyor_days;

    // The whole trip's revenue is booked on the loading phase.
    let revenue = capacity_mt * input.revenue_per_mt;
    let profit = profit_of(revenue, total_cost, capacity_mt);

    LoadingBreakdown {
        bunker_idle_cost,
        bunker_laden_cost,
        bunker_loading_cost,
        surveyor_bunker_cost,
        hire_cost,
        pda_cost: input.pda_cost,
        surveyor_cost: input.surveyor_cost,
        total_cost,
        cost_per_mt: total_cost / capacity_mt,
        total_days,
        revenue_per_mt: input.revenue_per_mt,
        revenue,
        profit: profit.profit,
        profit_per_mt: profit.per_mt,
        profit_margin_pct: profit.margin_pct,
    }
}

fn discharging_breakdown(
    vessel: &VesselProfile,
    input: &DischargingLegInput,
    capacity_mt: f64,
) -> DischargingBreakdown {
    let bunker_sailing_cost = input.discharging_sailing_days
        * (input.laden_bunker_per_day + vessel.sea_ballast_with_cargo_temp)
        * input.bunker_price
        + vessel.do_price * vessel.do_at_sea * input.discharging_sailing_days;
    let bunker_discharging_cost = vessel.discharging * input.discharge_days * input.bunker_price
        + vessel.do_price * vessel.do_discharge * input.discharge_days;
    let hire_cost =
        vessel.hire_per_day * (input.discharging_sailing_days + input.discharge_days);

    let total_cost =
        bunker_sailing_cost + bunker_discharging_cost + hire_cost + input.awrp_crew_bonus_piracy;
    let total_days = input.discharging_sailing_days + input.discharge_days;

    let revenue = 0.0;
    let profit = profit_of(revenue, total_cost, capacity_mt);

    DischargingBreakdown {
        bunker_sailing_cost,
        bunker_discharging_cost,
        hire_cost,
        awrp_crew_bonus_piracy: input.awrp_crew_bonus_piracy,
        total_cost,
        cost_per_mt: total_cost / capacity_mt,
        total_days,
        revenue,
        profit: profit.profit,
        profit_per_mt: profit.per_mt,
        profit_margin_pct: profit.margin_pct,
    }
}

/// Calculate the cost, revenue and profit of one trip.
///
/// Pure: identical inputs always produce identical results.
pub fn calculate(
    vessel: &VesselProfile,
    loading: &LoadingLegInput,
    discharging: &DischargingLegInput,
) -> TripCalculationResult {
    let capacity = extract_capacity_mt(&vessel.vessel_capacity);
    let mut warnings = Vec::new();
    if capacity.fallback {
        warn!(raw = %capacity.raw, "vessel capacity unusable, dividing per-MT figures by 1");
        warnings.push(CalculationWarning::CapacityFallback {
            raw: capacity.raw.clone(),
        });
    }
    let capacity_mt = capacity.value;

    let loading = loading_breakdown(vessel, loading, capacity_mt);
    let discharging = discharging_breakdown(vessel, discharging, capacity_mt);
    debug!(
        capacity_mt,
        loading_cost = loading.total_cost,
        discharging_cost = discharging.total_cost,
        "phase costs computed"
    );

    let total_cost = loading.total_cost + discharging.total_cost;
    let total_revenue = loading.revenue + discharging.revenue;
    let trip_profit = profit_of(total_revenue, total_cost, capacity_mt);

    let totals = TripTotals {
        total_cost,
        total_cost_per_mt: total_cost / capacity_mt,
        total_revenue_per_mt: loading.revenue_per_mt,
        total_revenue,
        total_profit: trip_profit.profit,
        total_profit_per_mt: trip_profit.per_mt,
        total_profit_margin_pct: trip_profit.margin_pct,
        grand_total_days: loading.total_days + discharging.total_days,
    };

    TripCalculationResult {
        capacity,
        loading,
        discharging,
        totals,
        warnings,
    }
}

/// Validate raw forms and calculate.
///
/// Checks run in order: vessel selected, loading fields, discharging
/// fields. Nothing is computed unless all of them pass.
pub fn calculate_from_forms(
    vessel: Option<&VesselProfile>,
    loading: &LoadingLegForm,
    discharging: &DischargingLegForm,
) -> Result<TripCalculationResult, CalculationError> {
    let vessel = vessel.ok_or(CalculationError::MissingVessel)?;
    let loading = loading.parse()?;
    let discharging = discharging.parse()?;
    Ok(calculate(vessel, &loading, &discharging))
}
