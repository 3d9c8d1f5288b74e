//! Trip calculation result types

use serde::{Deserialize, Serialize};

/// Capacity figure used for every per-MT division
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityMt {
    /// Capacity text as stored on the vessel
    pub raw: String,
    /// Metric tons after extraction (never zero)
    pub value: f64,
    /// True when extraction failed and `value` was forced to 1
    pub fallback: bool,
}

/// Loading phase breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingBreakdown {
    pub bunker_idle_cost: f64,
    pub bunker_laden_cost: f64,
    pub bunker_loading_cost: f64,
    pub surveyor_bunker_cost: f64,
    pub hire_cost: f64,
    pub pda_cost: f64,
    pub surveyor_cost: f64,
    pub total_cost: f64,
    pub cost_per_mt: f64,
    pub total_days: f64,
    pub revenue_per_mt: f64,
    pub revenue: f64,
    pub profit: f64,
    pub profit_per_mt: f64,
    pub profit_margin_pct: f64,
}

/// Discharging phase breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DischargingBreakdown {
    pub bunker_sailing_cost: f64,
    pub bunker_discharging_cost: f64,
    pub hire_cost: f64,
    pub awrp_crew_bonus_piracy: f64,
    pub total_cost: f64,
    pub cost_per_mt: f64,
    pub total_days: f64,
    /// Always 0: trip revenue is booked on the loading phase
    pub revenue: f64,
    pub profit: f64,
    pub profit_per_mt: f64,
    pub profit_margin_pct: f64,
}

/// Whole-trip aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripTotals {
    pub total_cost: f64,
    pub total_cost_per_mt: f64,
    pub total_revenue_per_mt: f64,
    pub total_revenue: f64,
    pub total_profit: f64,
    pub total_profit_per_mt: f64,
    pub total_profit_margin_pct: f64,
    pub grand_total_days: f64,
}

/// Non-fatal findings raised during a calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculationWarning {
    /// Capacity text held no usable number; 1 MT was used instead
    CapacityFallback { raw: String },
}

impl std::fmt::Display for CalculationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculationWarning::CapacityFallback { raw } => write!(
                f,
                "vessel capacity {:?} has no usable tonnage; per-MT figures use 1 MT",
                raw
            ),
        }
    }
}

/// Complete output of one trip calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripCalculationResult {
    pub capacity: CapacityMt,
    pub loading: LoadingBreakdown,
    pub discharging: DischargingBreakdown,
    pub totals: TripTotals,
    #[serde(default)]
    pub warnings: Vec<CalculationWarning>,
}
