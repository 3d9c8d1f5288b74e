//! Voyage leg inputs
//!
//! `*LegForm` types hold raw text as entered; `parse` turns them into the
//! typed `*LegInput` records the calculator accepts.

use serde::{Deserialize, Serialize};
use tripcost_types::Phase;

use super::lenient::optional_text;
use crate::error::CalculationError;

/// Loading phase input, already validated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadingLegInput {
    pub loading_sailing_days: f64,
    pub idle_days: f64,
    pub loading_days: f64,
    pub surveyor_days: f64,
    pub pda_cost: f64,
    pub surveyor_cost: f64,
    /// $/t
    pub bunker_price: f64,
    /// t/day on top of the vessel's laden increment
    pub laden_bunker_per_day: f64,
    /// Whole-trip revenue rate, $/MT
    #[serde(default)]
    pub revenue_per_mt: f64,
}

/// Discharging phase input, already validated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DischargingLegInput {
    pub discharging_sailing_days: f64,
    pub discharge_days: f64,
    /// AWRP, crew bonus and piracy surcharge as one lump sum
    pub awrp_crew_bonus_piracy: f64,
    pub bunker_price: f64,
    pub laden_bunker_per_day: f64,
}

/// Raw loading form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadingLegForm {
    #[serde(default, alias = "loadingSailingDays", deserialize_with = "optional_text")]
    pub loading_sailing_days: Option<String>,
    #[serde(default, alias = "idleDays", deserialize_with = "optional_text")]
    pub idle_days: Option<String>,
    #[serde(default, alias = "loadingDays", deserialize_with = "optional_text")]
    pub loading_days: Option<String>,
    #[serde(default, alias = "surveyorDays", deserialize_with = "optional_text")]
    pub surveyor_days: Option<String>,
    #[serde(default, alias = "pdaCost", deserialize_with = "optional_text")]
    pub pda_cost: Option<String>,
    #[serde(default, alias = "surveyorCost", deserialize_with = "optional_text")]
    pub surveyor_cost: Option<String>,
    #[serde(default, alias = "bunkerPrice", deserialize_with = "optional_text")]
    pub bunker_price: Option<String>,
    #[serde(default, alias = "ladenBunkerPerDay", deserialize_with = "optional_text")]
    pub laden_bunker_per_day: Option<String>,
    #[serde(default, alias = "revenuePerMT", deserialize_with = "optional_text")]
    pub revenue_per_mt: Option<String>,
}

/// Raw discharging form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DischargingLegForm {
    #[serde(default, alias = "dischargingSailingDays", deserialize_with = "optional_text")]
    pub discharging_sailing_days: Option<String>,
    #[serde(default, alias = "dischargeDays", deserialize_with = "optional_text")]
    pub discharge_days: Option<String>,
    #[serde(default, alias = "awrpCrewBonusPiracy", deserialize_with = "optional_text")]
    pub awrp_crew_bonus_piracy: Option<String>,
    #[serde(default, alias = "bunkerPrice", deserialize_with = "optional_text")]
    pub bunker_price: Option<String>,
    #[serde(default, alias = "ladenBunkerPerDay", deserialize_with = "optional_text")]
    pub laden_bunker_per_day: Option<String>,
}

/// Both leg forms of one trip
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TripForms {
    #[serde(default)]
    pub loading: LoadingLegForm,
    #[serde(default)]
    pub discharging: DischargingLegForm,
}

fn required(
    value: &Option<String>,
    field: &'static str,
    phase: Phase,
) -> Result<f64, CalculationError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .ok_or_else(|| CalculationError::InvalidField {
            field,
            phase,
            value: value.clone(),
        })
}

/// Optional number: absent, blank, or unparsable all read as 0.
/// Parsing is strict, so `"15abc"` reads as 0 rather than its leading 15.
fn optional_or_zero(value: &Option<String>) -> f64 {
    value
        .as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

impl LoadingLegForm {
    /// Validate fields in form order; the first bad field wins
    pub fn parse(&self) -> Result<LoadingLegInput, CalculationError> {
        let phase = Phase::Loading;
        Ok(LoadingLegInput {
            loading_sailing_days: required(&self.loading_sailing_days, "loadingSailingDays", phase)?,
            idle_days: required(&self.idle_days, "idleDays", phase)?,
            loading_days: required(&self.loading_days, "loadingDays", phase)?,
            surveyor_days: required(&self.surveyor_days, "surveyorDays", phase)?,
            pda_cost: required(&self.pda_cost, "pdaCost", phase)?,
            surveyor_cost: required(&self.surveyor_cost, "surveyorCost", phase)?,
            bunker_price: required(&self.bunker_price, "bunkerPrice", phase)?,
            laden_bunker_per_day: required(&self.laden_bunker_per_day, "ladenBunkerPerDay", phase)?,
            revenue_per_mt: optional_or_zero(&self.revenue_per_mt),
        })
    }
}

impl DischargingLegForm {
    /// Validate fields in form order; the first bad field wins
    pub fn parse(&self) -> Result<DischargingLegInput, CalculationError> {
        let phase = Phase::Discharging;
        Ok(DischargingLegInput {
            discharging_sailing_days: required(
                &self.discharging_sailing_days,
                "dischargingSailingDays",
                phase,
            )?,
            discharge_days: required(&self.discharge_days, "dischargeDays", phase)?,
            awrp_crew_bonus_piracy: required(
                &self.awrp_crew_bonus_piracy,
                "awrpCrewBonusPiracy",
                phase,
            )?,
            bunker_price: required(&self.bunker_price, "bunkerPrice", phase)?,
            laden_bunker_per_day: required(&self.laden_bunker_per_day, "ladenBunkerPerDay", phase)?,
        })
    }
}
