//! Vessel document and calculation profile

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient::optional_text;

/// Technical fields a vessel document must carry before it can be
/// selected for a trip calculation. Zero is a valid value; absence is not.
pub const TRIP_REQUIRED_FIELDS: [&str; 12] = [
    "doPrice",
    "doStandby",
    "doAtSea",
    "doDischarge",
    "doIdle",
    "loading",
    "idle",
    "hire",
    "hirePerDay",
    "vesselCapacity",
    "seaBallastWithCargoTemp",
    "discharging",
];

fn default_registered_at() -> DateTime<Utc> {
    Utc::now()
}

/// Stored vessel document
///
/// Every technical field is optional because documents are entered
/// incrementally. Keys are snake_case; camelCase keys from document
/// exports are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselRecord {
    /// Unique identifier
    pub id: String,
    /// Vessel name (e.g., "MV Ocean Star")
    #[serde(alias = "vesselName")]
    pub name: String,
    #[serde(default, alias = "imoNumber")]
    pub imo_number: Option<String>,
    #[serde(default, alias = "vesselType")]
    pub vessel_type: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,

    /// Diesel oil price, $/unit
    #[serde(default, alias = "doPrice")]
    pub do_price: Option<f64>,
    /// Diesel oil consumption on standby (units/day)
    #[serde(default, alias = "doStandby")]
    pub do_standby: Option<f64>,
    /// Diesel oil consumption at sea (units/day)
    #[serde(default, alias = "doAtSea")]
    pub do_at_sea: Option<f64>,
    /// Diesel oil consumption while discharging (units/day)
    #[serde(default, alias = "doDischarge")]
    pub do_discharge: Option<f64>,
    /// Diesel oil consumption while idle (units/day)
    #[serde(default, alias = "doIdle")]
    pub do_idle: Option<f64>,
    /// Bunker consumption while loading (t/day)
    #[serde(default)]
    pub loading: Option<f64>,
    /// Bunker consumption while idle (t/day)
    #[serde(default)]
    pub idle: Option<f64>,
    /// Lump-sum hire as entered on the vessel sheet
    #[serde(default)]
    pub hire: Option<f64>,
    /// Charter hire, $/day
    #[serde(default, alias = "hirePerDay")]
    pub hire_per_day: Option<f64>,
    /// Free-text capacity (e.g., "50000 MT")
    #[serde(default, alias = "vesselCapacity", deserialize_with = "optional_text")]
    pub vessel_capacity: Option<String>,
    /// Extra bunker consumption sailing laden (t/day)
    #[serde(default, alias = "seaBallastWithCargoTemp")]
    pub sea_ballast_with_cargo_temp: Option<f64>,
    /// Bunker consumption while discharging (t/day)
    #[serde(default)]
    pub discharging: Option<f64>,

    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default = "default_registered_at", alias = "registeredAt")]
    pub registered_at: DateTime<Utc>,
}

impl VesselRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            imo_number: None,
            vessel_type: None,
            flag: None,
            do_price: None,
            do_standby: None,
            do_at_sea: None,
            do_discharge: None,
            do_idle: None,
            loading: None,
            idle: None,
            hire: None,
            hire_per_day: None,
            vessel_capacity: None,
            sea_ballast_with_cargo_temp: None,
            discharging: None,
            notes: None,
            registered_at: Utc::now(),
        }
    }

    /// Required trip fields that are absent, in declaration order
    pub fn missing_trip_fields(&self) -> Vec<&'static str> {
        let present = [
            self.do_price.is_some(),
            self.do_standby.is_some(),
            self.do_at_sea.is_some(),
            self.do_discharge.is_some(),
            self.do_idle.is_some(),
            self.loading.is_some(),
            self.idle.is_some(),
            self.hire.is_some(),
            self.hire_per_day.is_some(),
            self.vessel_capacity.is_some(),
            self.sea_ballast_with_cargo_temp.is_some(),
            self.discharging.is_some(),
        ];
        TRIP_REQUIRED_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, ok)| !ok)
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn is_trip_eligible(&self) -> bool {
        self.missing_trip_fields().is_empty()
    }

    /// Calculation view of this vessel, `None` unless eligible
    pub fn profile(&self) -> Option<VesselProfile> {
        if !self.is_trip_eligible() {
            return None;
        }
        Some(VesselProfile {
            do_price: self.do_price?,
            do_idle: self.do_idle?,
            do_at_sea: self.do_at_sea?,
            do_discharge: self.do_discharge?,
            loading: self.loading?,
            idle: self.idle?,
            hire_per_day: self.hire_per_day?,
            vessel_capacity: self.vessel_capacity.clone()?,
            sea_ballast_with_cargo_temp: self.sea_ballast_with_cargo_temp?,
            discharging: self.discharging?,
        })
    }
}

/// Vessel parameters consumed by the trip calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselProfile {
    pub do_price: f64,
    pub do_idle: f64,
    pub do_at_sea: f64,
    pub do_discharge: f64,
    pub loading: f64,
    pub idle: f64,
    pub hire_per_day: f64,
    pub vessel_capacity: String,
    pub sea_ballast_with_cargo_temp: f64,
    pub discharging: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_record() -> VesselRecord {
        let mut v = VesselRecord::new("MV Ocean Star");
        v.do_price = Some(500.0);
        v.do_standby = Some(1.5);
        v.do_at_sea = Some(3.0);
        v.do_discharge = Some(2.5);
        v.do_idle = Some(2.0);
        v.loading = Some(20.0);
        v.idle = Some(5.0);
        v.hire = Some(300000.0);
        v.hire_per_day = Some(10000.0);
        v.vessel_capacity = Some("50000 MT".to_string());
        v.sea_ballast_with_cargo_temp = Some(1.0);
        v.discharging = Some(18.0);
        v
    }

    #[test]
    fn test_complete_record_is_eligible() {
        let v = complete_record();
        assert!(v.is_trip_eligible());
        let profile = v.profile().unwrap();
        assert_eq!(profile.vessel_capacity, "50000 MT");
        assert!((profile.hire_per_day - 10000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_values_are_present() {
        let mut v = complete_record();
        v.do_standby = Some(0.0);
        v.hire = Some(0.0);
        v.discharging = Some(0.0);
        assert!(v.is_trip_eligible());
    }

    #[test]
    fn test_missing_fields_listed_in_order() {
        let mut v = complete_record();
        v.hire = None;
        v.do_standby = None;
        assert_eq!(v.missing_trip_fields(), vec!["doStandby", "hire"]);
        assert!(!v.is_trip_eligible());
        assert!(v.profile().is_none());
    }

    #[test]
    fn test_new_record_misses_everything() {
        let v = VesselRecord::new("Empty");
        assert_eq!(v.missing_trip_fields().len(), TRIP_REQUIRED_FIELDS.len());
    }

    #[test]
    fn test_deserialize_camel_case_document() {
        let json = r#"{
            "id": "abc",
            "name": "MV Camel",
            "doPrice": 500,
            "doStandby": 1,
            "doAtSea": 3,
            "doDischarge": 2.5,
            "doIdle": 2,
            "loading": 20,
            "idle": 5,
            "hire": 0,
            "hirePerDay": 10000,
            "vesselCapacity": 50000,
            "seaBallastWithCargoTemp": 1,
            "discharging": 18
        }"#;
        let v: VesselRecord = serde_json::from_str(json).unwrap();
        assert_eq!(v.vessel_capacity.as_deref(), Some("50000"));
        assert!(v.is_trip_eligible());
    }

    #[test]
    fn test_deserialize_null_field_is_missing() {
        let json = r#"{"id": "x", "name": "MV Null", "doPrice": null}"#;
        let v: VesselRecord = serde_json::from_str(json).unwrap();
        assert!(v.do_price.is_none());
        assert!(v.missing_trip_fields().contains(&"doPrice"));
    }
}
