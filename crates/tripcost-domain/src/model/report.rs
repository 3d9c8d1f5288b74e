//! Saved trip report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::leg::{DischargingLegInput, LoadingLegInput};
use super::trip::TripCalculationResult;
use super::vessel::VesselRecord;

/// File attached to a trip report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttachmentRef {
    pub file_name: String,
    pub path: String,
    /// Hex SHA-256 of the file contents
    pub sha256: String,
    pub size_bytes: u64,
    pub attached_at: DateTime<Utc>,
}

/// Calculation result persisted with the inputs and a vessel snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripReport {
    pub id: String,
    pub vessel_id: String,
    /// Vessel document as it was when the trip was calculated
    pub vessel: VesselRecord,
    pub loading_input: LoadingLegInput,
    pub discharging_input: DischargingLegInput,
    pub result: TripCalculationResult,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub attachments: Vec<AttachmentRef>,
    pub created_at: DateTime<Utc>,
}

impl TripReport {
    pub fn new(
        vessel: &VesselRecord,
        loading_input: LoadingLegInput,
        discharging_input: DischargingLegInput,
        result: TripCalculationResult,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            vessel_id: vessel.id.clone(),
            vessel: vessel.clone(),
            loading_input,
            discharging_input,
            result,
            title: None,
            notes: None,
            attachments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Title if set, otherwise the vessel name and creation date
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("{} {}", self.vessel.name, self.created_at.format("%Y-%m-%d")),
        }
    }
}
