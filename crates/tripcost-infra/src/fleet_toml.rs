//! Fleet definition loader from TOML
//!
//! ```toml
//! [[vessels]]
//! id = "ocean-star"
//! name = "MV Ocean Star"
//! do_price = 500
//! vessel_capacity = "50000 MT"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;

use tripcost_domain::model::VesselRecord;
use tripcost_types::{ConfigError, Error, Result};

/// Container for parsing fleet TOML files
#[derive(Debug, Deserialize)]
struct FleetFile {
    #[serde(default)]
    vessels: Vec<VesselRecord>,
}

/// Vessel documents loaded from a fleet TOML file
#[derive(Debug)]
pub struct FleetLoader {
    vessels: Vec<VesselRecord>,
}

impl FleetLoader {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read fleet file {}: {}",
                path.display(),
                e
            )))
        })?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let fleet: FleetFile = toml::from_str(toml_content)?;
        Ok(Self {
            vessels: fleet.vessels,
        })
    }

    pub fn vessels(&self) -> &[VesselRecord] {
        &self.vessels
    }

    pub fn into_vessels(self) -> Vec<VesselRecord> {
        self.vessels
    }

    pub fn count(&self) -> usize {
        self.vessels.len()
    }
}
