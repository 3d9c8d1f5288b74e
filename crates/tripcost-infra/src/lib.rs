//! Infrastructure layer - file loaders and repository implementations

pub mod document_import;
pub mod fleet_toml;
pub mod persistence;
pub mod trip_input;
pub mod vessel_csv;

use std::path::Path;

use tracing::info;
use tripcost_domain::model::VesselRecord;
use tripcost_types::{Error, Result};

/// Load vessels from a file, choosing the loader by extension
/// (`.csv`, `.json`, or `.toml`)
pub fn load_vessels_from_path(path: &Path) -> Result<Vec<VesselRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    let vessels = match ext.as_str() {
        "csv" => vessel_csv::load_vessels(path)?,
        "json" => document_import::load_vessel_documents(path)?,
        "toml" => fleet_toml::FleetLoader::load_from_file(path)?.into_vessels(),
        other => {
            return Err(Error::Import(format!(
                "unsupported vessel file type {:?} ({})",
                other,
                path.display()
            )))
        }
    };
    info!(path = %path.display(), count = vessels.len(), "vessel documents loaded");
    Ok(vessels)
}
