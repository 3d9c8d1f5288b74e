//! Trip input file loader
//!
//! A trip input file carries the raw loading and discharging forms:
//!
//! ```toml
//! [loading]
//! loading_sailing_days = 2
//! bunker_price = "600"
//!
//! [discharging]
//! discharge_days = 2
//! ```
//!
//! Values may be numbers or strings; validation happens when the forms are
//! parsed, not here.

use std::fs;
use std::path::Path;

use tripcost_domain::model::TripForms;
use tripcost_types::Result;

/// Load trip forms from a `.toml` or `.json` file
pub fn load_trip_forms(path: &Path) -> Result<TripForms> {
    let content = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if is_json {
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(toml::from_str(&content)?)
    }
}
