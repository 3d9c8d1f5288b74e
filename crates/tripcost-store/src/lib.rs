//! Persistent stores for vessel documents and trip reports
//!
//! Each store is a single pretty-printed JSON file keyed by id, rewritten
//! after every mutation.

pub mod reports;
pub mod vessels;

pub use reports::{hash_file, ReportStore};
pub use vessels::VesselStore;

use chrono::Utc;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tripcost_types::Result;

/// Path a corrupt store file is moved to, e.g. `vessels.json.corrupt-20240101T120000`
fn quarantine_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".corrupt-{}", Utc::now().format("%Y%m%dT%H%M%S%.3f")));
    path.with_file_name(name)
}

/// Load a keyed JSON map, treating a missing file as empty.
/// A corrupt file is renamed aside before starting empty.
pub(crate) fn load_map<T: DeserializeOwned>(path: &Path) -> Result<HashMap<String, T>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    match serde_json::from_reader(reader) {
        Ok(map) => Ok(map),
        Err(e) => {
            let moved_to = quarantine_path(path);
            fs::rename(path, &moved_to)?;
            tracing::warn!(
                path = %path.display(),
                moved_to = %moved_to.display(),
                error = %e,
                "store file unreadable, moved aside and starting empty"
            );
            Ok(HashMap::new())
        }
    }
}

pub(crate) fn write_map<T: serde::Serialize>(path: &Path, map: &HashMap<String, T>) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, map)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn corrupt_copies(dir: &Path, file_name: &str) -> Vec<PathBuf> {
    let prefix = format!("{}.corrupt-", file_name);
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .map(|e| e.path())
                .filter(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .map(|n| n.starts_with(&prefix))
                        .unwrap_or(false)
                })
                .collect()
        })
        .unwrap_or_default()
}
