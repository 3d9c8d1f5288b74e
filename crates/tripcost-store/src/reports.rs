//! Trip report store

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::info;
use tripcost_domain::model::{AttachmentRef, TripReport};
use tripcost_types::{Error, Result, StoreError};

use crate::{load_map, write_map};

/// Compute the hex SHA-256 of a file
pub fn hash_file(path: &Path) -> Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    std::io::copy(&mut reader, &mut hasher)?;
    let hash = hasher.finalize();
    Ok(format!("{:x}", hash))
}

/// Persistent store for saved trip reports
pub struct ReportStore {
    store_path: PathBuf,
    reports: HashMap<String, TripReport>,
}

impl ReportStore {
    /// Create or load a report store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("reports.json");
        let reports = load_map(&store_path)?;
        Ok(Self { store_path, reports })
    }

    fn save(&self) -> Result<()> {
        write_map(&self.store_path, &self.reports)
    }

    /// Add or replace a report
    pub fn add_report(&mut self, report: TripReport) -> Result<String> {
        let id = report.id.clone();
        info!(id = %id, vessel = %report.vessel_id, "trip report saved");
        self.reports.insert(id.clone(), report);
        self.save()?;
        Ok(id)
    }

    pub fn remove_report(&mut self, id: &str) -> Result<bool> {
        let removed = self.reports.remove(id).is_some();
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    pub fn get_report(&self, id: &str) -> Option<&TripReport> {
        self.reports.get(id)
    }

    /// All reports, newest first
    pub fn all_reports(&self) -> Vec<&TripReport> {
        let mut reports: Vec<_> = self.reports.values().collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reports
    }

    /// Reports for one vessel, newest first
    pub fn reports_for_vessel(&self, vessel_id: &str) -> Vec<&TripReport> {
        self.all_reports()
            .into_iter()
            .filter(|r| r.vessel_id == vessel_id)
            .collect()
    }

    /// Record a file against a report. The file itself is not copied.
    pub fn attach_file(&mut self, report_id: &str, path: &Path) -> Result<AttachmentRef> {
        if !self.reports.contains_key(report_id) {
            return Err(Error::ReportNotFound(report_id.to_string()));
        }
        let metadata = fs::metadata(path)
            .map_err(|e| StoreError::Attachment(format!("{}: {}", path.display(), e)))?;
        if !metadata.is_file() {
            return Err(StoreError::Attachment(format!("{} is not a file", path.display())).into());
        }
        let attachment = AttachmentRef {
            file_name: path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string(),
            path: path.display().to_string(),
            sha256: hash_file(path)?,
            size_bytes: metadata.len(),
            attached_at: Utc::now(),
        };

        if let Some(report) = self.reports.get_mut(report_id) {
            report.attachments.push(attachment.clone());
        }
        self.save()?;
        Ok(attachment)
    }
}
