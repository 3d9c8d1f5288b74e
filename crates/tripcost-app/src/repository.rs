//! Repository adapters for persistence layer

use tripcost_infra::persistence::{FileTripReportRepository, FileVesselRepository};
use tripcost_types::Result;

use crate::config::Config;

/// Open file-based vessel repository
pub fn open_vessel_repo(config: &Config) -> Result<FileVesselRepository> {
    FileVesselRepository::open(config.store_dir()?)
}

/// Open file-based trip report repository
pub fn open_report_repo(config: &Config) -> Result<FileTripReportRepository> {
    FileTripReportRepository::open(config.store_dir()?)
}
