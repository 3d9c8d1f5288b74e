//! Repository trait definitions for data persistence

use std::path::Path;

use tripcost_types::Error;

use crate::model::{AttachmentRef, TripReport, VesselRecord};

/// Repository for vessel documents
pub trait VesselRepository {
    /// Insert a new vessel; an existing id is a `StoreError::Duplicate`
    fn add(&self, vessel: &VesselRecord) -> Result<(), Error>;

    /// Insert or replace a vessel
    fn save(&self, vessel: &VesselRecord) -> Result<(), Error>;

    /// Find a vessel by id
    fn find_by_id(&self, id: &str) -> Result<Option<VesselRecord>, Error>;

    /// Find all vessels
    fn find_all(&self) -> Result<Vec<VesselRecord>, Error>;

    /// Remove a vessel, returning whether it existed
    fn remove(&self, id: &str) -> Result<bool, Error>;
}

/// Repository for saved trip reports
pub trait TripReportRepository {
    /// Insert or replace a report
    fn save(&self, report: &TripReport) -> Result<(), Error>;

    /// Find a report by id
    fn find_by_id(&self, id: &str) -> Result<Option<TripReport>, Error>;

    /// Find all reports, newest first
    fn find_all(&self) -> Result<Vec<TripReport>, Error>;

    /// Find reports for one vessel, newest first
    fn find_by_vessel(&self, vessel_id: &str) -> Result<Vec<TripReport>, Error>;

    /// Remove a report, returning whether it existed
    fn remove(&self, id: &str) -> Result<bool, Error>;

    /// Record a file against an existing report
    fn attach_file(&self, report_id: &str, path: &Path) -> Result<AttachmentRef, Error>;
}
