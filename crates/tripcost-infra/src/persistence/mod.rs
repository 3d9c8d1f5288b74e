//! Persistence implementations
//!
//! File-backed implementations of the domain repository traits.

mod file_trip_report_repo;
mod file_vessel_repo;

pub use file_trip_report_repo::FileTripReportRepository;
pub use file_vessel_repo::FileVesselRepository;
