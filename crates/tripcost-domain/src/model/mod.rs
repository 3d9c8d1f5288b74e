//! Domain model types

pub mod leg;
mod lenient;
pub mod report;
pub mod trip;
pub mod vessel;

pub use leg::{DischargingLegForm, DischargingLegInput, LoadingLegForm, LoadingLegInput, TripForms};
pub use report::{AttachmentRef, TripReport};
pub use trip::{
    CalculationWarning, CapacityMt, DischargingBreakdown, LoadingBreakdown,
    TripCalculationResult, TripTotals,
};
pub use vessel::{VesselProfile, VesselRecord, TRIP_REQUIRED_FIELDS};
