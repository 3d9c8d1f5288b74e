//! Domain services

pub mod capacity;
pub mod trip_calculator;
pub mod trip_summary;
pub mod vessel_selection;

pub use capacity::extract_capacity_mt;
pub use trip_calculator::{calculate, calculate_from_forms};
pub use trip_summary::render_trip_summary;
pub use vessel_selection::{eligible_vessels, find_vessel};
