//! Domain layer for vessel trip cost calculation
//!
//! The calculation engine in [`service::trip_calculator`] is pure: it takes a
//! vessel profile and two leg inputs and returns a fresh result every call.

pub mod error;
pub mod model;
pub mod repository;
pub mod service;

pub use error::CalculationError;
