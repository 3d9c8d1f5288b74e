//! Use cases

mod trip_service;

pub use trip_service::TripService;
