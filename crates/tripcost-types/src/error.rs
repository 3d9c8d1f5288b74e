//! Error types for tripcost

use thiserror::Error;

use crate::Phase;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Store-related errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Duplicate id: {0}")]
    Duplicate(String),

    #[error("Attachment not readable: {0}")]
    Attachment(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Calculation failed: select a vessel first")]
    MissingVessel,

    #[error("Calculation failed: {phase} field `{field}` is missing or not a number")]
    InvalidField { field: &'static str, phase: Phase },

    #[error("Vessel not found: {0}")]
    VesselNotFound(String),

    #[error("Vessel {id} is not eligible for trip calculation (missing: {})", missing.join(", "))]
    VesselNotEligible { id: String, missing: Vec<String> },

    #[error("Report not found: {0}")]
    ReportNotFound(String),

    #[error("Import error: {0}")]
    Import(String),
}

pub type Result<T> = std::result::Result<T, Error>;
