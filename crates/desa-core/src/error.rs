//! Error types for Desa

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DesaError {
    // Boundary dataset errors
    #[error("Boundary dataset not found at {path}")]
    BoundaryDatasetNotFound { path: PathBuf },

    #[error("Boundary dataset is unreadable: {reason}")]
    BoundaryDatasetInvalid { reason: String },

    // Village record errors
    #[error("Village not found: {id}")]
    VillageNotFound { id: String },

    #[error("Village records are unreadable: {reason}")]
    VillageRecordsInvalid { reason: String },

    // Resolution errors
    #[error("Invalid coordinate ({lat}, {lon}): {reason}")]
    InvalidCoordinate { lat: f64, lon: f64, reason: String },

    #[error("No village could be resolved for ({lat}, {lon})")]
    UnresolvedCoordinate { lat: f64, lon: f64 },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DesaError>;
