//! Desa Core - Domain models, spatial resolution, and indicator scoring
//!
//! This crate contains the core domain logic for the village intelligence system:
//! the immutable boundary store, the coordinate-to-village resolver, and the
//! rule-based scoring engine.

pub mod config;
pub mod error;
pub mod formats;
pub mod geo;
pub mod models;
pub mod scoring;

pub use error::{DesaError, Result};
