//! Configuration and dataset loading for CLI commands

use anyhow::{Context, Result};
use desa_core::config::{CliConfigOverrides, LayeredConfig};
use desa_core::geo::{GeometryStore, LoadReport, SpatialResolver};
use desa_store::memory::MemoryVillageStore;
use std::sync::Arc;

use crate::cli::Cli;

/// Defaults, config file, environment, then the global CLI flags
pub fn load_config(cli: &Cli) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    config
        .update_from_cli(overrides(cli))
        .context("Invalid command-line option")?;
    Ok(config)
}

fn overrides(cli: &Cli) -> CliConfigOverrides {
    CliConfigOverrides {
        boundaries_path: cli.boundaries.clone(),
        villages_path: cli.villages.clone(),
        fuzzy_threshold_deg: cli.fuzzy_threshold,
    }
}

pub fn load_geometry_store(config: &LayeredConfig) -> Result<(GeometryStore, LoadReport)> {
    let path = &config.boundaries_path.value;
    GeometryStore::from_path(path, config.boundary_properties())
        .with_context(|| format!("Failed to load village boundaries from {}", path.display()))
}

pub fn load_resolver(config: &LayeredConfig) -> Result<SpatialResolver> {
    let options = config
        .resolver_options()
        .context("Invalid resolver configuration")?;
    let (store, _) = load_geometry_store(config)?;
    Ok(SpatialResolver::with_options(Arc::new(store), options))
}

/// Village records are optional for resolution; a missing file yields an empty store
pub fn load_village_store_or_empty(config: &LayeredConfig) -> Result<MemoryVillageStore> {
    let path = &config.villages_path.value;
    if !path.exists() {
        tracing::warn!(
            path = %path.display(),
            "Village records not found, centroid fallback disabled"
        );
        return Ok(MemoryVillageStore::new());
    }
    load_village_store(config)
}

pub fn load_village_store(config: &LayeredConfig) -> Result<MemoryVillageStore> {
    let path = &config.villages_path.value;
    MemoryVillageStore::load_from_path(path)
        .with_context(|| format!("Failed to load village records from {}", path.display()))
}
