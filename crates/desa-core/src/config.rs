use crate::error::{DesaError, Result};
use crate::formats::boundary::{BoundaryProperties, DEFAULT_ID_PROPERTY, DEFAULT_NAME_PROPERTY};
use crate::geo::resolver::{
    check_fuzzy_threshold, FallbackVillage, ResolverOptions, DEFAULT_FUZZY_THRESHOLD_DEG,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the village boundary dataset
pub const DEFAULT_BOUNDARIES_PATH: &str = "data/peta_desa.geojson";
/// Default location of the village record export
pub const DEFAULT_VILLAGES_PATH: &str = "data/villages.json";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for Desa
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub boundaries_path: ConfigValue<PathBuf>,
    pub villages_path: ConfigValue<PathBuf>,
    pub fuzzy_threshold_deg: ConfigValue<f64>,
    pub id_property: ConfigValue<String>,
    pub name_property: ConfigValue<String>,
    pub fallback_village: ConfigValue<Option<FallbackVillage>>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            boundaries_path: ConfigValue::new(
                PathBuf::from(DEFAULT_BOUNDARIES_PATH),
                ConfigSource::Default,
            ),
            villages_path: ConfigValue::new(
                PathBuf::from(DEFAULT_VILLAGES_PATH),
                ConfigSource::Default,
            ),
            fuzzy_threshold_deg: ConfigValue::new(
                DEFAULT_FUZZY_THRESHOLD_DEG,
                ConfigSource::Default,
            ),
            id_property: ConfigValue::new(
                DEFAULT_ID_PROPERTY.to_string(),
                ConfigSource::Default,
            ),
            name_property: ConfigValue::new(
                DEFAULT_NAME_PROPERTY.to_string(),
                ConfigSource::Default,
            ),
            fallback_village: ConfigValue::new(None, ConfigSource::Default),
        }
    }

    /// Defaults, then the optional config file, then the environment
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let config = Self::with_defaults();
        let config = match config_file {
            Some(path) => config.load_from_file(path)?,
            None => config,
        };
        Ok(config.load_from_env())
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| DesaError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| DesaError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(path) = file_config.boundaries_path {
            self.boundaries_path.update(path, ConfigSource::File);
        }

        if let Some(path) = file_config.villages_path {
            self.villages_path.update(path, ConfigSource::File);
        }

        if let Some(threshold) = file_config.fuzzy_threshold_deg {
            let threshold = check_fuzzy_threshold(threshold)?;
            self.fuzzy_threshold_deg.update(threshold, ConfigSource::File);
        }

        if let Some(key) = file_config.id_property {
            self.id_property.update(key, ConfigSource::File);
        }

        if let Some(key) = file_config.name_property {
            self.name_property.update(key, ConfigSource::File);
        }

        if let Some(fallback) = file_config.fallback_village {
            self.fallback_village.update(Some(fallback), ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // DESA_BOUNDARIES
        if let Ok(path) = env::var("DESA_BOUNDARIES") {
            self.boundaries_path
                .update(PathBuf::from(path), ConfigSource::Environment);
        }

        // DESA_VILLAGES
        if let Ok(path) = env::var("DESA_VILLAGES") {
            self.villages_path
                .update(PathBuf::from(path), ConfigSource::Environment);
        }

        // DESA_FUZZY_THRESHOLD_DEG
        if let Ok(threshold_str) = env::var("DESA_FUZZY_THRESHOLD_DEG") {
            match parse_fuzzy_threshold(&threshold_str) {
                Ok(threshold) => self
                    .fuzzy_threshold_deg
                    .update(threshold, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid DESA_FUZZY_THRESHOLD_DEG value '{}': expected a positive number of degrees",
                    threshold_str
                ),
            }
        }

        // DESA_ID_PROPERTY / DESA_NAME_PROPERTY
        if let Ok(key) = env::var("DESA_ID_PROPERTY") {
            self.id_property.update(key, ConfigSource::Environment);
        }
        if let Ok(key) = env::var("DESA_NAME_PROPERTY") {
            self.name_property.update(key, ConfigSource::Environment);
        }

        // DESA_FALLBACK_VILLAGE_ID requires DESA_FALLBACK_VILLAGE_NAME
        match (
            env::var("DESA_FALLBACK_VILLAGE_ID"),
            env::var("DESA_FALLBACK_VILLAGE_NAME"),
        ) {
            (Ok(id), Ok(name)) => {
                self.fallback_village.update(
                    Some(FallbackVillage { id, name }),
                    ConfigSource::Environment,
                );
            }
            (Ok(_), Err(_)) | (Err(_), Ok(_)) => tracing::warn!(
                "DESA_FALLBACK_VILLAGE_ID and DESA_FALLBACK_VILLAGE_NAME must be set together; ignoring"
            ),
            (Err(_), Err(_)) => {}
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) -> Result<()> {
        if let Some(path) = overrides.boundaries_path {
            self.boundaries_path.update(path, ConfigSource::Cli);
        }

        if let Some(path) = overrides.villages_path {
            self.villages_path.update(path, ConfigSource::Cli);
        }

        if let Some(threshold) = overrides.fuzzy_threshold_deg {
            let threshold = check_fuzzy_threshold(threshold)?;
            self.fuzzy_threshold_deg.update(threshold, ConfigSource::Cli);
        }

        Ok(())
    }

    pub fn boundary_properties(&self) -> BoundaryProperties {
        BoundaryProperties::new(
            self.id_property.value.clone(),
            self.name_property.value.clone(),
        )
    }

    pub fn resolver_options(&self) -> Result<ResolverOptions> {
        ResolverOptions::new(
            self.fuzzy_threshold_deg.value,
            self.fallback_village.value.clone(),
        )
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "boundaries_path".to_string(),
            (
                self.boundaries_path.value.display().to_string(),
                self.boundaries_path.source,
            ),
        );

        map.insert(
            "villages_path".to_string(),
            (
                self.villages_path.value.display().to_string(),
                self.villages_path.source,
            ),
        );

        map.insert(
            "fuzzy_threshold_deg".to_string(),
            (
                self.fuzzy_threshold_deg.value.to_string(),
                self.fuzzy_threshold_deg.source,
            ),
        );

        map.insert(
            "id_property".to_string(),
            (self.id_property.value.clone(), self.id_property.source),
        );

        map.insert(
            "name_property".to_string(),
            (self.name_property.value.clone(), self.name_property.source),
        );

        let fallback = match &self.fallback_village.value {
            Some(f) => format!("{} ({})", f.name, f.id),
            None => "none".to_string(),
        };
        map.insert(
            "fallback_village".to_string(),
            (fallback, self.fallback_village.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    boundaries_path: Option<PathBuf>,
    villages_path: Option<PathBuf>,
    fuzzy_threshold_deg: Option<f64>,
    id_property: Option<String>,
    name_property: Option<String>,
    fallback_village: Option<FallbackVillage>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub boundaries_path: Option<PathBuf>,
    pub villages_path: Option<PathBuf>,
    pub fuzzy_threshold_deg: Option<f64>,
}

/// Parse a fuzzy match threshold in degrees
pub fn parse_fuzzy_threshold(s: &str) -> Result<f64> {
    let value: f64 = s.trim().parse().map_err(|_| DesaError::ConfigInvalid {
        key: "fuzzy_threshold_deg".to_string(),
        reason: format!("Invalid threshold: {}. Expected a number of degrees", s),
    })?;
    check_fuzzy_threshold(value)
}
