//! Integration tests for layered configuration
//!
//! Precedence: CLI arguments > Environment variables > Config file > Defaults

use desa_core::config::{parse_fuzzy_threshold, CliConfigOverrides, ConfigSource, LayeredConfig};
use desa_core::geo::FallbackVillage;
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const ENV_KEYS: &[&str] = &[
    "DESA_BOUNDARIES",
    "DESA_VILLAGES",
    "DESA_FUZZY_THRESHOLD_DEG",
    "DESA_ID_PROPERTY",
    "DESA_NAME_PROPERTY",
    "DESA_FALLBACK_VILLAGE_ID",
    "DESA_FALLBACK_VILLAGE_NAME",
];

fn clear_env() {
    for key in ENV_KEYS {
        env::remove_var(key);
    }
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_partial_file_configuration() {
    let file = config_file(
        r#"
villages_path = "/srv/desa/villages.json"
# everything else stays at the defaults
"#,
    );

    let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

    assert_eq!(config.villages_path.value, PathBuf::from("/srv/desa/villages.json"));
    assert_eq!(config.villages_path.source, ConfigSource::File);
    assert_eq!(config.boundaries_path.source, ConfigSource::Default);
    assert_eq!(config.fuzzy_threshold_deg.source, ConfigSource::Default);
}

#[test]
fn test_invalid_toml_is_rejected() {
    let file = config_file("fuzzy_threshold_deg = [");
    assert!(LayeredConfig::with_defaults().load_from_file(file.path()).is_err());
}

#[test]
fn test_missing_file_is_rejected() {
    assert!(LayeredConfig::with_defaults().load_from_file("/nonexistent/desa.toml").is_err());
}

#[test]
#[serial]
fn test_env_overrides_file() {
    clear_env();
    let file = config_file(
        r#"
boundaries_path = "file.geojson"
fuzzy_threshold_deg = 0.01
"#,
    );

    env::set_var("DESA_BOUNDARIES", "env.geojson");
    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();
    clear_env();

    assert_eq!(config.boundaries_path.value, PathBuf::from("env.geojson"));
    assert_eq!(config.boundaries_path.source, ConfigSource::Environment);
    assert_eq!(config.fuzzy_threshold_deg.value, 0.01);
    assert_eq!(config.fuzzy_threshold_deg.source, ConfigSource::File);
}

#[test]
#[serial]
fn test_invalid_env_threshold_is_ignored() {
    clear_env();
    env::set_var("DESA_FUZZY_THRESHOLD_DEG", "banyak");
    let config = LayeredConfig::with_defaults().load_from_env();
    clear_env();

    assert_eq!(config.fuzzy_threshold_deg.value, 0.005);
    assert_eq!(config.fuzzy_threshold_deg.source, ConfigSource::Default);
}

#[test]
#[serial]
fn test_env_fallback_village_requires_both_parts() {
    clear_env();
    env::set_var("DESA_FALLBACK_VILLAGE_ID", "3524012015");
    let config = LayeredConfig::with_defaults().load_from_env();
    assert!(config.fallback_village.value.is_none());

    env::set_var("DESA_FALLBACK_VILLAGE_NAME", "Kemlagi Lor (Fallback)");
    let config = LayeredConfig::with_defaults().load_from_env();
    clear_env();

    assert_eq!(
        config.fallback_village.value,
        Some(FallbackVillage {
            id: "3524012015".to_string(),
            name: "Kemlagi Lor (Fallback)".to_string(),
        })
    );
    assert_eq!(config.fallback_village.source, ConfigSource::Environment);
}

#[test]
#[serial]
fn test_cli_overrides_everything() {
    clear_env();
    let file = config_file(r#"fuzzy_threshold_deg = 0.01"#);
    env::set_var("DESA_FUZZY_THRESHOLD_DEG", "0.02");

    let mut config = LayeredConfig::load(Some(file.path())).unwrap();
    clear_env();
    assert_eq!(config.fuzzy_threshold_deg.value, 0.02);

    config
        .update_from_cli(CliConfigOverrides {
            fuzzy_threshold_deg: Some(0.001),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(config.fuzzy_threshold_deg.value, 0.001);
    assert_eq!(config.fuzzy_threshold_deg.source, ConfigSource::Cli);
    assert_eq!(config.resolver_options().unwrap().fuzzy_threshold_deg, 0.001);
}

#[test]
#[serial]
fn test_custom_property_keys_flow_into_boundary_properties() {
    clear_env();
    env::set_var("DESA_ID_PROPERTY", "kode_desa");
    env::set_var("DESA_NAME_PROPERTY", "nama_desa");
    let config = LayeredConfig::with_defaults().load_from_env();
    clear_env();

    let props = config.boundary_properties();
    assert_eq!(props.id_key, "kode_desa");
    assert_eq!(props.name_key, "nama_desa");
}

#[test]
fn test_parse_fuzzy_threshold_rejects_non_finite() {
    assert!(parse_fuzzy_threshold("NaN").is_err());
    assert!(parse_fuzzy_threshold("inf").is_err());
}
