//! Inspect command implementation

use anyhow::Result;
use desa_core::config::LayeredConfig;
use desa_store::ports::VillageStore;
use std::collections::BTreeMap;
use tabled::Tabled;

use crate::cli::{InspectArgs, InspectTarget};
use crate::config_loader::{load_geometry_store, load_village_store};
use crate::output::OutputWriter;
use crate::output_types::{
    ConfigEntry, InspectBoundariesOutput, InspectConfigOutput, InspectVillagesOutput,
    SkippedFeatureInfo, VillageSummary,
};

pub async fn execute(
    args: InspectArgs,
    config: &LayeredConfig,
    output: &OutputWriter,
) -> Result<()> {
    match args.target {
        InspectTarget::Boundaries => inspect_boundaries(config, output),
        InspectTarget::Villages => inspect_villages(config, output).await,
        InspectTarget::Config => inspect_config(config, output),
    }
}

/// Boundary dataset load report
fn inspect_boundaries(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let (store, report) = load_geometry_store(config)?;
    let path = config.boundaries_path.value.display().to_string();
    let loaded_at = store.loaded_at().to_rfc3339();

    if output.is_json() {
        let skipped = report
            .skipped
            .into_iter()
            .map(|s| SkippedFeatureInfo {
                index: s.index,
                id: s.id,
                reason: s.reason,
            })
            .collect();
        return output.result(InspectBoundariesOutput {
            path,
            loaded: store.len(),
            loaded_at,
            skipped,
        });
    }

    output.section("Village Boundaries");
    output.kv("Path", &path);
    output.kv("Loaded", store.len());
    output.kv("Loaded At", &loaded_at);
    output.kv("Skipped", report.skipped.len());

    if !report.skipped.is_empty() {
        output.section("Skipped Features");

        #[derive(Tabled)]
        struct SkippedRow {
            #[tabled(rename = "Index")]
            index: usize,
            #[tabled(rename = "ID")]
            id: String,
            #[tabled(rename = "Reason")]
            reason: String,
        }

        let rows: Vec<SkippedRow> = report
            .skipped
            .into_iter()
            .map(|s| SkippedRow {
                index: s.index,
                id: s.id.unwrap_or_else(|| "-".to_string()),
                reason: s.reason,
            })
            .collect();

        output.table(rows);
    }

    Ok(())
}

/// Village record summary
async fn inspect_villages(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let store = load_village_store(config)?;
    let villages = store.list_villages().await?;
    let path = config.villages_path.value.display().to_string();

    let summaries: Vec<VillageSummary> = villages
        .into_iter()
        .map(|v| VillageSummary {
            id: v.id,
            name: v.name,
            district: v.district,
            latitude: v.latitude,
            longitude: v.longitude,
        })
        .collect();

    if output.is_json() {
        return output.result(InspectVillagesOutput {
            path,
            count: summaries.len(),
            villages: summaries,
        });
    }

    output.section("Village Records");
    output.kv("Path", &path);
    output.kv("Count", summaries.len());

    #[derive(Tabled)]
    struct VillageRow {
        #[tabled(rename = "ID")]
        id: String,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "District")]
        district: String,
        #[tabled(rename = "Centroid")]
        centroid: String,
    }

    let rows: Vec<VillageRow> = summaries
        .into_iter()
        .map(|v| VillageRow {
            centroid: format_centroid(v.latitude, v.longitude),
            id: v.id,
            name: v.name,
            district: v.district,
        })
        .collect();

    output.table(rows);
    Ok(())
}

/// Effective configuration with the source of each value
fn inspect_config(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let values: BTreeMap<String, ConfigEntry> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| {
            let entry = ConfigEntry {
                value,
                source: format!("{:?}", source),
            };
            (key, entry)
        })
        .collect();

    if output.is_json() {
        return output.result(InspectConfigOutput { values });
    }

    output.section("Configuration Values");

    #[derive(Tabled)]
    struct ConfigRow {
        #[tabled(rename = "Key")]
        key: String,
        #[tabled(rename = "Value")]
        value: String,
        #[tabled(rename = "Source")]
        source: String,
    }

    let rows: Vec<ConfigRow> = values
        .into_iter()
        .map(|(key, entry)| ConfigRow {
            key,
            value: entry.value,
            source: entry.source,
        })
        .collect();

    output.table(rows);
    Ok(())
}

/// Centroid cell, or "-" when the record has no usable coordinates
fn format_centroid(lat: Option<f64>, lon: Option<f64>) -> String {
    match (lat, lon) {
        (Some(lat), Some(lon)) => format!("{:.5}, {:.5}", lat, lon),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_centroid() {
        assert_eq!(format_centroid(Some(-7.45), Some(112.05)), "-7.45000, 112.05000");
        assert_eq!(format_centroid(Some(-7.45), None), "-");
        assert_eq!(format_centroid(None, None), "-");
    }
}
