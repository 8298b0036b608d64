//! Score command implementation

use anyhow::{Context, Result};
use desa_core::config::LayeredConfig;
use desa_core::models::{Village, VillageAnalytics};
use desa_core::scoring;
use desa_core::DesaError;
use desa_store::ports::VillageStore;
use tabled::Tabled;

use crate::cli::ScoreArgs;
use crate::config_loader::load_village_store;
use crate::output::OutputWriter;
use crate::output_types::ScoreOutput;

pub async fn execute(args: ScoreArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let store = load_village_store(config)?;

    match args.village_id {
        Some(id) if !args.all => {
            let village = store
                .get_village(&id)
                .await?
                .ok_or(DesaError::VillageNotFound { id })
                .context("Cannot score village")?;
            score_one(&village, output)
        }
        _ => {
            let villages = store.list_villages().await?;
            score_all(&villages, output)
        }
    }
}

fn score_one(village: &Village, output: &OutputWriter) -> Result<()> {
    let analytics = scoring::analyze(&village.stats);

    if output.is_json() {
        return output.result(ScoreOutput::new(village, analytics));
    }

    let VillageAnalytics {
        health_radar,
        education_funnel,
        independence_index,
    } = analytics;

    output.section(format!("{} ({})", village.name, village.id));
    output.kv("District", &village.district);

    output.section("Health Radar");
    output.kv("Supply", health_radar.supply);
    output.kv("Demand", health_radar.demand);
    output.kv("Status", health_radar.status);

    output.section("Education Funnel");
    output.kv("Ratio", format!("{:.2}", education_funnel.ratio));
    output.kv("Status", education_funnel.status);

    output.section("Independence Index");
    output.kv("Score", format!("{:.2}", independence_index.score));
    output.kv("Grade", independence_index.grade);
    output.kv("Digital", format!("{:.2}", independence_index.details.digital));
    output.kv("Living", format!("{:.2}", independence_index.details.living));
    output.kv("Economy", format!("{:.2}", independence_index.details.economy));

    Ok(())
}

#[derive(Tabled)]
struct ScoreRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Health")]
    health: String,
    #[tabled(rename = "Education")]
    education: String,
    #[tabled(rename = "Index")]
    index: String,
}

impl ScoreRow {
    fn new(village: &Village, analytics: &VillageAnalytics) -> Self {
        let health = &analytics.health_radar;
        let education = &analytics.education_funnel;
        let index = &analytics.independence_index;
        Self {
            id: village.id.clone(),
            name: village.name.clone(),
            health: format!("{} ({}/{})", health.status, health.supply, health.demand),
            education: format!("{} ({:.2})", education.status, education.ratio),
            index: format!("{} ({:.2})", index.grade, index.score),
        }
    }
}

fn score_all(villages: &[Village], output: &OutputWriter) -> Result<()> {
    let scored: Vec<(&Village, VillageAnalytics)> = villages
        .iter()
        .map(|v| (v, scoring::analyze(&v.stats)))
        .collect();

    if output.is_json() {
        let data: Vec<ScoreOutput> = scored
            .into_iter()
            .map(|(v, analytics)| ScoreOutput::new(v, analytics))
            .collect();
        return output.result(data);
    }

    if scored.is_empty() {
        output.info("No village records loaded");
        return Ok(());
    }

    output.section(format!("Village Indicators ({})", scored.len()));
    output.table(
        scored
            .iter()
            .map(|(v, analytics)| ScoreRow::new(v, analytics))
            .collect(),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_row_formatting() {
        let village: Village = serde_json::from_value(serde_json::json!({
            "id": "3524012015",
            "name": "Kemlagi Lor",
            "health": { "doctors": 2, "midwives": 5, "primary_clinics": 1 },
            "education": { "sd_counts": 100, "smp_counts": 10, "sma_counts": 5 }
        }))
        .unwrap();

        let analytics = scoring::analyze(&village.stats);
        let row = ScoreRow::new(&village, &analytics);

        assert_eq!(row.health, "Safe (16/0)");
        assert_eq!(row.education, "Dropout Risk Zone (0.15)");
        assert_eq!(row.index, "Incomplete Data (0.00)");
    }
}
