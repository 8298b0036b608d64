use clap::{Parser, Subcommand, ValueEnum};
use desa_core::config::parse_fuzzy_threshold;
use std::path::PathBuf;

/// Desa - village resolution and indicator scoring
#[derive(Parser, Debug)]
#[command(name = "desa")]
#[command(
    about = "Resolve coordinates to villages and score village statistics",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Village boundary dataset (GeoJSON)
    #[arg(long, global = true, value_name = "FILE")]
    pub boundaries: Option<PathBuf>,

    /// Village record export (JSON array)
    #[arg(long, global = true, value_name = "FILE")]
    pub villages: Option<PathBuf>,

    /// Fuzzy boundary match threshold in degrees
    #[arg(long, global = true, value_name = "DEGREES", value_parser = parse_threshold_arg)]
    pub fuzzy_threshold: Option<f64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a coordinate to a village
    Resolve(ResolveArgs),

    /// Compute indicators for one village or all of them
    Score(ScoreArgs),

    /// Inspect loaded datasets and configuration
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, alias = "long", allow_hyphen_values = true)]
    pub lon: f64,
}

#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// Village id
    #[arg(required_unless_present = "all", conflicts_with = "all")]
    pub village_id: Option<String>,

    /// Score every village
    #[arg(long)]
    pub all: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// What to inspect
    #[arg(value_enum)]
    pub target: InspectTarget,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum InspectTarget {
    /// Boundary dataset load report
    Boundaries,
    /// Village records
    Villages,
    /// Effective configuration and where each value came from
    Config,
}

fn parse_threshold_arg(s: &str) -> Result<f64, String> {
    parse_fuzzy_threshold(s).map_err(|e| e.to_string())
}
