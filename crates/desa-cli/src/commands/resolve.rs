//! Resolve command implementation

use anyhow::Result;
use desa_core::config::LayeredConfig;
use desa_core::models::{Coordinate, ResolutionMethod};
use desa_store::ports::VillageStore;

use crate::cli::ResolveArgs;
use crate::config_loader::{load_resolver, load_village_store_or_empty};
use crate::output::OutputWriter;

pub async fn execute(
    args: ResolveArgs,
    config: &LayeredConfig,
    output: &OutputWriter,
) -> Result<()> {
    let coord = Coordinate::new(args.lat, args.lon)?;
    let resolver = load_resolver(config)?;

    let result = match resolver.match_boundary(coord) {
        Some(result) => result,
        None => {
            let villages = load_village_store_or_empty(config)?;
            let centroids = villages.centroids().await?;
            resolver.resolve_by_centroid(coord, &centroids)?
        }
    };

    if result.method == ResolutionMethod::ErrorFallback {
        output.warning("No boundary or centroid matched; showing the configured fallback village");
    }

    if output.is_json() {
        output.result(&result)?;
    } else {
        output.section("Resolved Village");
        output.kv("ID", &result.id);
        output.kv("Name", &result.name);
        output.kv("Method", result.method);
        output.kv("Distance", format!("{:.3} km", result.distance_km));
    }

    Ok(())
}
