//! Route command handler for planning a walk between two campus locations.

use anyhow::{bail, Context, Result};
use tracing::info;

use wayfinder_cli::config::SourceArgs;
use wayfinder_cli::output::{render_route, OutputFormat};
use wayfinder_lib::{plan_route, GraphStore, RouteRequest, RouteSummary};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Origin POI id, label or feature node id.
    pub from: String,
    /// Destination POI id, label or feature node id.
    pub to: String,
}

pub fn handle_route(sources: &SourceArgs, args: &RouteCommandArgs, format: OutputFormat) -> Result<()> {
    let config = sources.store_config();
    let store = GraphStore::load(&config);
    if store.features().is_empty() {
        bail!("no feature nodes could be loaded from {}", config.features);
    }

    let plan = plan_route(&store, &RouteRequest::new(&args.from, &args.to))?;
    info!(
        origin = %plan.origin,
        destination = %plan.destination,
        hops = plan.hop_count(),
        "route planned"
    );

    let summary = RouteSummary::from_plan(&store, &plan)
        .context("failed to summarise the planned route")?;
    print!("{}", render_route(&summary, format)?);
    Ok(())
}
