use serde::Serialize;
use tracing::debug;

use crate::document::Node;
use crate::error::{Error, Result};
use crate::geometry::path_length;
use crate::store::GraphStore;

/// Number of "did you mean" suggestions attached to unknown locations.
const MAX_SUGGESTIONS: usize = 3;

/// High-level route planning request.
///
/// Each side may name a POI id, a POI label, or a raw feature-node id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
}

impl RouteRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    /// Feature-node id the route starts at.
    pub origin: String,
    /// Feature-node id the route ends at.
    pub destination: String,
    /// Ordered waypoints, origin first and destination last.
    pub nodes: Vec<Node>,
    /// Length of the polyline through `nodes`.
    pub distance: f64,
    /// Whether the connector mesh contributed waypoints.
    pub snapped: bool,
}

impl RoutePlan {
    /// Number of segments in the route.
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

fn resolve_location<'a>(store: &'a GraphStore, query: &str) -> Result<&'a str> {
    store.resolve(query).ok_or_else(|| Error::UnknownPoi {
        query: query.to_string(),
        suggestions: store.fuzzy_poi_matches(query, MAX_SUGGESTIONS),
    })
}

/// Resolve both ends of `request` and route between them.
pub fn plan_route(store: &GraphStore, request: &RouteRequest) -> Result<RoutePlan> {
    let origin = resolve_location(store, &request.origin)?;
    let destination = resolve_location(store, &request.destination)?;
    debug!(origin, destination, "planning route");

    let nodes = store
        .router()
        .find_path(origin, destination)
        .ok_or_else(|| Error::RouteNotFound {
            start: request.origin.clone(),
            goal: request.destination.clone(),
        })?;

    Ok(RoutePlan {
        origin: origin.to_string(),
        destination: destination.to_string(),
        distance: path_length(&nodes),
        snapped: store.router().has_connectors(),
        nodes,
    })
}
