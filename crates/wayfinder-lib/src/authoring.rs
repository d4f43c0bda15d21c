//! Offline helpers for preparing graph documents.
//!
//! These run while authoring map data, never on the routing path: one
//! generates connector edges from node proximity, the other reports which
//! connector node each POI will snap to.

use serde::Serialize;
use tracing::{info, warn};

use crate::document::{EdgeRecord, GraphDocument, Node};
use crate::error::{Error, Result};
use crate::geometry::distance;
use crate::graph::Graph;
use crate::spatial::ConnectorIndex;

/// Link every pair of nodes that are at most `threshold` apart.
///
/// Edges carry their distance as explicit weight and are emitted in document
/// order (`nodes[i]` before `nodes[j]` for `i < j`). Pairs sharing an id are
/// skipped.
pub fn synthesize_edges(nodes: &[Node], threshold: f64) -> Result<Vec<EdgeRecord>> {
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(Error::InvalidThreshold { value: threshold });
    }

    let mut edges = Vec::new();
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            if a.id == b.id {
                continue;
            }
            let length = distance(a, b);
            if length <= threshold {
                edges.push(EdgeRecord::weighted(a.id.clone(), b.id.clone(), length));
            }
        }
    }

    info!(
        nodes = nodes.len(),
        edges = edges.len(),
        threshold,
        "synthesized connector edges"
    );
    Ok(edges)
}

/// Where a POI enters the connector mesh.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoiAttachment {
    pub poi_id: String,
    pub node_id: String,
    pub connector_id: String,
    pub distance: f64,
}

/// Snap each POI of `features` onto the nearest node of `connectors`.
///
/// Uses the same rule as the router, so the report matches what routing will
/// do. POIs whose node is missing from the feature document are skipped.
pub fn attach_pois(features: &GraphDocument, connectors: &Graph) -> Vec<PoiAttachment> {
    let index = ConnectorIndex::build(connectors);
    if index.is_empty() {
        warn!("connector graph is empty, no POI can be attached");
        return Vec::new();
    }

    let lookup = features.node_lookup();
    features
        .pois
        .iter()
        .filter_map(|poi| {
            let Some(node) = lookup.get(poi.node_id.as_str()) else {
                warn!(poi = %poi.id, node = %poi.node_id, "poi references unknown node");
                return None;
            };
            let connector = connectors.node_at(index.nearest_to(node)?);
            Some(PoiAttachment {
                poi_id: poi.id.clone(),
                node_id: node.id.clone(),
                connector_id: connector.id.clone(),
                distance: distance(node, connector),
            })
        })
        .collect()
}
