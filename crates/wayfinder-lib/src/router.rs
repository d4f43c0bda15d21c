//! Dual-graph routing between feature nodes.
//!
//! The feature graph holds the labelled places people ask for. The connector
//! graph is a denser mesh of unlabelled waypoints that follows corridors and
//! walkways. A route snaps both ends onto the mesh, searches the mesh, and
//! stitches the feature nodes back on:
//!
//! ```text
//! [origin, entry, ..connector path.., exit, destination]
//! ```
//!
//! Without a connector mesh the route degrades to the straight segment
//! `[origin, destination]`.

use std::sync::Arc;

use tracing::debug;

use crate::document::Node;
use crate::graph::Graph;
use crate::path::find_path_indices;
use crate::spatial::ConnectorIndex;

#[derive(Debug)]
struct ConnectorMesh {
    graph: Arc<Graph>,
    index: ConnectorIndex,
}

/// Router over a feature graph and an optional connector graph.
///
/// Both graphs are read-only once the router exists, so a single router can
/// serve concurrent requests.
#[derive(Debug)]
pub struct Router {
    features: Arc<Graph>,
    connectors: Option<ConnectorMesh>,
}

impl Router {
    /// Router over both graphs. An empty connector graph counts as absent.
    pub fn new(features: impl Into<Arc<Graph>>, connectors: impl Into<Arc<Graph>>) -> Self {
        let connectors: Arc<Graph> = connectors.into();
        let connectors = if connectors.is_empty() {
            None
        } else {
            let index = ConnectorIndex::build(&connectors);
            Some(ConnectorMesh {
                graph: connectors,
                index,
            })
        };
        Self {
            features: features.into(),
            connectors,
        }
    }

    /// Router for a map authored without a connector mesh.
    pub fn features_only(features: impl Into<Arc<Graph>>) -> Self {
        Self {
            features: features.into(),
            connectors: None,
        }
    }

    pub fn features(&self) -> &Graph {
        &self.features
    }

    /// The connector graph, if one with at least one node was supplied.
    pub fn connectors(&self) -> Option<&Graph> {
        self.connectors.as_ref().map(|mesh| mesh.graph.as_ref())
    }

    pub fn has_connectors(&self) -> bool {
        self.connectors.is_some()
    }

    /// Connector node a feature node enters or leaves the mesh through.
    pub fn snap(&self, feature_id: &str) -> Option<&Node> {
        let mesh = self.connectors.as_ref()?;
        let node = self.features.node(feature_id)?;
        mesh.index
            .nearest_to(node)
            .map(|index| mesh.graph.node_at(index))
    }

    /// Walkable sequence of nodes from `origin` to `destination`.
    ///
    /// Returns `None` when either id is not in the feature graph, or when the
    /// two snapped connector nodes are not connected. The result always starts
    /// with the origin node and ends with the destination node.
    pub fn find_path(&self, origin: &str, destination: &str) -> Option<Vec<Node>> {
        let Some(origin_node) = self.features.node(origin) else {
            debug!(id = origin, "origin is not a feature node");
            return None;
        };
        let Some(destination_node) = self.features.node(destination) else {
            debug!(id = destination, "destination is not a feature node");
            return None;
        };

        let Some(mesh) = &self.connectors else {
            return Some(vec![origin_node.clone(), destination_node.clone()]);
        };

        let entry = mesh.index.nearest_to(origin_node)?;
        let exit = mesh.index.nearest_to(destination_node)?;
        debug!(
            origin,
            destination,
            entry = %mesh.graph.node_at(entry).id,
            exit = %mesh.graph.node_at(exit).id,
            "snapped route endpoints onto connector mesh"
        );

        let hops = if entry == exit {
            vec![entry]
        } else {
            let Some(hops) = find_path_indices(&mesh.graph, entry, exit) else {
                debug!(origin, destination, "connector mesh does not join the endpoints");
                return None;
            };
            hops
        };

        let mut route = Vec::with_capacity(hops.len() + 2);
        route.push(origin_node.clone());
        route.extend(hops.into_iter().map(|index| mesh.graph.node_at(index).clone()));
        route.push(destination_node.clone());
        Some(route)
    }
}
