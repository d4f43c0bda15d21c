//! Nearest-node lookups for snapping feature nodes onto the connector mesh.
//!
//! A linear scan over the connector nodes is the reference behaviour (see
//! [`crate::geometry::nearest_node`]). `ConnectorIndex` answers the same query
//! through an R-tree and resolves equal-distance candidates the same way the
//! scan does: the node that appears first in the connector document wins.

use std::fmt;

use rstar::primitives::GeomWithData;
use rstar::RTree;
use tracing::debug;

use crate::document::Node;
use crate::geometry::squared_distance;
use crate::graph::{Graph, NodeIndex};

type IndexedPoint = GeomWithData<[f64; 3], NodeIndex>;

/// R-tree over the positions of a connector graph's nodes.
pub struct ConnectorIndex {
    tree: RTree<IndexedPoint>,
}

impl fmt::Debug for ConnectorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectorIndex")
            .field("node_count", &self.tree.size())
            .finish()
    }
}

impl ConnectorIndex {
    /// Index every node of `graph` by position.
    pub fn build(graph: &Graph) -> Self {
        let points: Vec<IndexedPoint> = graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(index, node)| GeomWithData::new(node.position(), index))
            .collect();
        let tree = RTree::bulk_load(points);
        debug!(node_count = tree.size(), "built connector index");
        Self { tree }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Graph index of the connector node nearest to `point`.
    pub fn nearest(&self, point: [f64; 3]) -> Option<NodeIndex> {
        let mut candidates = self.tree.nearest_neighbor_iter(&point);
        let first = candidates.next()?;
        let best = squared_distance(first.geom(), &point);
        let mut winner = first.data;

        // Candidates arrive in distance order; scan the whole tie group.
        for candidate in candidates {
            if squared_distance(candidate.geom(), &point) > best {
                break;
            }
            winner = winner.min(candidate.data);
        }
        Some(winner)
    }

    /// Graph index of the connector node nearest to `node`.
    pub fn nearest_to(&self, node: &Node) -> Option<NodeIndex> {
        self.nearest(node.position())
    }
}
