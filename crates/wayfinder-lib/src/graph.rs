use std::collections::HashMap;

use tracing::{debug, warn};

use crate::document::{is_usable_weight, EdgeRecord, GraphDocument, Node};
use crate::geometry::distance;

/// Position of a node inside a [`Graph`]'s node table.
pub type NodeIndex = usize;

/// Directed half of an undirected edge in the adjacency table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: NodeIndex,
    pub cost: f64,
}

/// Adjacency structure used by the pathfinding algorithms.
///
/// Nodes keep the order in which their ids first appeared in the source list;
/// snapping relies on that order to break distance ties.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeIndex>,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// A graph with no nodes. Used for absent or unloadable documents.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a graph from a parsed document, ignoring its POIs.
    pub fn from_document(document: &GraphDocument) -> Self {
        build_graph(document.nodes.iter().cloned(), &document.edges)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// All nodes in first-appearance order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index_of(id).map(|index| &self.nodes[index])
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Node stored at `index`. Panics when `index` did not come from this graph.
    pub fn node_at(&self, index: NodeIndex) -> &Node {
        &self.nodes[index]
    }

    /// Return the neighbours for a given node id.
    pub fn neighbours(&self, id: &str) -> &[Edge] {
        self.index_of(id)
            .map(|index| self.edges_at(index))
            .unwrap_or(&[])
    }

    pub(crate) fn edges_at(&self, index: NodeIndex) -> &[Edge] {
        self.adjacency
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn insert_node(&mut self, node: Node) {
        if let Some(&existing) = self.index.get(&node.id) {
            warn!(id = %node.id, "duplicate node id, keeping the last definition");
            self.nodes[existing] = node;
            return;
        }
        let index = self.nodes.len();
        self.index.insert(node.id.clone(), index);
        self.nodes.push(node);
        self.adjacency.push(Vec::new());
    }

    fn insert_edge(&mut self, edge: &EdgeRecord) {
        let (Some(a), Some(b)) = (self.index_of(&edge.a), self.index_of(&edge.b)) else {
            debug!(a = %edge.a, b = %edge.b, "dropping edge with unknown endpoint");
            return;
        };
        if a == b {
            debug!(id = %edge.a, "dropping self-loop edge");
            return;
        }

        let cost = match edge.weight {
            Some(weight) if is_usable_weight(weight) => weight,
            Some(weight) => {
                warn!(a = %edge.a, b = %edge.b, weight, "dropping edge with unusable weight");
                return;
            }
            None => distance(&self.nodes[a], &self.nodes[b]),
        };

        self.adjacency[a].push(Edge { target: b, cost });
        self.adjacency[b].push(Edge { target: a, cost });
    }
}

/// Build an undirected, weighted graph from a node list and an edge list.
///
/// Duplicate node ids keep the last definition. Edges that reference unknown
/// ids, loop back to their own node, or carry a negative or non-finite weight
/// are dropped rather than failing the build. Edges without a weight cost the
/// distance between their endpoints.
pub fn build_graph<I>(nodes: I, edges: &[EdgeRecord]) -> Graph
where
    I: IntoIterator<Item = Node>,
{
    let mut graph = Graph::default();
    for node in nodes {
        graph.insert_node(node);
    }
    for edge in edges {
        graph.insert_edge(edge);
    }
    debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        "built graph"
    );
    graph
}
