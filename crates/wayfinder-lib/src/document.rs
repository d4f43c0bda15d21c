//! JSON graph documents consumed by the pathfinding core.
//!
//! Both the feature graph and the connector graph are authored as
//! `{ "nodes": [...], "edges": [...] }` documents. Feature documents may also
//! carry a `pois` array that labels individual nodes. Edges are compact tuples
//! of `[a, b]` or `[a, b, weight]`.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A positioned point on the campus map.
///
/// Nodes are read-only facts about the map; the router never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Node {
    /// Create a planar node.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            z: None,
        }
    }

    /// Attach an elevation to the node.
    pub fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    /// Position as a 3D point; a missing `z` sits on the ground plane.
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z.unwrap_or(0.0)]
    }
}

/// Undirected edge between two node ids with an optional explicit weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEdge", into = "RawEdge")]
pub struct EdgeRecord {
    pub a: String,
    pub b: String,
    pub weight: Option<f64>,
}

impl EdgeRecord {
    /// Edge whose cost is the distance between its endpoints.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            weight: None,
        }
    }

    /// Edge with an explicit traversal cost.
    pub fn weighted(a: impl Into<String>, b: impl Into<String>, weight: f64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            weight: Some(weight),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

/// Wire form of an edge: `[a, b]`, `[a, b, weight]` or `[a, b, null]`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawEdge {
    Weighted(String, String, Option<f64>),
    Plain(String, String),
}

impl From<RawEdge> for EdgeRecord {
    fn from(raw: RawEdge) -> Self {
        match raw {
            RawEdge::Weighted(a, b, weight) => Self { a, b, weight },
            RawEdge::Plain(a, b) => Self { a, b, weight: None },
        }
    }
}

impl From<EdgeRecord> for RawEdge {
    fn from(edge: EdgeRecord) -> Self {
        match edge.weight {
            Some(weight) => RawEdge::Weighted(edge.a, edge.b, Some(weight)),
            None => RawEdge::Plain(edge.a, edge.b),
        }
    }
}

/// Costs must be finite and non-negative for the search to stay optimal.
pub(crate) fn is_usable_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}

/// Point of interest: a labelled alias over a feature-graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Poi {
    pub id: String,
    pub label: String,
    pub node_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// A complete graph document as authored on disk or served over HTTP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<Node>,
    pub edges: Vec<EdgeRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pois: Vec<Poi>,
}

impl GraphDocument {
    /// Parse a document from a JSON string. `source_name` only labels errors.
    pub fn from_json_str(source_name: &str, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| Error::DocumentParse {
            source_name: source_name.to_string(),
            source,
        })
    }

    /// Parse a document from any reader.
    pub fn from_reader<R: Read>(source_name: &str, reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|source| Error::DocumentParse {
            source_name: source_name.to_string(),
            source,
        })
    }

    /// Read and parse a document from the filesystem.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|source| Error::DocumentRead {
            source_name: source_name.clone(),
            source,
        })?;
        Self::from_reader(&source_name, BufReader::new(file))
    }

    /// Report authoring problems without changing the document.
    ///
    /// The graph builder tolerates every issue listed here; validation exists
    /// so authoring tools can surface them before a document ships.
    pub fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(node.id.as_str()) {
                issues.push(ValidationIssue::DuplicateNode {
                    id: node.id.clone(),
                });
            }
        }

        for (index, edge) in self.edges.iter().enumerate() {
            for endpoint in [&edge.a, &edge.b] {
                if !seen.contains(endpoint.as_str()) {
                    issues.push(ValidationIssue::UnknownEdgeEndpoint {
                        edge: index,
                        id: endpoint.clone(),
                    });
                }
            }
            if edge.is_self_loop() {
                issues.push(ValidationIssue::SelfLoop {
                    edge: index,
                    id: edge.a.clone(),
                });
            }
            if let Some(weight) = edge.weight {
                if !is_usable_weight(weight) {
                    issues.push(ValidationIssue::InvalidWeight {
                        edge: index,
                        weight,
                    });
                }
            }
        }

        let mut by_node: BTreeMap<&str, Vec<String>> = BTreeMap::new();
        for poi in &self.pois {
            if !seen.contains(poi.node_id.as_str()) {
                issues.push(ValidationIssue::UnknownPoiNode {
                    poi: poi.id.clone(),
                    node: poi.node_id.clone(),
                });
            }
            by_node
                .entry(poi.node_id.as_str())
                .or_default()
                .push(poi.id.clone());
        }
        for (node, pois) in by_node {
            if pois.len() > 1 {
                issues.push(ValidationIssue::SharedPoiNode {
                    node: node.to_string(),
                    pois,
                });
            }
        }

        issues
    }

    /// Fail with [`Error::InvalidDocument`] when [`validate`](Self::validate) finds anything.
    pub fn ensure_valid(&self) -> Result<()> {
        let issues = self.validate();
        if issues.is_empty() {
            return Ok(());
        }
        let message = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(Error::InvalidDocument { message })
    }

    /// Index the document's nodes by id, last write wins.
    pub fn node_lookup(&self) -> HashMap<&str, &Node> {
        self.nodes
            .iter()
            .map(|node| (node.id.as_str(), node))
            .collect()
    }
}

/// A single finding from [`GraphDocument::validate`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ValidationIssue {
    DuplicateNode { id: String },
    UnknownEdgeEndpoint { edge: usize, id: String },
    SelfLoop { edge: usize, id: String },
    InvalidWeight { edge: usize, weight: f64 },
    UnknownPoiNode { poi: String, node: String },
    SharedPoiNode { node: String, pois: Vec<String> },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DuplicateNode { id } => write!(f, "duplicate node id '{id}'"),
            ValidationIssue::UnknownEdgeEndpoint { edge, id } => {
                write!(f, "edge #{edge} references unknown node '{id}'")
            }
            ValidationIssue::SelfLoop { edge, id } => {
                write!(f, "edge #{edge} loops back to '{id}'")
            }
            ValidationIssue::InvalidWeight { edge, weight } => {
                write!(f, "edge #{edge} has unusable weight {weight}")
            }
            ValidationIssue::UnknownPoiNode { poi, node } => {
                write!(f, "poi '{poi}' references unknown node '{node}'")
            }
            ValidationIssue::SharedPoiNode { node, pois } => {
                write!(f, "node '{node}' is shared by pois {}", pois.join(", "))
            }
        }
    }
}
