//! Campus wayfinding library entry points.
//!
//! This crate exposes helpers to load campus map documents, build the feature
//! and connector graphs, and run the dual-graph router over them. Higher-level
//! consumers (the CLI, rendering layers) should only depend on the functions
//! exported here instead of reimplementing behavior.

pub mod authoring;
pub mod document;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod output;
pub mod path;
pub mod router;
pub mod routing;
pub mod spatial;
pub mod store;

pub use authoring::{attach_pois, synthesize_edges, PoiAttachment};
pub use document::{EdgeRecord, GraphDocument, Node, Poi, ValidationIssue};
pub use error::{Error, Result};
pub use geometry::{distance, nearest_node, path_length};
pub use graph::{build_graph, Edge, Graph, NodeIndex};
pub use output::{RouteRenderMode, RouteSummary, RouteWaypoint};
pub use path::{find_path, path_cost};
pub use router::Router;
pub use routing::{plan_route, RoutePlan, RouteRequest};
pub use spatial::ConnectorIndex;
pub use store::{
    load_document, DocumentSource, GraphStore, StoreConfig, DEFAULT_FETCH_TIMEOUT,
};
