//! Shared fixture helpers for integration tests.

use std::path::PathBuf;

use wayfinder_lib::{DocumentSource, GraphDocument, GraphStore, StoreConfig};

/// Path to fixtures directory used by tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn features_path() -> PathBuf {
    fixtures_dir().join("campus_features.json")
}

pub fn connectors_path() -> PathBuf {
    fixtures_dir().join("campus_connectors.json")
}

#[allow(dead_code)]
pub fn features_document() -> GraphDocument {
    GraphDocument::from_path(&features_path()).expect("load campus_features.json")
}

#[allow(dead_code)]
pub fn connectors_document() -> GraphDocument {
    GraphDocument::from_path(&connectors_path()).expect("load campus_connectors.json")
}

/// Store backed by both campus fixture documents.
#[allow(dead_code)]
pub fn campus_store() -> GraphStore {
    let config = StoreConfig::new(DocumentSource::Path(features_path()))
        .with_connectors(DocumentSource::Path(connectors_path()));
    GraphStore::load(&config)
}

/// Ids of a node route, for compact assertions.
#[allow(dead_code)]
pub fn ids(route: &[wayfinder_lib::Node]) -> Vec<&str> {
    route.iter().map(|node| node.id.as_str()).collect()
}
