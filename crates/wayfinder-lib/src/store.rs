//! Session-scoped graph store.
//!
//! The store fetches the feature and connector documents once, builds both
//! graphs, and keeps the router and POI list for the rest of the session.
//! A document that cannot be read or parsed becomes an empty graph, so a
//! connector mesh that failed to load behaves exactly like one that was never
//! authored.

use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use tracing::{info, warn};

use crate::document::{GraphDocument, Poi};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::router::Router;

/// Default timeout for remote document fetches.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimum Jaro-Winkler similarity for a POI label to count as a suggestion.
const FUZZY_MATCH_THRESHOLD: f64 = 0.8;

/// Where a graph document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// JSON file on the local filesystem.
    Path(PathBuf),
    /// JSON document served over HTTP(S).
    Url(String),
}

impl DocumentSource {
    /// Treat `http://` and `https://` prefixes as URLs, anything else as a path.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            DocumentSource::Url(raw.to_string())
        } else {
            DocumentSource::Path(PathBuf::from(raw))
        }
    }
}

impl FromStr for DocumentSource {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(DocumentSource::parse(s))
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::Path(path) => write!(f, "{}", path.display()),
            DocumentSource::Url(url) => f.write_str(url),
        }
    }
}

/// Where to find the documents for one navigation session.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub features: DocumentSource,
    pub connectors: Option<DocumentSource>,
    pub timeout: Duration,
}

impl StoreConfig {
    /// Configuration with a feature document and no connector mesh.
    pub fn new(features: DocumentSource) -> Self {
        Self {
            features,
            connectors: None,
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    pub fn with_connectors(mut self, connectors: DocumentSource) -> Self {
        self.connectors = Some(connectors);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Read or fetch a single graph document.
pub fn load_document(source: &DocumentSource, timeout: Duration) -> Result<GraphDocument> {
    match source {
        DocumentSource::Path(path) => GraphDocument::from_path(path),
        DocumentSource::Url(url) => {
            let client = build_client(timeout)?;
            let response = client.get(url).header(ACCEPT, "application/json").send()?;
            let status = response.status();
            if !status.is_success() {
                return Err(Error::HttpStatus {
                    url: url.clone(),
                    status: status.as_u16(),
                });
            }
            let body = response.text()?;
            GraphDocument::from_json_str(url, &body)
        }
    }
}

fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(user_agent())
        .build()
        .map_err(Error::Http)
}

fn user_agent() -> String {
    format!("wayfinder-lib/{version}", version = env!("CARGO_PKG_VERSION"))
}

/// Feature graph, connector graph and POIs for one session.
#[derive(Debug)]
pub struct GraphStore {
    router: Router,
    pois: Vec<Poi>,
}

impl GraphStore {
    /// Load both documents described by `config`.
    ///
    /// Never fails: unreadable or malformed documents are logged and replaced
    /// by empty graphs.
    pub fn load(config: &StoreConfig) -> Self {
        let features = load_or_empty(&config.features, config.timeout);
        let connectors = config
            .connectors
            .as_ref()
            .map(|source| load_or_empty(source, config.timeout));
        Self::from_documents(&features, connectors.as_ref())
    }

    /// Build a store from documents that are already in memory.
    pub fn from_documents(features: &GraphDocument, connectors: Option<&GraphDocument>) -> Self {
        let feature_graph = Graph::from_document(features);
        let router = match connectors {
            Some(document) => Router::new(feature_graph, Graph::from_document(document)),
            None => Router::features_only(feature_graph),
        };
        info!(
            features = router.features().len(),
            connectors = router.connectors().map_or(0, Graph::len),
            pois = features.pois.len(),
            "graph store ready"
        );
        Self {
            router,
            pois: features.pois.clone(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn features(&self) -> &Graph {
        self.router.features()
    }

    pub fn connectors(&self) -> Option<&Graph> {
        self.router.connectors()
    }

    pub fn pois(&self) -> &[Poi] {
        &self.pois
    }

    pub fn poi_by_id(&self, id: &str) -> Option<&Poi> {
        self.pois.iter().find(|poi| poi.id == id)
    }

    /// First POI that labels the given feature node.
    pub fn poi_for_node(&self, node_id: &str) -> Option<&Poi> {
        self.pois.iter().find(|poi| poi.node_id == node_id)
    }

    /// Resolve a user query to a feature-node id.
    ///
    /// Tries, in order: POI id, feature-node id, exact POI label, and POI
    /// label ignoring case.
    pub fn resolve(&self, query: &str) -> Option<&str> {
        if let Some(poi) = self.poi_by_id(query) {
            return Some(poi.node_id.as_str());
        }
        if let Some(node) = self.features().node(query) {
            return Some(node.id.as_str());
        }
        if let Some(poi) = self.pois.iter().find(|poi| poi.label == query) {
            return Some(poi.node_id.as_str());
        }
        let lowered = query.to_lowercase();
        self.pois
            .iter()
            .find(|poi| poi.label.to_lowercase() == lowered)
            .map(|poi| poi.node_id.as_str())
    }

    /// POI labels that look like `query`, best match first.
    pub fn fuzzy_poi_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let lowered = query.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .pois
            .iter()
            .map(|poi| {
                let score = strsim::jaro_winkler(&lowered, &poi.label.to_lowercase());
                (score, poi.label.as_str())
            })
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored.dedup_by(|a, b| a.1 == b.1);
        scored
            .into_iter()
            .take(limit)
            .map(|(_, label)| label.to_string())
            .collect()
    }
}

fn load_or_empty(source: &DocumentSource, timeout: Duration) -> GraphDocument {
    match load_document(source, timeout) {
        Ok(document) => {
            info!(
                source = %source,
                nodes = document.nodes.len(),
                edges = document.edges.len(),
                "loaded graph document"
            );
            document
        }
        Err(error) => {
            warn!(source = %source, error = %error, "graph document unavailable, using an empty graph");
            GraphDocument::default()
        }
    }
}
