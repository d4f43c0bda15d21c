use thiserror::Error;

/// Convenient result alias for the wayfinding library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The pathfinding core (graph building, search, dual-graph routing) never
/// produces these; it reports "no route" as `None`. Errors come from the
/// layers around it: document loading, POI resolution, and authoring tools.
#[derive(Debug, Error)]
pub enum Error {
    /// A graph document could not be read from disk.
    #[error("failed to read graph document {source_name}")]
    DocumentRead {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// A graph document was not valid JSON or lacked required fields.
    #[error("malformed graph document {source_name}: {source}")]
    DocumentParse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// A remote graph document responded with a non-success status.
    #[error("fetching {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Raised when a node id is not part of the feature graph.
    #[error("unknown node id: {id}")]
    UnknownNode { id: String },

    /// Raised when a POI query matched neither an id, a label, nor a node.
    #[error("unknown location '{query}'{}", format_suggestions(.suggestions))]
    UnknownPoi {
        query: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two locations.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any waypoints.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised by document validation when authoring problems were found.
    #[error("invalid graph document: {message}")]
    InvalidDocument { message: String },

    /// Raised when an edge-synthesis distance threshold is unusable.
    #[error("edge threshold must be a positive finite distance, got {value}")]
    InvalidThreshold { value: f64 },

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Wrapper for IO errors outside document reads.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
