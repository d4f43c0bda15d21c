//! Validate command handler for checking authored graph documents.

use anyhow::{bail, Result};
use tracing::warn;

use wayfinder_cli::config::SourceArgs;
use wayfinder_cli::output::{render_validation, OutputFormat, ValidationReport};
use wayfinder_lib::{load_document, DocumentSource, DEFAULT_FETCH_TIMEOUT};

/// Check the feature document and, when present, the connector document.
///
/// Unlike route planning, an unreadable document is an error here rather
/// than an empty graph.
pub fn handle_validate(sources: &SourceArgs, format: OutputFormat) -> Result<()> {
    let mut reports = vec![validate_source(&sources.features_source())?];
    if let Some(connectors) = sources.connectors_source() {
        reports.push(validate_source(&connectors)?);
    }

    print!("{}", render_validation(&reports, format)?);

    let issues: usize = reports.iter().map(|report| report.issues.len()).sum();
    if issues > 0 {
        bail!("validation found {issues} issue(s)");
    }
    Ok(())
}

fn validate_source(source: &DocumentSource) -> Result<ValidationReport> {
    let document = load_document(source, DEFAULT_FETCH_TIMEOUT)?;
    let issues = document.validate();
    for issue in &issues {
        warn!(source = %source, "{issue}");
    }
    Ok(ValidationReport {
        source: source.to_string(),
        nodes: document.nodes.len(),
        edges: document.edges.len(),
        issues,
    })
}
