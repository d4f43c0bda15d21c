use std::fmt::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use wayfinder_lib::{Poi, PoiAttachment, RouteRenderMode, RouteSummary, ValidationIssue};

/// Output style selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human readable text.
    #[default]
    Text,
    /// Markdown-flavoured text for chat and notes.
    Rich,
    /// Node ids only.
    Compact,
    /// Pretty printed JSON.
    Json,
}

impl OutputFormat {
    fn route_mode(self) -> Option<RouteRenderMode> {
        match self {
            OutputFormat::Text => Some(RouteRenderMode::PlainText),
            OutputFormat::Rich => Some(RouteRenderMode::RichText),
            OutputFormat::Compact => Some(RouteRenderMode::Compact),
            OutputFormat::Json => None,
        }
    }
}

/// Validation result for one document, as emitted by `wayfinder validate`.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub source: String,
    pub nodes: usize,
    pub edges: usize,
    pub issues: Vec<ValidationIssue>,
}

pub fn render_route(summary: &RouteSummary, format: OutputFormat) -> Result<String> {
    match format.route_mode() {
        Some(mode) => Ok(summary.render(mode)),
        None => to_json(summary),
    }
}

pub fn render_pois(pois: &[Poi], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&pois),
        OutputFormat::Compact => Ok(pois.iter().map(|poi| format!("{}\n", poi.id)).collect()),
        OutputFormat::Text | OutputFormat::Rich => {
            let mut buffer = String::new();
            for poi in pois {
                let _ = writeln!(
                    buffer,
                    "{:<12} {:<24} {:<10} {}",
                    poi.id, poi.label, poi.kind, poi.node_id
                );
            }
            Ok(buffer)
        }
    }
}

pub fn render_validation(reports: &[ValidationReport], format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return to_json(&reports);
    }
    let mut buffer = String::new();
    for report in reports {
        let _ = writeln!(
            buffer,
            "{}: {} nodes, {} edges, {} issue(s)",
            report.source,
            report.nodes,
            report.edges,
            report.issues.len()
        );
        for issue in &report.issues {
            let _ = writeln!(buffer, "  - {issue}");
        }
    }
    Ok(buffer)
}

pub fn render_attachments(attachments: &[PoiAttachment], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(&attachments),
        _ => {
            let mut buffer = String::new();
            for attachment in attachments {
                let _ = writeln!(
                    buffer,
                    "{} ({}) -> {} [{:.2}]",
                    attachment.poi_id,
                    attachment.node_id,
                    attachment.connector_id,
                    attachment.distance
                );
            }
            Ok(buffer)
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}
