use anyhow::{anyhow, Result};

use wayfinder_cli::config::SourceArgs;
use wayfinder_cli::output::{render_attachments, OutputFormat};
use wayfinder_lib::{attach_pois, load_document, Graph, DEFAULT_FETCH_TIMEOUT};

/// Report the connector node each POI snaps onto.
pub fn handle_stitch(sources: &SourceArgs, format: OutputFormat) -> Result<()> {
    let connectors_source = sources
        .connectors_source()
        .ok_or_else(|| anyhow!("stitch requires a connector document (--connectors)"))?;

    let features = load_document(&sources.features_source(), DEFAULT_FETCH_TIMEOUT)?;
    let connectors = Graph::from_document(&load_document(&connectors_source, DEFAULT_FETCH_TIMEOUT)?);

    let attachments = attach_pois(&features, &connectors);
    print!("{}", render_attachments(&attachments, format)?);
    Ok(())
}
