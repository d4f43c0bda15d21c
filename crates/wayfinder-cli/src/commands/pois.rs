use anyhow::{bail, Result};

use wayfinder_cli::config::SourceArgs;
use wayfinder_cli::output::{render_pois, OutputFormat};
use wayfinder_lib::{load_document, DEFAULT_FETCH_TIMEOUT};

/// List the points of interest declared by the feature document.
pub fn handle_pois(sources: &SourceArgs, format: OutputFormat) -> Result<()> {
    let source = sources.features_source();
    let document = load_document(&source, DEFAULT_FETCH_TIMEOUT)?;
    if document.pois.is_empty() {
        bail!("{source} declares no points of interest");
    }
    print!("{}", render_pois(&document.pois, format)?);
    Ok(())
}
