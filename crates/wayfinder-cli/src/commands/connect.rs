//! Connect command handler for synthesising connector edges by proximity.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use wayfinder_lib::{synthesize_edges, GraphDocument};

/// Arguments for the connect command.
#[derive(Debug, Clone)]
pub struct ConnectCommandArgs {
    /// Connector document whose nodes should be linked.
    pub input: PathBuf,
    /// Maximum straight-line distance between linked nodes.
    pub threshold: f64,
    /// Destination file; stdout when absent.
    pub output: Option<PathBuf>,
}

pub fn handle_connect(args: &ConnectCommandArgs) -> Result<()> {
    let mut document = GraphDocument::from_path(&args.input)?;
    let edges = synthesize_edges(&document.nodes, args.threshold)?;
    debug!(
        replaced = document.edges.len(),
        input = %args.input.display(),
        "replacing authored connector edges"
    );
    document.edges = edges;

    match &args.output {
        Some(path) => write_document(&document, path),
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, &document)?;
            writeln!(writer)?;
            Ok(())
        }
    }
}

fn write_document(document: &GraphDocument, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)
        .with_context(|| format!("failed to write {}", path.display()))?;
    writeln!(writer)?;
    writer.flush()?;
    println!("Connector document written to {}", path.display());
    Ok(())
}
