mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use wayfinder_cli::config::SourceArgs;
use wayfinder_cli::output::OutputFormat;
use wayfinder_lib::DocumentSource;

use commands::connect::{handle_connect, ConnectCommandArgs};
use commands::pois::handle_pois;
use commands::route::{handle_route, RouteCommandArgs};
use commands::stitch::handle_stitch;
use commands::validate::handle_validate;

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus wayfinding utilities")]
struct Cli {
    /// Directory holding features.json and connectors.json.
    #[arg(long, global = true, default_value = "data")]
    data_dir: PathBuf,

    /// Feature document path or URL (overrides <data-dir>/features.json).
    #[arg(long, global = true)]
    features: Option<DocumentSource>,

    /// Connector document path or URL (overrides <data-dir>/connectors.json).
    #[arg(long, global = true)]
    connectors: Option<DocumentSource>,

    /// Ignore any connector document and route in straight lines.
    #[arg(long, global = true)]
    no_connectors: bool,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn sources(&self) -> SourceArgs {
        SourceArgs {
            data_dir: self.data_dir.clone(),
            features: self.features.clone(),
            connectors: self.connectors.clone(),
            no_connectors: self.no_connectors,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plan a walking route between two locations.
    Route {
        /// Origin POI id, label or feature node id.
        #[arg(long = "from")]
        from: String,
        /// Destination POI id, label or feature node id.
        #[arg(long = "to")]
        to: String,
    },
    /// List the points of interest in the feature document.
    Pois,
    /// Check the loaded documents for authoring mistakes.
    Validate,
    /// Replace a connector document's edges with proximity links.
    Connect {
        /// Connector document to read.
        #[arg(long)]
        input: PathBuf,
        /// Link every pair of nodes at most this far apart.
        #[arg(long)]
        threshold: f64,
        /// File to write; stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show which connector node each point of interest snaps to.
    Stitch,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let sources = cli.sources();

    match cli.command {
        Command::Route { from, to } => {
            handle_route(&sources, &RouteCommandArgs { from, to }, cli.format)
        }
        Command::Pois => handle_pois(&sources, cli.format),
        Command::Validate => handle_validate(&sources, cli.format),
        Command::Connect {
            input,
            threshold,
            output,
        } => handle_connect(&ConnectCommandArgs {
            input,
            threshold,
            output,
        }),
        Command::Stitch => handle_stitch(&sources, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
