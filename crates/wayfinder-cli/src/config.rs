//! Resolution of command-line flags into a [`StoreConfig`].

use std::path::{Path, PathBuf};

use wayfinder_lib::{DocumentSource, StoreConfig};

/// Default feature document name inside the data directory.
pub const FEATURES_FILENAME: &str = "features.json";

/// Default connector document name inside the data directory.
pub const CONNECTORS_FILENAME: &str = "connectors.json";

/// Document-related flags shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct SourceArgs {
    pub data_dir: PathBuf,
    pub features: Option<DocumentSource>,
    pub connectors: Option<DocumentSource>,
    pub no_connectors: bool,
}

impl SourceArgs {
    /// Explicit `--features`, otherwise `<data-dir>/features.json`.
    pub fn features_source(&self) -> DocumentSource {
        self.features
            .clone()
            .unwrap_or_else(|| DocumentSource::Path(self.data_dir.join(FEATURES_FILENAME)))
    }

    /// Explicit `--connectors`, otherwise `<data-dir>/connectors.json` when it
    /// exists. `--no-connectors` always wins.
    pub fn connectors_source(&self) -> Option<DocumentSource> {
        if self.no_connectors {
            return None;
        }
        if let Some(source) = &self.connectors {
            return Some(source.clone());
        }
        default_connectors(&self.data_dir)
    }

    pub fn store_config(&self) -> StoreConfig {
        let config = StoreConfig::new(self.features_source());
        match self.connectors_source() {
            Some(source) => config.with_connectors(source),
            None => config,
        }
    }
}

fn default_connectors(data_dir: &Path) -> Option<DocumentSource> {
    let path = data_dir.join(CONNECTORS_FILENAME);
    path.is_file().then_some(DocumentSource::Path(path))
}
