use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

fn default_extension() -> String {
    "md".to_string()
}

/// Where the articles live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Directory holding the Markdown articles. Also prefixes display names.
    pub directory: PathBuf,
    /// File extension of articles, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl SyncConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            extension: default_extension(),
        }
    }

    pub fn trace_loaded(&self) {
        info!(
            directory = %self.directory.display(),
            extension = %self.extension,
            "Loaded SyncConfig"
        );
        debug!(?self, "SyncConfig loaded (full debug)");
    }
}
