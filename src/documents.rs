//! Reading article files from disk.
//!
//! The parser takes text that has already been read; this module is the caller side of
//! that boundary. Each file becomes a [`Document`] whose display name is
//! `<directory>/<basename>`, the identifier used in every diagnostic about it.

use crate::config::SyncConfig;
use anyhow::{Context, Result};
use std::fs::DirEntry;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// One article file, read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub display_name: String,
    pub text: String,
}

/// `<directory>/<basename>` for `path`.
pub fn display_name(directory: &Path, path: &Path) -> String {
    let basename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}/{}", directory.display(), basename)
}

fn entry_path(entry: std::io::Result<DirEntry>, directory: &Path) -> Result<PathBuf> {
    match entry {
        Ok(entry) => Ok(entry.path()),
        Err(e) => {
            error!(error = ?e, directory = %directory.display(), "Failed to read directory entry");
            Err(e).with_context(|| format!("Failed to read entry in {}", directory.display()))
        }
    }
}

/// Read every file with the configured extension, in file name order.
///
/// Subdirectories are not descended into.
pub fn load_documents(config: &SyncConfig) -> Result<Vec<Document>> {
    info!(directory = %config.directory.display(), extension = %config.extension, "Collecting articles");

    let entries = std::fs::read_dir(&config.directory).with_context(|| {
        format!(
            "Failed to read article directory {}",
            config.directory.display()
        )
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry_path(entry, &config.directory)?;
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .map_or(false, |ext| ext.to_string_lossy() == config.extension);
        if matches {
            paths.push(path);
        } else {
            debug!(path = %path.display(), "Skipping file with other extension");
        }
    }
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                error!(error = ?e, path = %path.display(), "Failed to read article");
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };
        let display_name = display_name(&config.directory, &path);
        debug!(document = %display_name, bytes = text.len(), "Read article");
        documents.push(Document {
            path,
            display_name,
            text,
        });
    }

    info!(count = documents.len(), "Collected articles");
    Ok(documents)
}
