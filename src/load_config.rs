//! `load_config`: reads the YAML sync configuration and applies environment overrides.
//!
//! The file only names where the articles are. `DEVTO_SYNC_DIRECTORY`, when set (directly
//! or through a `.env` file), replaces the configured directory.

use crate::config::SyncConfig;
use anyhow::Result;
use std::fs;
use std::path::Path;
use tracing::{error, info};

pub const DIRECTORY_ENV: &str = "DEVTO_SYNC_DIRECTORY";

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SyncConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    dotenvy::dotenv().ok();

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => {
            info!(config_path = ?path_ref, "Config file read successfully");
            content
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    let mut config: SyncConfig = match serde_yaml::from_str(&config_content) {
        Ok(conf) => {
            info!(config_path = ?path_ref, "Parsed config YAML successfully");
            conf
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            return Err(anyhow::anyhow!("Failed to parse config YAML: {e}"));
        }
    };

    if let Ok(directory) = std::env::var(DIRECTORY_ENV) {
        if !directory.is_empty() {
            info!(directory = %directory, "DEVTO_SYNC_DIRECTORY overrides configured directory");
            config.directory = directory.into();
        }
    }

    let extension = config.extension.trim_start_matches('.').to_string();
    if extension.is_empty() {
        error!(config_path = ?path_ref, "Empty extension in config");
        anyhow::bail!("extension must not be empty");
    }
    config.extension = extension;

    config.trace_loaded();
    Ok(config)
}
