//! Configuration loading for the CLI.

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use tracing::{debug, warn};

use invex_core::models::config::InvexConfig;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "INVEX_CONFIG";

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("invex")
        .join("config.json")
}

/// Load the configuration, falling back to defaults when none is usable.
pub fn load() -> InvexConfig {
    match try_load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            debug!("No config file found, using defaults");
            InvexConfig::default()
        }
        Err(e) => {
            warn!("{:#}; using defaults", e);
            InvexConfig::default()
        }
    }
}

fn try_load() -> anyhow::Result<Option<InvexConfig>> {
    let path = match env::var_os(CONFIG_ENV) {
        Some(path) => PathBuf::from(path),
        None => {
            let path = default_config_path();
            if !path.exists() {
                return Ok(None);
            }
            path
        }
    };

    let config = InvexConfig::from_file(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;
    debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}
