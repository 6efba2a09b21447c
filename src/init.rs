//! Workspace initialization.
//!
//! Writes the starter configuration file and creates the storage
//! directory.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use crate::{config::AppConfig, log};

/// Starter config file content (embedded at compile time)
const CONFIG_TEMPLATE: &str = include_str!("embed/quill.toml");

/// Create a starter config and the storage directory.
pub fn init_workspace(config_path: &Path, config: &AppConfig) -> Result<()> {
    if config_path.exists() {
        bail!("Config file already exists. Remove it manually or init in a different path.");
    }

    if let Some(parent) = config_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create `{}`", parent.display()))?;
    }
    fs::write(config_path, CONFIG_TEMPLATE)
        .with_context(|| format!("failed to write `{}`", config_path.display()))?;

    let storage_dir = config.storage_dir();
    fs::create_dir_all(&storage_dir)
        .with_context(|| format!("failed to create `{}`", storage_dir.display()))?;

    log!("init"; "wrote {}", config_path.display());
    log!("init"; "storage directory: {}", storage_dir.display());
    Ok(())
}
