//! Quill - a local-first blogging engine for the terminal.

mod assemble;
mod auth;
mod browse;
mod cli;
mod config;
mod data;
mod init;
mod logger;
mod read;
mod render;
mod search;
mod write;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::AppConfig;
use data::{persist::JsonStorage, store::ContentStore};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("./"));
    let config_path = root.join(&cli.config);
    let config = load_config(&cli, &config_path)?;

    // Composition root: the one place the store is constructed. Everything
    // below receives it by reference.
    let store = ContentStore::open(JsonStorage::new(config.storage_dir()));

    match cli.command {
        Commands::Init => init::init_workspace(&config_path, &config),
        Commands::List => browse::list(&store),
        Commands::Search { query, mine } => browse::run_search(query.as_deref(), mine, &store),
        Commands::Show { id } => read::show(&id, &store),
        Commands::Publish { publish_args } => write::publish(publish_args, &config, &store),
    }
}

/// Load configuration, apply CLI overrides and validate.
///
/// A missing config file is fine: defaults apply, and `quill init`
/// writes a starter file.
fn load_config(cli: &Cli, config_path: &Path) -> Result<AppConfig> {
    let mut config = if config_path.exists() {
        AppConfig::from_path(config_path)
            .with_context(|| format!("failed to load `{}`", config_path.display()))?
    } else {
        AppConfig::default()
    };

    config.update_with_cli(cli);
    config.validate()?;
    Ok(config)
}
