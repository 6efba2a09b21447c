//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quill blogging engine CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory (where the config file lives)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: quill.toml)
    #[arg(short = 'C', long, default_value = "quill.toml")]
    pub config: PathBuf,

    /// Storage directory override (default comes from the config file)
    #[arg(short, long)]
    pub storage: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for the publish command
#[derive(clap::Args, Debug, Clone)]
pub struct PublishArgs {
    /// Post title
    #[arg(short, long)]
    pub title: String,

    /// Read the post body from this file; use '-' for stdin
    #[arg(short, long)]
    pub file: PathBuf,

    /// Cover image URL
    #[arg(long)]
    pub cover_image: Option<String>,

    /// Comma-separated tags (e.g. "Writing, Technology")
    #[arg(long, default_value = "")]
    pub tags: String,

    /// Author username (falls back to `author` in the config file)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password for the login gate
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create a default config file and the storage directory
    Init,

    /// List every post, bundled and authored
    List,

    /// Search posts by title, excerpt or tag
    Search {
        /// What to look for; omit it for a hint on how to search
        query: Option<String>,

        /// Search only your authored posts, not the bundled ones
        #[arg(long)]
        mine: bool,
    },

    /// Read one post, rendered for the terminal
    Show {
        /// Post id, as printed by `list` and `search`
        id: String,
    },

    /// Publish a new post to the local store
    Publish {
        #[command(flatten)]
        publish_args: PublishArgs,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init)
    }
    pub const fn is_publish(&self) -> bool {
        matches!(self.command, Commands::Publish { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_publish() {
        let cli = Cli::parse_from([
            "quill", "publish", "--title", "Hi", "--file", "body.md", "--tags", "a,b",
            "--username", "ann", "--password", "pw",
        ]);
        assert!(cli.is_publish());
        match cli.command {
            Commands::Publish { publish_args } => {
                assert_eq!(publish_args.title, "Hi");
                assert_eq!(publish_args.tags, "a,b");
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_parse_search_without_query() {
        let cli = Cli::parse_from(["quill", "search"]);
        match cli.command {
            Commands::Search { query, mine } => {
                assert!(query.is_none());
                assert!(!mine);
            }
            _ => unreachable!(),
        }
    }
}
