//! Command line definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::StorageKind;

#[derive(Parser)]
#[command(name = "boostblog", version, about = "Write and browse BoostBlog posts")]
pub struct Cli {
    /// Data directory for file storage (overrides BLOG_DATA_DIR)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Storage backend (overrides BLOG_STORAGE)
    #[arg(long, global = true, value_enum)]
    pub storage: Option<StorageKind>,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// List posts, newest first
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show a single post
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Delete a post
    Delete { id: String },
    /// Write a new post through the creation wizard
    Create(CreateArgs),
}

#[derive(Args, Default)]
pub struct CreateArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub summary: Option<String>,
    /// One of Tech, Lifestyle, Business (any non-empty value is accepted)
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub content: Option<String>,
    /// Prompt for each field step by step
    #[arg(short, long, conflicts_with_all = ["title", "author", "summary", "category", "content", "json"])]
    pub interactive: bool,
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    #[test]
    fn interactive_create_rejects_json_output() {
        let err = Cli::try_parse_from(["boostblog", "create", "--interactive", "--json"])
            .err()
            .expect("flags conflict");
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn create_accepts_interactive_or_json_alone() {
        let cli = Cli::try_parse_from(["boostblog", "create", "-i"]).unwrap();
        assert!(matches!(cli.cmd, Cmd::Create(CreateArgs { interactive: true, json: false, .. })));

        let cli = Cli::try_parse_from(["boostblog", "create", "--title", "Hello", "--json"]).unwrap();
        assert!(matches!(cli.cmd, Cmd::Create(CreateArgs { interactive: false, json: true, .. })));
    }
}
