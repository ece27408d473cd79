//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Resolve a sort request and print its ordering clause and sort links.
#[derive(Debug, Parser)]
#[command(name = "sortlink", version, about)]
pub struct Args {
    /// JSON file with the sort declaration and an optional schema.
    #[arg(short, long)]
    pub config: PathBuf,

    /// Sort token, overriding the one in `--query`.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Request query string, e.g. `page=2&sort=name.desc`.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Attributes to render links for (default: every declared attribute).
    #[arg(short, long = "link")]
    pub links: Vec<String>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
