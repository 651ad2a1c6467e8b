//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "inkwell",
    version,
    about = "Inkwell - browse posts and publish new ones from the terminal",
    long_about = "Browse the post list and write a new post through a validated form.\n\n\
                  Commands are read one per line from stdin (or --script). \
                  Type `help` once running for the command list."
)]
pub struct Cli {
    /// JSON file with the posts to start from (overrides INKWELL_SEED_PATH).
    #[arg(long, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Read commands from a file instead of stdin.
    #[arg(long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Reading speed used for read-time estimates (overrides INKWELL_WORDS_PER_MINUTE).
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub words_per_minute: Option<u32>,

    /// Emit logs as JSON (overrides LOG_FORMAT).
    #[arg(long)]
    pub json_logs: bool,
}
