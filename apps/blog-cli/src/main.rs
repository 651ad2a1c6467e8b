//! # Inkwell
//!
//! Terminal front end: browse the post list and publish new posts.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use clap::Parser;

use inkwell_infra::{ConsoleNotifier, InMemoryPostStore, SystemClock, seed};

mod cli;
mod command;
mod config;
mod render;
mod session;
mod telemetry;

use cli::Cli;
use config::AppConfig;
use session::Session;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env().with_cli(&cli);

    telemetry::init_telemetry(config.json_logs);

    let posts = match &config.seed_path {
        Some(path) => seed::load_posts(path)
            .with_context(|| format!("loading seed posts from {}", path.display()))?,
        None => seed::sample_posts().context("loading built-in sample posts")?,
    };
    let store = InMemoryPostStore::with_posts(posts);

    tracing::info!(
        posts = store.len(),
        words_per_minute = config.words_per_minute,
        "Starting Inkwell session"
    );

    let mut session = Session::new(
        store,
        SystemClock,
        ConsoleNotifier,
        io::stdout().lock(),
        config.words_per_minute,
    );

    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("opening script {}", path.display()))?;
            session.run(BufReader::new(file))
        }
        None => session.run(io::stdin().lock()),
    }
    .context("session I/O failed")?;

    tracing::info!(posts = session.store().len(), "Session ended");
    Ok(())
}
