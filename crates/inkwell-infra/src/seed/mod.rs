//! Seed data for the post store.

use std::path::{Path, PathBuf};

use thiserror::Error;

use inkwell_core::domain::Post;

const SAMPLE_POSTS: &str = include_str!("posts.json");

/// Errors while loading seed posts.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The built-in sample posts.
pub fn sample_posts() -> Result<Vec<Post>, SeedError> {
    parse_posts(SAMPLE_POSTS)
}

/// Load seed posts from a JSON file holding an array of posts.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, SeedError> {
    let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let posts = parse_posts(&json)?;
    tracing::info!(path = %path.display(), count = posts.len(), "Seed posts loaded");
    Ok(posts)
}

pub fn parse_posts(json: &str) -> Result<Vec<Post>, SeedError> {
    Ok(serde_json::from_str(json)?)
}
