//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use inkwell_shared::view::DEFAULT_WORDS_PER_MINUTE;

use crate::cli::Cli;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed file; the built-in sample posts are used when unset.
    pub seed_path: Option<PathBuf>,
    pub words_per_minute: u32,
    pub json_logs: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            seed_path: env::var_os("INKWELL_SEED_PATH").map(PathBuf::from),
            words_per_minute: env::var("INKWELL_WORDS_PER_MINUTE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|wpm| *wpm > 0)
                .unwrap_or(DEFAULT_WORDS_PER_MINUTE),
            json_logs: env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
        }
    }

    /// Apply command-line flags on top of the environment.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(seed) = &cli.seed {
            self.seed_path = Some(seed.clone());
        }
        if let Some(wpm) = cli.words_per_minute {
            self.words_per_minute = wpm;
        }
        self.json_logs |= cli.json_logs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_flags_override_config() {
        let base = AppConfig {
            seed_path: None,
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            json_logs: false,
        };
        let cli = Cli::parse_from([
            "inkwell",
            "--seed",
            "posts.json",
            "--words-per-minute",
            "120",
            "--json-logs",
        ]);

        let config = base.with_cli(&cli);
        assert_eq!(config.seed_path, Some(PathBuf::from("posts.json")));
        assert_eq!(config.words_per_minute, 120);
        assert!(config.json_logs);
    }

    #[test]
    fn test_missing_flags_keep_config() {
        let base = AppConfig {
            seed_path: Some(PathBuf::from("env.json")),
            words_per_minute: 90,
            json_logs: true,
        };
        let cli = Cli::parse_from(["inkwell"]);

        assert_eq!(base.clone().with_cli(&cli), base);
    }

    #[test]
    fn test_zero_words_per_minute_is_rejected() {
        assert!(Cli::try_parse_from(["inkwell", "--words-per-minute", "0"]).is_err());
    }
}
