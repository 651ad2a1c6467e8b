//! Telemetry initialization.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset: warnings everywhere, info for this
/// binary and the inkwell crates.
pub fn default_filter() -> String {
    format!(
        "warn,{}=info,inkwell_core=info,inkwell_infra=info",
        env!("CARGO_CRATE_NAME")
    )
}

/// Initialize tracing. Logs go to stderr so command output on stdout
/// stays clean.
pub fn init_telemetry(json_logs: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter()));

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    tracing::debug!(json_logs, "Telemetry initialized");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_enables_binary_target_at_info() {
        let binary_target = module_path!().split("::").next().unwrap();
        let filter = default_filter();

        assert!(
            filter
                .split(',')
                .any(|directive| directive == format!("{binary_target}=info")),
            "{filter} does not enable {binary_target}"
        );
        assert!(EnvFilter::try_new(&filter).is_ok());
    }
}
