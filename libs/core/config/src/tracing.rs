use crate::Environment;
use tracing::{debug, info, warn};
use tracing_subscriber::{prelude::*, EnvFilter};

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations to ensure
/// colored error output. Safe to call multiple times.
///
/// Configuration:
/// - Shows file:line where errors occur
/// - Hides environment variables (less noise)
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize tracing with environment-aware configuration and error span capture.
///
/// - **Production** (`APP_ENV=production`): JSON format for log aggregation,
///   module targets hidden, default filter `info`.
/// - **Development** (default): pretty-printed format, default filter `debug`.
///
/// Both variants register an `ErrorLayer` so span traces are captured when
/// errors surface through eyre reports.
///
/// `RUST_LOG` overrides the filter entirely. When it is unset a warning is
/// emitted, since operators usually want the filter pinned explicitly.
///
/// # Multiple calls
///
/// Safe to call multiple times: if a subscriber is already installed the call
/// is a debug-logged no-op (common in tests).
pub fn init_tracing(environment: &Environment) {
    let default_filter = if environment.is_production() {
        "info"
    } else {
        "debug"
    };

    let filter_overridden = std::env::var(EnvFilter::DEFAULT_ENV).is_ok();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => {
            info!(environment = ?environment, "Tracing initialized");
            if !filter_overridden {
                warn!(
                    default = default_filter,
                    "RUST_LOG is not set. Falling back to the default log filter."
                );
            }
        }
        Err(_) => {
            debug!("Tracing already initialized, skipping re-initialization");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_development() {
        // Should not panic
        init_tracing(&Environment::Development);
    }

    #[test]
    fn test_init_tracing_production() {
        // Should not panic
        init_tracing(&Environment::Production);
    }

    #[test]
    fn test_init_tracing_multiple_calls() {
        // Should not panic when called multiple times
        init_tracing(&Environment::Development);
        init_tracing(&Environment::Development);
    }

    #[test]
    fn test_init_tracing_with_rust_log_env() {
        temp_env::with_var("RUST_LOG", Some("trace"), || {
            init_tracing(&Environment::Development);
        });
    }
}
