// ============================================================================
// Logging
// tracing-subscriber initialization for binaries embedding the converter
// ============================================================================

use std::fmt;
use tracing_subscriber::EnvFilter;

/// Errors from logging initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingError {
    /// A global subscriber was installed earlier
    SubscriberAlreadySet,
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingError::SubscriberAlreadySet => {
                write!(f, "tracing subscriber already initialized")
            },
        }
    }
}

impl std::error::Error for LoggingError {}

/// Install a stderr fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (e.g. `"warn"`,
/// `"base_converter=debug"`) is used.
pub fn init(default_directive: &str) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
