//! # Moji Telemetry
//!
//! Structured logging for the cryptomoji transaction processor.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use moji_telemetry::{init_tracing, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::for_family("cryptomoji");
//!     init_tracing(&config).expect("Failed to init tracing");
//!
//!     // Register the handler with the host runtime here
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `cryptomoji-tp` | Service name in log lines |
//! | `MOJI_LOG_LEVEL` | `info` | Log level filter |
//! | `MOJI_CONSOLE_OUTPUT` | `true` | Emit logs to stdout |
//! | `MOJI_JSON_LOGS` | `false` | JSON formatted logs |

#![warn(missing_docs)]

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::init_tracing;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("Tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),

    /// The log filter could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Log a transaction-related event with standard fields.
///
/// # Example
///
/// ```rust,ignore
/// log_tx_event!(debug, "cryptomoji", "Collection created", signer, address = %addr);
/// ```
#[macro_export]
macro_rules! log_tx_event {
    ($level:ident, $family:expr, $msg:expr, $signer:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            family = $family,
            signer = %$signer,
            $($($field)*,)?
            $msg
        )
    };
}
