//! # RWA Telemetry
//!
//! Structured logging for RWA-Chain processes and test harnesses.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rwa_telemetry::{init_logging, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! init_logging(&config)?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `RWA_LOG_LEVEL` / `RUST_LOG` | `info` | Log filter directive |
//! | `RWA_JSON_LOGS` | `false` | Emit JSON lines instead of text |
//! | `RWA_SERVICE_NAME` | `rwa-chain` | Service name on the startup line |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::init_logging;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Failed to install subscriber: {0}")]
    SubscriberInit(String),
}
