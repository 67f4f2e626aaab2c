//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name reported at startup
    pub service_name: String,

    /// `EnvFilter` directive (trace, debug, info, warn, error, or per-target)
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "rwa-chain".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `RWA_SERVICE_NAME`: Service name (default: rwa-chain)
    /// - `RWA_LOG_LEVEL` or `RUST_LOG`: Log filter (default: info)
    /// - `RWA_JSON_LOGS`: Enable JSON logs (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            service_name: lookup("RWA_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("RWA_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("RWA_JSON_LOGS")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(defaults.json_logs),
        }
    }

    /// Quiet configuration for test binaries.
    pub fn for_tests() -> Self {
        Self {
            service_name: "rwa-tests".to_string(),
            log_level: "warn".to_string(),
            json_logs: false,
        }
    }
}
