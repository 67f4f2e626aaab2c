//! Error types for the ledger service

use shared_types::Digest;
use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors raised by the ledger outside of per-transaction handling.
///
/// Transaction rejections are not errors at this level: they are reported
/// in the [`ProductionReport`](crate::ProductionReport).
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read
    #[error("Config I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Configuration could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Pending pool is at capacity
    #[error("Pending pool full: capacity {capacity}")]
    PoolFull { capacity: usize },

    /// Appended block does not extend the tip
    #[error("Block {index} breaks linkage: expected {expected_index} after {expected_previous}")]
    BrokenLink {
        index: u64,
        expected_index: u64,
        expected_previous: Digest,
    },

    /// Stored digest disagrees with the stored fields
    #[error("Block {index} digest mismatch: stored {stored}, computed {computed}")]
    DigestMismatch {
        index: u64,
        stored: Digest,
        computed: Digest,
    },
}
