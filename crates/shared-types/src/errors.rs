//! # Error Types
//!
//! Business rejections raised by module handlers. Every variant is an
//! expected, recoverable outcome: the offending transaction is left out of
//! the next block and nothing else happens.

use crate::entities::Quantity;
use crate::hashing::Digest;
use std::fmt;
use thiserror::Error;

/// Reason a transaction was rejected by a module.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TxRejection {
    /// Actor lacks the required privilege.
    #[error("Unauthorized: {0}")]
    Authorization(String),

    /// Actor or counterparty lacks a Verified identity.
    #[error("Compliance error: {0}")]
    Compliance(String),

    /// Uniquely keyed entity already exists.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Transfer exceeds available funds.
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        required: Quantity,
        available: Quantity,
    },

    /// Referenced entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// A decoded transaction whose stored id disagrees with its content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Transaction id mismatch: stored {stored}, computed {computed}")]
pub struct TxIdMismatch {
    pub stored: Digest,
    pub computed: Digest,
}

/// Discriminant of [`TxRejection`], for counting and matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
    Authorization,
    Compliance,
    Conflict,
    InsufficientBalance,
    NotFound,
}

impl TxRejection {
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::Authorization(_) => RejectionKind::Authorization,
            Self::Compliance(_) => RejectionKind::Compliance,
            Self::Conflict(_) => RejectionKind::Conflict,
            Self::InsufficientBalance { .. } => RejectionKind::InsufficientBalance,
            Self::NotFound(_) => RejectionKind::NotFound,
        }
    }
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RejectionKind::Authorization => "AuthorizationError",
            RejectionKind::Compliance => "ComplianceError",
            RejectionKind::Conflict => "ConflictError",
            RejectionKind::InsufficientBalance => "InsufficientBalanceError",
            RejectionKind::NotFound => "NotFoundError",
        };
        f.write_str(name)
    }
}
