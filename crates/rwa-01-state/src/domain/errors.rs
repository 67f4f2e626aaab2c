use shared_types::TxRejection;
use thiserror::Error;

/// Faults raised by the state store. These indicate a defect, never a
/// business rejection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("Balance overflow at {key}: {current} + {amount}")]
    BalanceOverflow {
        key: String,
        current: u128,
        amount: u128,
    },

    #[error("Balance underflow at {key}: {current} - {amount}")]
    BalanceUnderflow {
        key: String,
        current: u128,
        amount: u128,
    },
}

/// Outcome of a handler that did not succeed.
///
/// `Rejected` is the expected path: the transaction is excluded from the
/// block. `Fault` is a defect and is reported separately.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Rejected(#[from] TxRejection),

    #[error("State fault: {0}")]
    Fault(#[from] StateError),
}

pub type HandlerResult = Result<(), HandlerError>;
