//! Checked balance arithmetic.
//!
//! These compute the new balance without writing it, so callers can run
//! every check before the first mutation.

use rwa_01_state::{BalanceKey, StateError, StateStore};
use shared_types::Quantity;

/// Balance of `holder` after receiving `amount`.
pub fn credit(
    state: &StateStore,
    symbol: &str,
    holder: &str,
    amount: Quantity,
) -> Result<Quantity, StateError> {
    let current = state.balance(symbol, holder);
    current
        .checked_add(amount)
        .ok_or_else(|| StateError::BalanceOverflow {
            key: key_name(symbol, holder),
            current,
            amount,
        })
}

/// Balance of `holder` after paying `amount`.
pub fn debit(
    state: &StateStore,
    symbol: &str,
    holder: &str,
    amount: Quantity,
) -> Result<Quantity, StateError> {
    let current = state.balance(symbol, holder);
    current
        .checked_sub(amount)
        .ok_or_else(|| StateError::BalanceUnderflow {
            key: key_name(symbol, holder),
            current,
            amount,
        })
}

fn key_name(symbol: &str, holder: &str) -> String {
    rwa_01_state::StateKey::from(BalanceKey::new(symbol, holder)).to_string()
}
