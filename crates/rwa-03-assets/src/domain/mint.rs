//! # Mint Capability
//!
//! The only path that creates balance outside of issuance. A capability is
//! bound to one reward symbol and can only be obtained from
//! [`AssetModule::mint_capability`](crate::AssetModule::mint_capability),
//! which also reserves the symbol against user issuance.

use super::ledger::credit;
use rwa_01_state::{BalanceKey, StateError, StateStore};
use shared_types::{abbreviate, Quantity, Symbol};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct MintCapability {
    symbol: Symbol,
}

impl MintCapability {
    pub(crate) fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Credit `holder` with `amount` of the reward symbol. Returns the new
    /// balance.
    pub fn mint(
        &self,
        state: &mut StateStore,
        holder: &str,
        amount: Quantity,
    ) -> Result<Quantity, StateError> {
        let balance = credit(state, &self.symbol, holder, amount)?;
        state.put(BalanceKey::new(self.symbol.as_str(), holder), balance);
        debug!(
            symbol = %self.symbol,
            holder = abbreviate(holder),
            amount = %amount,
            "Minted protocol reward"
        );
        Ok(balance)
    }
}
