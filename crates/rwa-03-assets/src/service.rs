//! Asset module service.

use crate::domain::{credit, debit, MintCapability};
use rwa_01_state::{
    AssetKey, BalanceKey, ComplianceGate, HandlerResult, StateStore, TransactionHandler,
};
use shared_types::{
    abbreviate, AssetRecord, PublicKey, Quantity, Symbol, Transaction, TxKind, TxPayload,
    TxRejection,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::info;

const KINDS: &[TxKind] = &[TxKind::AssetIssuance, TxKind::AssetTransfer];

pub struct AssetModule {
    gate: Arc<dyn ComplianceGate>,
    reserved: BTreeSet<Symbol>,
}

impl AssetModule {
    pub const NAME: &'static str = "asset";

    pub fn new(gate: Arc<dyn ComplianceGate>) -> Self {
        Self {
            gate,
            reserved: BTreeSet::new(),
        }
    }

    /// Hand out the mint capability for a reward symbol. The symbol becomes
    /// reserved: user issuance of it is rejected from now on.
    pub fn mint_capability(&mut self, symbol: impl Into<Symbol>) -> MintCapability {
        let symbol = symbol.into();
        self.reserved.insert(symbol.clone());
        MintCapability::new(symbol)
    }

    pub fn is_reserved(&self, symbol: &str) -> bool {
        self.reserved.contains(symbol)
    }

    pub fn get_balance(&self, state: &StateStore, symbol: &str, holder: &str) -> Quantity {
        state.balance(symbol, holder)
    }

    pub fn get_asset<'a>(&self, state: &'a StateStore, symbol: &str) -> Option<&'a AssetRecord> {
        state.get(&AssetKey(symbol.to_string()))
    }

    fn issue(
        &self,
        state: &mut StateStore,
        issuer: &str,
        symbol: &str,
        supply: Quantity,
    ) -> HandlerResult {
        if !self.gate.is_verified(state, issuer) {
            return Err(TxRejection::Compliance(format!(
                "issuer {} is not verified",
                abbreviate(issuer)
            ))
            .into());
        }

        let asset_key = AssetKey(symbol.to_string());
        if state.contains(&asset_key) {
            return Err(TxRejection::Conflict(format!("asset {symbol} already exists")).into());
        }
        if self.is_reserved(symbol) {
            return Err(
                TxRejection::Conflict(format!("asset {symbol} is a protocol reward symbol")).into(),
            );
        }

        state.put(
            asset_key,
            AssetRecord {
                symbol: symbol.to_string(),
                total_supply: supply,
                issuer: issuer.to_string(),
            },
        );
        state.put(BalanceKey::new(symbol, issuer), supply);

        info!(
            symbol,
            supply = %supply,
            issuer = abbreviate(issuer),
            "Issued asset"
        );
        Ok(())
    }

    fn transfer(
        &self,
        state: &mut StateStore,
        sender: &str,
        symbol: &str,
        to: &PublicKey,
        amount: Quantity,
    ) -> HandlerResult {
        let available = state.balance(symbol, sender);
        if available < amount {
            return Err(TxRejection::InsufficientBalance {
                required: amount,
                available,
            }
            .into());
        }

        if !self.gate.is_verified(state, to) {
            return Err(TxRejection::Compliance(format!(
                "receiver {} is not verified",
                abbreviate(to)
            ))
            .into());
        }

        if sender != to.as_str() {
            let sender_balance = debit(state, symbol, sender, amount)?;
            let receiver_balance = credit(state, symbol, to, amount)?;
            state.put(BalanceKey::new(symbol, sender), sender_balance);
            state.put(BalanceKey::new(symbol, to.as_str()), receiver_balance);
        }

        info!(
            symbol,
            amount = %amount,
            from = abbreviate(sender),
            to = abbreviate(to),
            "Transferred asset"
        );
        Ok(())
    }
}

impl TransactionHandler for AssetModule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn kinds(&self) -> &'static [TxKind] {
        KINDS
    }

    fn apply(&self, tx: &Transaction, state: &mut StateStore) -> HandlerResult {
        match tx.payload() {
            TxPayload::AssetIssuance { symbol, supply } => {
                self.issue(state, tx.sender(), symbol, *supply)
            }
            TxPayload::AssetTransfer { symbol, to, amount } => {
                self.transfer(state, tx.sender(), symbol, to, *amount)
            }
            _ => Ok(()),
        }
    }
}
