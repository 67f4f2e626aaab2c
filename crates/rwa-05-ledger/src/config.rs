//! Configuration types for the ledger

use crate::error::{LedgerError, Result};
use serde::Deserialize;
use shared_types::{PublicKey, Quantity, Symbol};
use std::env;
use std::path::Path;

pub const DEFAULT_REWARD_SYMBOL: &str = "INFRA";
pub const DEFAULT_REWARD_AMOUNT: Quantity = 10;
pub const DEFAULT_DID_PREFIX: &str = "did:rwa:";
pub const DEFAULT_GENESIS_GENERATOR: &str = "GENESIS";

/// Runtime configuration for a ledger instance
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LedgerConfig {
    /// Bootstrap identity authorities
    pub authorities: Vec<PublicKey>,

    /// Heartbeat reward
    pub reward: RewardConfig,

    /// Prefix for DIDs derived from a target key
    pub did_prefix: String,

    /// Generator label of the genesis block
    pub genesis_generator: String,

    /// Pending pool cap (None = unbounded)
    pub max_pending: Option<usize>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            authorities: Vec::new(),
            reward: RewardConfig::default(),
            did_prefix: DEFAULT_DID_PREFIX.to_string(),
            genesis_generator: DEFAULT_GENESIS_GENERATOR.to_string(),
            max_pending: None,
        }
    }
}

/// Protocol reward minted on every device heartbeat
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RewardConfig {
    pub symbol: Symbol,
    pub amount: Quantity,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            symbol: DEFAULT_REWARD_SYMBOL.to_string(),
            amount: DEFAULT_REWARD_AMOUNT,
        }
    }
}

impl LedgerConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `RWA_AUTHORITIES`: Comma-separated authority keys (default: none)
    /// - `RWA_REWARD_SYMBOL`: Reward symbol (default: INFRA)
    /// - `RWA_REWARD_AMOUNT`: Reward per heartbeat (default: 10)
    /// - `RWA_DID_PREFIX`: DID prefix (default: did:rwa:)
    /// - `RWA_MAX_PENDING`: Pending pool cap (default: unbounded)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("RWA_AUTHORITIES") {
            config.authorities = raw
                .split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(String::from)
                .collect();
        }
        if let Some(symbol) = lookup("RWA_REWARD_SYMBOL") {
            config.reward.symbol = symbol;
        }
        if let Some(raw) = lookup("RWA_REWARD_AMOUNT") {
            config.reward.amount = raw.trim().parse().map_err(|_| {
                LedgerError::InvalidConfig(format!("RWA_REWARD_AMOUNT is not a quantity: {raw}"))
            })?;
        }
        if let Some(prefix) = lookup("RWA_DID_PREFIX") {
            config.did_prefix = prefix;
        }
        if let Some(raw) = lookup("RWA_MAX_PENDING") {
            let cap = raw.trim().parse().map_err(|_| {
                LedgerError::InvalidConfig(format!("RWA_MAX_PENDING is not a count: {raw}"))
            })?;
            config.max_pending = Some(cap);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.reward.symbol.trim().is_empty() {
            return Err(LedgerError::InvalidConfig(
                "reward symbol must not be empty".into(),
            ));
        }
        if self.reward.amount == 0 {
            return Err(LedgerError::InvalidConfig(
                "reward amount must be positive".into(),
            ));
        }
        if self.did_prefix.is_empty() {
            return Err(LedgerError::InvalidConfig(
                "DID prefix must not be empty".into(),
            ));
        }
        if self.max_pending == Some(0) {
            return Err(LedgerError::InvalidConfig(
                "max_pending must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
