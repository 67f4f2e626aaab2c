//! # Namespaced Keys
//!
//! [`StateKey`] and [`StateValue`] are closed enums over the four namespaces.
//! Callers never build them directly: they use a typed key
//! ([`IdentityKey`], [`AssetKey`], [`BalanceKey`], [`DeviceKey`]) whose
//! associated `Value` fixes the record type at compile time.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use shared_types::{
    AssetRecord, DeviceId, DeviceRecord, IdentityRecord, PublicKey, Quantity, Symbol,
};
use std::fmt;

/// A key in the store. Ordering is structural, not by rendered string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StateKey {
    Identity(PublicKey),
    Asset(Symbol),
    Balance { symbol: Symbol, holder: PublicKey },
    Device(DeviceId),
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKey::Identity(key) => write!(f, "identity:{key}"),
            StateKey::Asset(symbol) => write!(f, "asset:{symbol}"),
            StateKey::Balance { symbol, holder } => write!(f, "balance:{symbol}:{holder}"),
            StateKey::Device(id) => write!(f, "device:{id}"),
        }
    }
}

/// A value in the store.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateValue {
    Identity(IdentityRecord),
    Asset(AssetRecord),
    Balance(#[serde_as(as = "DisplayFromStr")] Quantity),
    Device(DeviceRecord),
}

mod sealed {
    pub trait Sealed {}
}

/// A key bound to exactly one record type.
pub trait TypedKey: sealed::Sealed {
    type Value: Clone;

    fn state_key(&self) -> StateKey;
    fn wrap(value: Self::Value) -> StateValue;
    fn unwrap(value: &StateValue) -> Option<&Self::Value>;
}

macro_rules! typed_key {
    ($name:ident, $value:ty, $variant:ident) => {
        impl sealed::Sealed for $name {}

        impl TypedKey for $name {
            type Value = $value;

            fn state_key(&self) -> StateKey {
                StateKey::from(self.clone())
            }

            fn wrap(value: Self::Value) -> StateValue {
                StateValue::$variant(value)
            }

            fn unwrap(value: &StateValue) -> Option<&Self::Value> {
                match value {
                    StateValue::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }
    };
}

/// `identity:<pubkey>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey(pub PublicKey);

/// `asset:<symbol>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetKey(pub Symbol);

/// `balance:<symbol>:<holder>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BalanceKey {
    pub symbol: Symbol,
    pub holder: PublicKey,
}

impl BalanceKey {
    pub fn new(symbol: impl Into<Symbol>, holder: impl Into<PublicKey>) -> Self {
        Self {
            symbol: symbol.into(),
            holder: holder.into(),
        }
    }
}

/// `device:<deviceId>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceKey(pub DeviceId);

impl From<IdentityKey> for StateKey {
    fn from(key: IdentityKey) -> Self {
        StateKey::Identity(key.0)
    }
}

impl From<AssetKey> for StateKey {
    fn from(key: AssetKey) -> Self {
        StateKey::Asset(key.0)
    }
}

impl From<BalanceKey> for StateKey {
    fn from(key: BalanceKey) -> Self {
        StateKey::Balance {
            symbol: key.symbol,
            holder: key.holder,
        }
    }
}

impl From<DeviceKey> for StateKey {
    fn from(key: DeviceKey) -> Self {
        StateKey::Device(key.0)
    }
}

typed_key!(IdentityKey, IdentityRecord, Identity);
typed_key!(AssetKey, AssetRecord, Asset);
typed_key!(BalanceKey, Quantity, Balance);
typed_key!(DeviceKey, DeviceRecord, Device);
