//! # State Store
//!
//! Key-value substrate shared by every module. There is no delete and no
//! transactional isolation: a `put` is visible to every later `get`, within
//! the same handler call or a later one. Per-transaction atomicity is the
//! handlers' job (all checks before any write).

use super::keys::{BalanceKey, StateKey, StateValue, TypedKey};
use shared_types::{digest, Digest, Quantity};
use std::collections::BTreeMap;

/// In-memory state store.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    entries: BTreeMap<StateKey, StateValue>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Typed read. `None` when the key is absent.
    pub fn get<K: TypedKey>(&self, key: &K) -> Option<&K::Value> {
        self.entries.get(&key.state_key()).and_then(K::unwrap)
    }

    /// Typed write. Overwrites any previous value.
    pub fn put<K: TypedKey>(&mut self, key: K, value: K::Value) {
        self.entries.insert(key.state_key(), K::wrap(value));
    }

    pub fn contains<K: TypedKey>(&self, key: &K) -> bool {
        self.entries.contains_key(&key.state_key())
    }

    /// Balance for `(symbol, holder)`, defaulting to zero.
    pub fn balance(&self, symbol: &str, holder: &str) -> Quantity {
        self.get(&BalanceKey::new(symbol, holder))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &StateKey> {
        self.entries.keys()
    }

    /// Rendered keys, sorted as strings.
    pub fn rendered_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.keys().map(ToString::to_string).collect();
        keys.sort();
        keys
    }

    /// Digest of the sorted concatenation of rendered keys.
    ///
    /// Only key presence is covered. Changing a value under an existing key
    /// leaves the digest unchanged.
    pub fn digest(&self) -> Digest {
        digest(self.rendered_keys().concat().as_bytes())
    }
}
