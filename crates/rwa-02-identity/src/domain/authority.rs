//! # Authority Registry
//!
//! The set of identities allowed to issue identity claims. A registry is a
//! cheap handle: clones share the same set, so the ledger can keep one to
//! bootstrap authorities while the identity module reads another.

use parking_lot::RwLock;
use shared_types::PublicKey;
use std::collections::BTreeSet;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct AuthorityRegistry {
    authorities: Arc<RwLock<BTreeSet<PublicKey>>>,
}

impl AuthorityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the key was not already an authority.
    pub fn add(&self, key: impl Into<PublicKey>) -> bool {
        self.authorities.write().insert(key.into())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.authorities.read().contains(key)
    }

    pub fn len(&self) -> usize {
        self.authorities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.authorities.read().is_empty()
    }
}

impl<K: Into<PublicKey>> FromIterator<K> for AuthorityRegistry {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let set: BTreeSet<PublicKey> = iter.into_iter().map(Into::into).collect();
        Self {
            authorities: Arc::new(RwLock::new(set)),
        }
    }
}
