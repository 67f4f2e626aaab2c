use crate::domain::StateStore;

/// Identity check used by modules that require a Verified counterparty.
pub trait ComplianceGate: Send + Sync {
    /// True iff `key` holds a Verified identity in `state`.
    fn is_verified(&self, state: &StateStore, key: &str) -> bool;
}
