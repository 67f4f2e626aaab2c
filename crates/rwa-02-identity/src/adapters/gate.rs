use rwa_01_state::{ComplianceGate, IdentityKey, StateStore};

/// [`ComplianceGate`] backed by identity records in the state store.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityGate;

impl ComplianceGate for IdentityGate {
    fn is_verified(&self, state: &StateStore, key: &str) -> bool {
        state
            .get(&IdentityKey(key.to_string()))
            .is_some_and(|record| record.is_verified())
    }
}
