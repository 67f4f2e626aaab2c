//! Identity module service.

use crate::adapters::IdentityGate;
use crate::domain::{derive_did, AuthorityRegistry, DEFAULT_DID_PREFIX};
use rwa_01_state::{ComplianceGate, HandlerResult, IdentityKey, StateStore, TransactionHandler};
use shared_types::{
    abbreviate, Attributes, ClaimAction, IdentityRecord, IdentityStatus, PublicKey, Transaction,
    TxKind, TxPayload, TxRejection,
};
use tracing::{debug, info};

const KINDS: &[TxKind] = &[TxKind::IdentityClaim];

pub struct IdentityModule {
    authorities: AuthorityRegistry,
    did_prefix: String,
}

impl IdentityModule {
    pub const NAME: &'static str = "identity";

    pub fn new(authorities: AuthorityRegistry) -> Self {
        Self {
            authorities,
            did_prefix: DEFAULT_DID_PREFIX.to_string(),
        }
    }

    pub fn with_did_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.did_prefix = prefix.into();
        self
    }

    /// Out-of-band privilege grant.
    pub fn add_authority(&self, key: impl Into<PublicKey>) -> bool {
        self.authorities.add(key)
    }

    pub fn is_authority(&self, key: &str) -> bool {
        self.authorities.contains(key)
    }

    pub fn get_identity<'a>(&self, state: &'a StateStore, key: &str) -> Option<&'a IdentityRecord> {
        state.get(&IdentityKey(key.to_string()))
    }

    pub fn has_valid_identity(&self, state: &StateStore, key: &str) -> bool {
        IdentityGate.is_verified(state, key)
    }

    /// Gate handed to modules that depend on identity.
    pub fn gate(&self) -> IdentityGate {
        IdentityGate
    }

    fn verify(
        &self,
        state: &mut StateStore,
        target_user: &str,
        did: Option<&str>,
        attributes: &Attributes,
    ) {
        let did = match did {
            Some(did) => did.to_string(),
            None => derive_did(&self.did_prefix, target_user),
        };
        let record = IdentityRecord {
            public_key: target_user.to_string(),
            status: IdentityStatus::Verified,
            did,
            attributes: attributes.clone(),
        };
        state.put(IdentityKey(target_user.to_string()), record);
        info!(target_user = abbreviate(target_user), "Verified identity");
    }

    fn revoke(&self, state: &mut StateStore, target_user: &str) {
        let key = IdentityKey(target_user.to_string());
        // A missing record stays missing: revoke never creates one.
        let Some(existing) = state.get(&key) else {
            debug!(
                target_user = abbreviate(target_user),
                "Revoke for unknown identity ignored"
            );
            return;
        };
        let mut record = existing.clone();
        record.status = IdentityStatus::Revoked;
        state.put(key, record);
        info!(target_user = abbreviate(target_user), "Revoked identity");
    }
}

impl TransactionHandler for IdentityModule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn kinds(&self) -> &'static [TxKind] {
        KINDS
    }

    fn apply(&self, tx: &Transaction, state: &mut StateStore) -> HandlerResult {
        let TxPayload::IdentityClaim {
            target_user,
            action,
            did,
            attributes,
        } = tx.payload()
        else {
            return Ok(());
        };

        if !self.authorities.contains(tx.sender()) {
            return Err(TxRejection::Authorization(format!(
                "{} is not an identity authority",
                abbreviate(tx.sender())
            ))
            .into());
        }

        match action {
            ClaimAction::Verify => self.verify(state, target_user, did.as_deref(), attributes),
            ClaimAction::Revoke => self.revoke(state, target_user),
        }
        Ok(())
    }
}
