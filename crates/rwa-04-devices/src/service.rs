//! Device module service.

use crate::ports::{RewardMint, RewardPolicy};
use rwa_01_state::{ComplianceGate, DeviceKey, HandlerResult, StateStore, TransactionHandler};
use shared_types::{
    abbreviate, DeviceRecord, DeviceStatus, Timestamp, Transaction, TxKind, TxPayload,
    TxRejection,
};
use std::sync::Arc;
use tracing::info;

const KINDS: &[TxKind] = &[TxKind::DeviceRegister, TxKind::DeviceHeartbeat];

pub struct DeviceModule {
    gate: Arc<dyn ComplianceGate>,
    minter: Arc<dyn RewardMint>,
    policy: RewardPolicy,
}

impl DeviceModule {
    pub const NAME: &'static str = "device";

    pub fn new(
        gate: Arc<dyn ComplianceGate>,
        minter: Arc<dyn RewardMint>,
        policy: RewardPolicy,
    ) -> Self {
        Self {
            gate,
            minter,
            policy,
        }
    }

    pub fn reward_symbol(&self) -> &str {
        self.minter.symbol()
    }

    pub fn get_device<'a>(
        &self,
        state: &'a StateStore,
        device_id: &str,
    ) -> Option<&'a DeviceRecord> {
        state.get(&DeviceKey(device_id.to_string()))
    }

    fn register(
        &self,
        state: &mut StateStore,
        owner: &str,
        device_id: &str,
        device_type: &str,
        timestamp: Timestamp,
    ) -> HandlerResult {
        if !self.gate.is_verified(state, owner) {
            return Err(TxRejection::Compliance(format!(
                "device owner {} is not verified",
                abbreviate(owner)
            ))
            .into());
        }

        let key = DeviceKey(device_id.to_string());
        if state.contains(&key) {
            return Err(
                TxRejection::Conflict(format!("device {device_id} already registered")).into(),
            );
        }

        state.put(
            key,
            DeviceRecord {
                device_id: device_id.to_string(),
                owner: owner.to_string(),
                device_type: device_type.to_string(),
                status: DeviceStatus::Active,
                last_heartbeat: timestamp,
            },
        );
        info!(
            device_id,
            device_type,
            owner = abbreviate(owner),
            "Registered device"
        );
        Ok(())
    }

    fn heartbeat(
        &self,
        state: &mut StateStore,
        device_id: &str,
        timestamp: Timestamp,
    ) -> HandlerResult {
        let key = DeviceKey(device_id.to_string());
        let Some(existing) = state.get(&key) else {
            let reason = format!("device {device_id} is not registered");
            return Err(TxRejection::NotFound(reason).into());
        };
        let mut record = existing.clone();

        // Mint leaves the store untouched when it fails, so it goes first.
        let balance = self.minter.mint(state, &record.owner, self.policy.amount)?;

        record.last_heartbeat = timestamp;
        info!(
            device_id,
            owner = abbreviate(&record.owner),
            reward = %self.policy.amount,
            symbol = self.minter.symbol(),
            balance = %balance,
            "Device heartbeat rewarded"
        );
        state.put(key, record);
        Ok(())
    }
}

impl TransactionHandler for DeviceModule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn kinds(&self) -> &'static [TxKind] {
        KINDS
    }

    fn apply(&self, tx: &Transaction, state: &mut StateStore) -> HandlerResult {
        match tx.payload() {
            TxPayload::DeviceRegister {
                device_id,
                device_type,
            } => self.register(state, tx.sender(), device_id, device_type, tx.timestamp()),
            TxPayload::DeviceHeartbeat { device_id, .. } => {
                self.heartbeat(state, device_id, tx.timestamp())
            }
            _ => Ok(()),
        }
    }
}
