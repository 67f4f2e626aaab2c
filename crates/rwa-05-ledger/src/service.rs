//! Ledger service: wiring, submission and block production.

use crate::config::LedgerConfig;
use crate::domain::{Block, Chain, Outcome, PendingPool, Router};
use crate::error::Result;
use crate::metrics::{Metrics, MetricsSnapshot};
use parking_lot::RwLock;
use rwa_01_state::{ComplianceGate, StateError, StateStore};
use rwa_02_identity::{AuthorityRegistry, IdentityModule};
use rwa_03_assets::AssetModule;
use rwa_04_devices::{DeviceModule, RewardPolicy};
use shared_types::{
    AssetRecord, Clock, DeviceRecord, Digest, IdentityRecord, PublicKey, Quantity, SystemClock,
    Transaction, TxKind, TxPayload, TxRejection,
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// A transaction a module refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedTx {
    pub tx_id: Digest,
    pub kind: TxKind,
    pub handler: &'static str,
    pub reason: TxRejection,
}

/// A transaction dropped because a module hit a store fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultedTx {
    pub tx_id: Digest,
    pub kind: TxKind,
    pub handler: &'static str,
    pub fault: StateError,
}

/// Result of one `produce_block` call.
#[derive(Debug, Clone)]
pub struct ProductionReport {
    /// The appended block.
    pub block: Block,
    pub rejected: Vec<RejectedTx>,
    pub faulted: Vec<FaultedTx>,
}

impl ProductionReport {
    pub fn included(&self) -> usize {
        self.block.transactions().len()
    }

    pub fn was_rejected(&self, tx_id: &Digest) -> bool {
        self.rejected.iter().any(|r| &r.tx_id == tx_id)
    }
}

/// Everything mutated by block production. Guarded as a single resource.
struct LedgerState {
    chain: Chain,
    pool: PendingPool,
    state: StateStore,
}

pub struct Ledger {
    inner: RwLock<LedgerState>,
    router: Router,
    identity: Arc<IdentityModule>,
    assets: Arc<AssetModule>,
    devices: Arc<DeviceModule>,
    clock: Arc<dyn Clock>,
    metrics: Metrics,
    config: LedgerConfig,
}

impl Ledger {
    /// Ledger on the wall clock.
    pub fn new(config: LedgerConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: LedgerConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;

        let authorities: AuthorityRegistry = config.authorities.iter().cloned().collect();
        let identity =
            Arc::new(IdentityModule::new(authorities).with_did_prefix(config.did_prefix.clone()));
        let gate: Arc<dyn ComplianceGate> = Arc::new(identity.gate());

        let mut assets = AssetModule::new(Arc::clone(&gate));
        let minter = assets.mint_capability(config.reward.symbol.clone());
        let assets = Arc::new(assets);

        let devices = Arc::new(DeviceModule::new(
            gate,
            Arc::new(minter),
            RewardPolicy {
                amount: config.reward.amount,
            },
        ));

        let router = Router::new()
            .with(identity.clone())
            .with(assets.clone())
            .with(devices.clone());

        let genesis = Block::genesis(clock.now(), config.genesis_generator.clone());
        info!(
            digest = %genesis.digest().short(),
            authorities = config.authorities.len(),
            reward_symbol = %config.reward.symbol,
            "Ledger initialised"
        );

        Ok(Self {
            inner: RwLock::new(LedgerState {
                chain: Chain::new(genesis),
                pool: PendingPool::with_capacity(config.max_pending),
                state: StateStore::new(),
            }),
            router,
            identity,
            assets,
            devices,
            clock,
            metrics: Metrics::new(),
            config,
        })
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Build a transaction stamped with the ledger clock.
    pub fn transaction(&self, sender: impl Into<PublicKey>, payload: TxPayload) -> Transaction {
        Transaction::new(sender, payload, self.clock.now())
    }

    // =========================================================================
    // WRITES
    // =========================================================================

    /// Queue `tx` for the next block. Returns its id.
    pub fn submit(&self, tx: Transaction) -> Result<Digest> {
        let tx_id = *tx.id();
        let kind = tx.kind();
        self.inner.write().pool.submit(tx)?;
        self.metrics.record_submitted();
        debug!(tx_id = %tx_id.short(), %kind, "Transaction submitted");
        Ok(tx_id)
    }

    /// Out-of-band authority grant. Returns false if already present.
    pub fn add_authority(&self, key: impl Into<PublicKey>) -> bool {
        let _guard = self.inner.write();
        let key = key.into();
        let added = self.identity.add_authority(key.clone());
        if added {
            info!(authority = shared_types::abbreviate(&key), "Authority added");
        }
        added
    }

    /// Drain the pending pool, apply each transaction in submission order and
    /// append a block holding the accepted ones.
    ///
    /// `generator` is recorded as given: nothing checks it is an eligible
    /// producer.
    pub fn produce_block(&self, generator: impl Into<PublicKey>) -> ProductionReport {
        let generator = generator.into();
        let mut guard = self.inner.write();
        let LedgerState { chain, pool, state } = &mut *guard;

        let pending = pool.drain();
        let mut included = Vec::with_capacity(pending.len());
        let mut rejected = Vec::new();
        let mut faulted = Vec::new();

        for tx in pending {
            match self.router.route(&tx, state) {
                Outcome::Accepted => included.push(tx),
                Outcome::Rejected { handler, reason } => {
                    warn!(
                        tx_id = %tx.id().short(),
                        kind = %tx.kind(),
                        handler,
                        reason = %reason,
                        "Transaction rejected"
                    );
                    rejected.push(RejectedTx {
                        tx_id: *tx.id(),
                        kind: tx.kind(),
                        handler,
                        reason,
                    });
                }
                Outcome::Faulted { handler, fault } => {
                    error!(
                        tx_id = %tx.id().short(),
                        kind = %tx.kind(),
                        handler,
                        fault = %fault,
                        "Transaction dropped on state fault"
                    );
                    faulted.push(FaultedTx {
                        tx_id: *tx.id(),
                        kind: tx.kind(),
                        handler,
                        fault,
                    });
                }
            }
        }

        let block = chain.seal(self.clock.now(), included, generator).clone();

        self.metrics.record_block_produced(
            block.transactions().len(),
            rejected.len(),
            faulted.len(),
        );
        info!(
            height = block.index(),
            digest = %block.digest().short(),
            included = block.transactions().len(),
            rejected = rejected.len(),
            faulted = faulted.len(),
            generator = shared_types::abbreviate(block.generator()),
            "Block produced"
        );

        ProductionReport {
            block,
            rejected,
            faulted,
        }
    }

    // =========================================================================
    // READS
    // =========================================================================

    pub fn get_balance(&self, symbol: &str, holder: &str) -> Quantity {
        self.assets
            .get_balance(&self.inner.read().state, symbol, holder)
    }

    pub fn has_valid_identity(&self, key: &str) -> bool {
        self.identity
            .has_valid_identity(&self.inner.read().state, key)
    }

    pub fn is_authority(&self, key: &str) -> bool {
        self.identity.is_authority(key)
    }

    pub fn get_identity(&self, key: &str) -> Option<IdentityRecord> {
        self.identity
            .get_identity(&self.inner.read().state, key)
            .cloned()
    }

    pub fn get_asset(&self, symbol: &str) -> Option<AssetRecord> {
        self.assets
            .get_asset(&self.inner.read().state, symbol)
            .cloned()
    }

    pub fn get_device(&self, device_id: &str) -> Option<DeviceRecord> {
        self.devices
            .get_device(&self.inner.read().state, device_id)
            .cloned()
    }

    pub fn reward_symbol(&self) -> &str {
        self.devices.reward_symbol()
    }

    pub fn state_digest(&self) -> Digest {
        self.inner.read().state.digest()
    }

    pub fn latest_block(&self) -> Block {
        self.inner.read().chain.tip().clone()
    }

    pub fn block(&self, index: u64) -> Option<Block> {
        self.inner.read().chain.get(index).cloned()
    }

    /// Index of the latest block (0 right after genesis).
    pub fn height(&self) -> u64 {
        self.inner.read().chain.height()
    }

    pub fn pending_count(&self) -> usize {
        self.inner.read().pool.len()
    }

    /// Re-derive every digest on the chain and check every link.
    pub fn verify_chain(&self) -> Result<()> {
        self.inner.read().chain.verify()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
