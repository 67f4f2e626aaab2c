//! # rwa-05-ledger
//!
//! Ledger service for RWA-Chain.
//!
//! ## Role in System
//!
//! - **Pending Pool**: Accepts submitted transactions without validation
//! - **Router**: Dispatches each transaction to the modules owning its kind
//!   (identity, then asset, then device)
//! - **Block Assembly**: Drains the pool, keeps the accepted transactions,
//!   seals them in a content-addressed block and appends it to the chain
//!
//! ## Concurrency
//!
//! Chain, pool and state live behind one `RwLock`. Submission and block
//! production take the write lock, so block production is single-writer and
//! runs to completion over the whole drained pool. Queries share the read
//! lock.
//!
//! ## Known Simplifications
//!
//! | Aspect | Behaviour |
//! |--------|-----------|
//! | Generator | Supplied by the caller, never authenticated |
//! | Signatures | Carried on transactions, never verified |
//! | State digest | Covers key presence only, not values |
//! | Rejections | Logged and counted, never recorded on-chain |

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod service;

pub use config::{LedgerConfig, RewardConfig};
pub use domain::{Block, Chain, Outcome, PendingPool, Router};
pub use error::{LedgerError, Result};
pub use metrics::{Metrics, MetricsSnapshot};
pub use service::{FaultedTx, Ledger, ProductionReport, RejectedTx};
