//! # Shared Types Crate
//!
//! This crate contains the domain entities exchanged between the ledger's
//! modules: transactions and their payloads, the records held in the state
//! store, content digests and the clock port.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-module types are defined here.
//! - **Content Addressing**: Transaction and block identifiers are digests of
//!   their canonical encoding, never assigned.
//! - **Closed Payloads**: Every transaction kind is a variant of
//!   [`TxPayload`]; there is no untyped payload data.

pub mod clock;
pub mod entities;
pub mod errors;
pub mod hashing;
pub mod records;

pub use clock::{Clock, ManualClock, SystemClock};
pub use entities::*;
pub use errors::*;
pub use hashing::{digest, CanonicalEncode, CanonicalEncoder, Digest};
pub use records::*;
