//! # rwa-01-state
//!
//! State subsystem for RWA-Chain.
//!
//! ## Role in System
//!
//! - **Single Source of Truth**: Authoritative current state of identities,
//!   assets, balances and devices
//! - **Handler Port**: Defines [`TransactionHandler`], the interface every
//!   domain module implements and the router dispatches to
//! - **Compliance Port**: Defines [`ComplianceGate`], the identity check other
//!   modules depend on without depending on the identity crate
//!
//! ## Namespaces
//!
//! ```text
//! identity:<pubkey>            → IdentityRecord
//! asset:<symbol>               → AssetRecord
//! balance:<symbol>:<holder>    → Quantity
//! device:<deviceId>            → DeviceRecord
//! ```
//!
//! Each namespace has its own typed key, so a record can only be stored
//! under and read from the namespace it belongs to.
//!
//! ## State Digest
//!
//! [`StateStore::digest`] hashes the sorted concatenation of the rendered
//! keys. Values are NOT hashed, so two stores with the same key set and
//! different balances share a digest. It is a stand-in for a real state
//! commitment and binds nothing cryptographically.

pub mod domain;
pub mod ports;

pub use domain::*;
pub use ports::*;
