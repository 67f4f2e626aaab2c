//! # rwa-02-identity
//!
//! Identity module for RWA-Chain.
//!
//! ## Role in System
//!
//! - **Compliance Gate**: Every other module asks this one whether a
//!   participant holds a Verified identity
//! - **Claim Handler**: Applies `IDENTITY_CLAIM` transactions issued by an
//!   authority
//!
//! ## Authority Model
//!
//! Authorities are granted out-of-band through an [`AuthorityRegistry`]
//! handed to [`IdentityModule::new`]. No on-chain transaction changes the
//! authority set. Each ledger instance owns its own registry.
//!
//! | Action | Effect |
//! |--------|--------|
//! | `VERIFY` | Upsert record with status Verified |
//! | `REVOKE` | Set status Revoked if a record exists, otherwise no-op |

pub mod adapters;
pub mod domain;
pub mod service;

pub use adapters::IdentityGate;
pub use domain::*;
pub use service::IdentityModule;
