//! # rwa-03-assets
//!
//! Asset module for RWA-Chain.
//!
//! ## Role in System
//!
//! - **Issuance**: A Verified participant creates a symbol with a fixed
//!   supply, credited in full to the issuer
//! - **Transfer**: Balance reassignment to a Verified receiver; total supply
//!   is conserved
//! - **Protocol Minting**: [`MintCapability`] credits a reserved reward symbol
//!   without issuance or compliance checks
//!
//! ## Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | Sum of balances ≤ supply (issued symbols) | transfers only move balance |
//! | No partial transfer | every check runs before the first write |
//! | One issuance per symbol | `Conflict` on an existing `asset:<symbol>` |
//! | Reward symbols are mint-only | `Conflict` on issuance of a reserved symbol |

pub mod domain;
pub mod service;

pub use domain::*;
pub use service::AssetModule;
