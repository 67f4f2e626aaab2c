//! # rwa-04-devices
//!
//! Device (DePIN) module for RWA-Chain.
//!
//! ## Role in System
//!
//! - **Registration**: A Verified owner registers a uniquely identified
//!   device, which starts Active with its heartbeat at the registration time
//! - **Heartbeat**: Refreshes the device's last-heartbeat timestamp and mints
//!   a fixed reward to the registered owner
//!
//! ## Outbound Dependencies
//!
//! | Port | Purpose |
//! |------|---------|
//! | `ComplianceGate` | Owner must be Verified at registration |
//! | [`RewardMint`] | Protocol reward emission on heartbeat |
//!
//! The owner's compliance is NOT re-checked at heartbeat time: a device
//! whose owner was revoked after registration keeps earning rewards.

pub mod adapters;
pub mod ports;
pub mod service;

pub use ports::{RewardMint, RewardPolicy};
pub use service::DeviceModule;
