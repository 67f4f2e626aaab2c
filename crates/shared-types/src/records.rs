//! # State Records
//!
//! The record types held by the state store, one per namespace:
//!
//! | Namespace | Record |
//! |-----------|--------|
//! | `identity:<pubkey>` | [`IdentityRecord`] |
//! | `asset:<symbol>` | [`AssetRecord`] |
//! | `balance:<symbol>:<holder>` | [`Quantity`] |
//! | `device:<deviceId>` | [`DeviceRecord`] |

use crate::entities::{Attributes, DeviceId, PublicKey, Quantity, Symbol, Timestamp};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

/// Verification status of a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentityStatus {
    #[default]
    None,
    Pending,
    Verified,
    Revoked,
}

/// Identity of a participant. Written only by an authority's claim and
/// never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub public_key: PublicKey,
    pub status: IdentityStatus,
    /// Decentralized identifier.
    pub did: String,
    pub attributes: Attributes,
}

impl IdentityRecord {
    pub fn is_verified(&self) -> bool {
        self.status == IdentityStatus::Verified
    }
}

/// Asset definition. Immutable after issuance.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub symbol: Symbol,
    /// Supply fixed at issuance.
    #[serde_as(as = "DisplayFromStr")]
    pub total_supply: Quantity,
    pub issuer: PublicKey,
}

/// Liveness status of a device.
///
/// Nothing transitions a device to `Inactive` yet; it is reserved for a
/// heartbeat timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceStatus {
    Active,
    Inactive,
}

/// A registered infrastructure device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub device_id: DeviceId,
    pub owner: PublicKey,
    pub device_type: String,
    pub status: DeviceStatus,
    pub last_heartbeat: Timestamp,
}
