//! # Core Domain Entities
//!
//! Transactions and their payloads.
//!
//! A transaction is content-addressed: its id is the digest of
//! `(sender, payload, timestamp)` and is fixed at construction. The optional
//! signature is a placeholder that is never verified and does not
//! participate in the id.

use crate::errors::TxIdMismatch;
use crate::hashing::{CanonicalEncode, CanonicalEncoder, Digest};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use std::collections::BTreeMap;
use std::fmt;

/// Public-key-shaped identity token. The ledger never interprets it.
pub type PublicKey = String;

/// Asset ticker symbol, unique across the store.
pub type Symbol = String;

/// Physical device identifier, unique across the store.
pub type DeviceId = String;

/// Milliseconds since the Unix epoch.
pub type Timestamp = u64;

/// Asset quantity in base units. Serialized as a decimal string.
pub type Quantity = u128;

/// Free-form string attributes attached to identities and heartbeats.
pub type Attributes = BTreeMap<String, String>;

/// First 8 characters of a key, for log lines.
pub fn abbreviate(key: &str) -> &str {
    key.char_indices()
        .nth(8)
        .map(|(end, _)| &key[..end])
        .unwrap_or(key)
}

/// Domain tag for transaction id encoding.
const TX_DOMAIN: &str = "rwa.tx.v1";

/// Transaction kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxKind {
    IdentityClaim,
    AssetIssuance,
    AssetTransfer,
    ValidatorVote,
    DeviceRegister,
    DeviceHeartbeat,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::IdentityClaim => "IDENTITY_CLAIM",
            TxKind::AssetIssuance => "ASSET_ISSUANCE",
            TxKind::AssetTransfer => "ASSET_TRANSFER",
            TxKind::ValidatorVote => "VALIDATOR_VOTE",
            TxKind::DeviceRegister => "DEVICE_REGISTER",
            TxKind::DeviceHeartbeat => "DEVICE_HEARTBEAT",
        }
    }

    fn tag(&self) -> u8 {
        match self {
            TxKind::IdentityClaim => 1,
            TxKind::AssetIssuance => 2,
            TxKind::AssetTransfer => 3,
            TxKind::ValidatorVote => 4,
            TxKind::DeviceRegister => 5,
            TxKind::DeviceHeartbeat => 6,
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action carried by an identity claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimAction {
    Verify,
    Revoke,
}

/// Kind-specific transaction data.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TxPayload {
    /// Authority verifies or revokes `target_user`.
    IdentityClaim {
        target_user: PublicKey,
        action: ClaimAction,
        #[serde(default)]
        did: Option<String>,
        #[serde(default)]
        attributes: Attributes,
    },
    AssetIssuance {
        symbol: Symbol,
        #[serde_as(as = "DisplayFromStr")]
        supply: Quantity,
    },
    AssetTransfer {
        symbol: Symbol,
        to: PublicKey,
        #[serde_as(as = "DisplayFromStr")]
        amount: Quantity,
    },
    /// Opaque ballot. No module owns this kind.
    ValidatorVote {
        #[serde(default)]
        ballot: Vec<u8>,
    },
    DeviceRegister {
        device_id: DeviceId,
        device_type: String,
    },
    DeviceHeartbeat {
        device_id: DeviceId,
        #[serde(default)]
        uptime_metrics: Attributes,
    },
}

impl TxPayload {
    pub fn kind(&self) -> TxKind {
        match self {
            TxPayload::IdentityClaim { .. } => TxKind::IdentityClaim,
            TxPayload::AssetIssuance { .. } => TxKind::AssetIssuance,
            TxPayload::AssetTransfer { .. } => TxKind::AssetTransfer,
            TxPayload::ValidatorVote { .. } => TxKind::ValidatorVote,
            TxPayload::DeviceRegister { .. } => TxKind::DeviceRegister,
            TxPayload::DeviceHeartbeat { .. } => TxKind::DeviceHeartbeat,
        }
    }

    pub fn verify_identity(
        target_user: impl Into<PublicKey>,
        did: Option<String>,
        attributes: Attributes,
    ) -> Self {
        TxPayload::IdentityClaim {
            target_user: target_user.into(),
            action: ClaimAction::Verify,
            did,
            attributes,
        }
    }

    pub fn revoke_identity(target_user: impl Into<PublicKey>) -> Self {
        TxPayload::IdentityClaim {
            target_user: target_user.into(),
            action: ClaimAction::Revoke,
            did: None,
            attributes: Attributes::new(),
        }
    }

    pub fn issue_asset(symbol: impl Into<Symbol>, supply: Quantity) -> Self {
        TxPayload::AssetIssuance {
            symbol: symbol.into(),
            supply,
        }
    }

    pub fn transfer(symbol: impl Into<Symbol>, to: impl Into<PublicKey>, amount: Quantity) -> Self {
        TxPayload::AssetTransfer {
            symbol: symbol.into(),
            to: to.into(),
            amount,
        }
    }

    pub fn register_device(device_id: impl Into<DeviceId>, device_type: impl Into<String>) -> Self {
        TxPayload::DeviceRegister {
            device_id: device_id.into(),
            device_type: device_type.into(),
        }
    }

    pub fn heartbeat(device_id: impl Into<DeviceId>) -> Self {
        TxPayload::DeviceHeartbeat {
            device_id: device_id.into(),
            uptime_metrics: Attributes::new(),
        }
    }
}

fn encode_attributes(encoder: &mut CanonicalEncoder, attributes: &Attributes) {
    encoder.put_u64(attributes.len() as u64);
    for (key, value) in attributes {
        encoder.put_str(key).put_str(value);
    }
}

impl CanonicalEncode for TxPayload {
    fn encode(&self, encoder: &mut CanonicalEncoder) {
        encoder.put_u8(self.kind().tag());
        match self {
            TxPayload::IdentityClaim {
                target_user,
                action,
                did,
                attributes,
            } => {
                encoder
                    .put_str(target_user)
                    .put_u8(match action {
                        ClaimAction::Verify => 1,
                        ClaimAction::Revoke => 2,
                    })
                    .put_opt_str(did.as_deref());
                encode_attributes(encoder, attributes);
            }
            TxPayload::AssetIssuance { symbol, supply } => {
                encoder.put_str(symbol).put_u128(*supply);
            }
            TxPayload::AssetTransfer { symbol, to, amount } => {
                encoder.put_str(symbol).put_str(to).put_u128(*amount);
            }
            TxPayload::ValidatorVote { ballot } => {
                encoder.put_bytes(ballot);
            }
            TxPayload::DeviceRegister {
                device_id,
                device_type,
            } => {
                encoder.put_str(device_id).put_str(device_type);
            }
            TxPayload::DeviceHeartbeat {
                device_id,
                uptime_metrics,
            } => {
                encoder.put_str(device_id);
                encode_attributes(encoder, uptime_metrics);
            }
        }
    }
}

/// An immutable, content-addressed transaction.
///
/// Decoding re-derives the id and refuses a transaction whose stored id
/// does not match its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTransaction")]
pub struct Transaction {
    id: Digest,
    sender: PublicKey,
    payload: TxPayload,
    timestamp: Timestamp,
    signature: Option<String>,
}

/// Wire shape of [`Transaction`], before the id is checked.
#[derive(Deserialize)]
struct RawTransaction {
    id: Digest,
    sender: PublicKey,
    payload: TxPayload,
    timestamp: Timestamp,
    #[serde(default)]
    signature: Option<String>,
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = TxIdMismatch;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        let computed = Transaction::derive_id(&raw.sender, &raw.payload, raw.timestamp);
        if computed != raw.id {
            return Err(TxIdMismatch {
                stored: raw.id,
                computed,
            });
        }
        Ok(Self {
            id: raw.id,
            sender: raw.sender,
            payload: raw.payload,
            timestamp: raw.timestamp,
            signature: raw.signature,
        })
    }
}

impl Transaction {
    pub fn new(sender: impl Into<PublicKey>, payload: TxPayload, timestamp: Timestamp) -> Self {
        let sender = sender.into();
        let id = Self::derive_id(&sender, &payload, timestamp);
        Self {
            id,
            sender,
            payload,
            timestamp,
            signature: None,
        }
    }

    /// Attach an opaque signature. It is carried but never verified, and it
    /// is excluded from the id.
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    fn derive_id(sender: &str, payload: &TxPayload, timestamp: Timestamp) -> Digest {
        let mut encoder = CanonicalEncoder::new(TX_DOMAIN);
        encoder.put_str(sender).put(payload).put_u64(timestamp);
        encoder.finish()
    }

    pub fn id(&self) -> &Digest {
        &self.id
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn payload(&self) -> &TxPayload {
        &self.payload
    }

    pub fn kind(&self) -> TxKind {
        self.payload.kind()
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Re-derive the id from the stored fields.
    pub fn compute_id(&self) -> Digest {
        Self::derive_id(&self.sender, &self.payload, self.timestamp)
    }

    /// True if the stored id matches the stored fields.
    pub fn verify_id(&self) -> bool {
        self.compute_id() == self.id
    }
}
