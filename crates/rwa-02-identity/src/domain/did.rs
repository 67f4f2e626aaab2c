//! Decentralized identifier derivation.

use shared_types::abbreviate;

/// Prefix for DIDs derived from a public key.
pub const DEFAULT_DID_PREFIX: &str = "did:rwa:";

/// DID for a key when the claim does not supply one: the prefix followed by
/// the first 8 characters of the key.
pub fn derive_did(prefix: &str, public_key: &str) -> String {
    format!("{prefix}{}", abbreviate(public_key))
}
