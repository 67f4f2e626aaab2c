//! # Block
//!
//! A block is immutable once built: its fields are private and its digest is
//! computed at construction over (index, previous digest, timestamp,
//! transaction ids, generator).

use serde::{Deserialize, Serialize};
use shared_types::{CanonicalEncoder, Digest, PublicKey, Timestamp, Transaction};

/// Domain tag of the block encoding.
const BLOCK_DOMAIN: &str = "rwa.block.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    index: u64,
    previous_digest: Digest,
    timestamp: Timestamp,
    transactions: Vec<Transaction>,
    /// Participant credited with producing the block. Not authenticated.
    generator: PublicKey,
    digest: Digest,
}

impl Block {
    pub fn new(
        index: u64,
        previous_digest: Digest,
        timestamp: Timestamp,
        transactions: Vec<Transaction>,
        generator: impl Into<PublicKey>,
    ) -> Self {
        let mut block = Self {
            index,
            previous_digest,
            timestamp,
            transactions,
            generator: generator.into(),
            digest: Digest::ZERO,
        };
        block.digest = block.compute_digest();
        block
    }

    /// Index 0, all-zero previous digest, no transactions.
    pub fn genesis(timestamp: Timestamp, generator: impl Into<PublicKey>) -> Self {
        Self::new(0, Digest::ZERO, timestamp, Vec::new(), generator)
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn previous_digest(&self) -> &Digest {
        &self.previous_digest
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_ids(&self) -> impl Iterator<Item = &Digest> {
        self.transactions.iter().map(Transaction::id)
    }

    pub fn contains(&self, tx_id: &Digest) -> bool {
        self.transaction_ids().any(|id| id == tx_id)
    }

    pub fn generator(&self) -> &str {
        &self.generator
    }

    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// Re-derive the digest from the stored fields.
    pub fn compute_digest(&self) -> Digest {
        let mut encoder = CanonicalEncoder::new(BLOCK_DOMAIN);
        encoder
            .put_u64(self.index)
            .put_digest(&self.previous_digest)
            .put_u64(self.timestamp)
            .put_u64(self.transactions.len() as u64);
        for tx in &self.transactions {
            encoder.put_digest(tx.id());
        }
        encoder.put_str(&self.generator);
        encoder.finish()
    }

    pub fn verify_digest(&self) -> bool {
        self.compute_digest() == self.digest
    }
}
