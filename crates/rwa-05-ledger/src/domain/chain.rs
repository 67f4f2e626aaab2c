//! # Chain
//!
//! Append-only, singly linked sequence of blocks starting at genesis.

use super::block::Block;
use crate::error::{LedgerError, Result};
use shared_types::{PublicKey, Timestamp, Transaction};

#[derive(Debug, Clone)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    pub fn new(genesis: Block) -> Self {
        Self {
            blocks: vec![genesis],
        }
    }

    /// Build the block extending the tip and append it. Cannot fail: index
    /// and previous digest are taken from the tip itself.
    pub fn seal(
        &mut self,
        timestamp: Timestamp,
        transactions: Vec<Transaction>,
        generator: impl Into<PublicKey>,
    ) -> &Block {
        let tip = self.tip();
        let block = Block::new(
            tip.index() + 1,
            *tip.digest(),
            timestamp,
            transactions,
            generator,
        );
        debug_assert!(block.verify_digest());
        self.blocks.push(block);
        self.tip()
    }

    /// Append an externally built `block` if it extends the tip.
    pub fn append(&mut self, block: Block) -> Result<()> {
        let tip = self.tip();
        let expected_index = tip.index() + 1;
        if block.index() != expected_index || block.previous_digest() != tip.digest() {
            return Err(LedgerError::BrokenLink {
                index: block.index(),
                expected_index,
                expected_previous: *tip.digest(),
            });
        }
        if !block.verify_digest() {
            return Err(LedgerError::DigestMismatch {
                index: block.index(),
                stored: *block.digest(),
                computed: block.compute_digest(),
            });
        }
        self.blocks.push(block);
        Ok(())
    }

    pub fn tip(&self) -> &Block {
        // Never empty: constructed with genesis and append-only.
        &self.blocks[self.blocks.len() - 1]
    }

    pub fn get(&self, index: u64) -> Option<&Block> {
        usize::try_from(index).ok().and_then(|i| self.blocks.get(i))
    }

    /// Number of blocks, genesis included.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Index of the tip.
    pub fn height(&self) -> u64 {
        self.tip().index()
    }

    /// Walk the whole chain, re-deriving every block digest and checking
    /// every link. Transaction ids need no second check: a `Transaction`
    /// with a stale id cannot be built or decoded.
    pub fn verify(&self) -> Result<()> {
        let mut previous: Option<&Block> = None;
        for block in &self.blocks {
            if !block.verify_digest() {
                return Err(LedgerError::DigestMismatch {
                    index: block.index(),
                    stored: *block.digest(),
                    computed: block.compute_digest(),
                });
            }
            if let Some(prev) = previous {
                if block.index() != prev.index() + 1 || block.previous_digest() != prev.digest() {
                    return Err(LedgerError::BrokenLink {
                        index: block.index(),
                        expected_index: prev.index() + 1,
                        expected_previous: *prev.digest(),
                    });
                }
            }
            previous = Some(block);
        }
        Ok(())
    }
}
