//! Outbound ports (driven side).

use rwa_01_state::{StateError, StateStore};
use shared_types::Quantity;

/// Protocol-level reward emission.
pub trait RewardMint: Send + Sync {
    /// Symbol credited by [`mint`](Self::mint).
    fn symbol(&self) -> &str;

    /// Credit `holder` with `amount` and return the new balance.
    fn mint(
        &self,
        state: &mut StateStore,
        holder: &str,
        amount: Quantity,
    ) -> Result<Quantity, StateError>;
}

/// Fixed heartbeat reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardPolicy {
    pub amount: Quantity,
}

impl Default for RewardPolicy {
    fn default() -> Self {
        Self { amount: 10 }
    }
}
