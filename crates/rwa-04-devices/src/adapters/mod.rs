//! Adapters binding outbound ports to the asset module.

use crate::ports::RewardMint;
use rwa_01_state::{StateError, StateStore};
use rwa_03_assets::MintCapability;
use shared_types::Quantity;

impl RewardMint for MintCapability {
    fn symbol(&self) -> &str {
        MintCapability::symbol(self)
    }

    fn mint(
        &self,
        state: &mut StateStore,
        holder: &str,
        amount: Quantity,
    ) -> Result<Quantity, StateError> {
        MintCapability::mint(self, state, holder, amount)
    }
}
