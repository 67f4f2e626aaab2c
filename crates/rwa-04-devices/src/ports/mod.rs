pub mod outbound;

pub use outbound::{RewardMint, RewardPolicy};
