//! Domain layer: blocks, the chain, the pending pool and the router.

pub mod block;
pub mod chain;
pub mod pool;
pub mod router;

pub use block::Block;
pub use chain::Chain;
pub use pool::PendingPool;
pub use router::{Outcome, Router};
