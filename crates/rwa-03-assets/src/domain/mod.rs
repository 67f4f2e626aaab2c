pub mod ledger;
pub mod mint;

pub use ledger::{credit, debit};
pub use mint::MintCapability;
