pub mod errors;
pub mod keys;
pub mod store;

pub use errors::*;
pub use keys::*;
pub use store::*;
