pub mod authority;
pub mod did;

pub use authority::AuthorityRegistry;
pub use did::{derive_did, DEFAULT_DID_PREFIX};
