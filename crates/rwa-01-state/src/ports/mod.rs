//! Hexagonal ports implemented by the domain modules.

pub mod gate;
pub mod handler;

pub use gate::ComplianceGate;
pub use handler::TransactionHandler;
