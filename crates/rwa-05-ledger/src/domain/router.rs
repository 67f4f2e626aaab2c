//! # Transaction Router
//!
//! Handlers are registered in priority order. A transaction is offered only
//! to the handlers that declare its kind, in registration order, and the
//! first error stops it. A kind nobody claims passes through untouched.

use rwa_01_state::{HandlerError, StateError, StateStore, TransactionHandler};
use shared_types::{Transaction, TxKind, TxRejection};
use std::collections::HashMap;
use std::sync::Arc;

/// Result of routing one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every owning handler succeeded.
    Accepted,
    /// A handler rejected the transaction; `handler` names it.
    Rejected {
        handler: &'static str,
        reason: TxRejection,
    },
    /// A handler hit a store fault.
    Faulted {
        handler: &'static str,
        fault: StateError,
    },
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted)
    }
}

#[derive(Default)]
pub struct Router {
    handlers: Vec<Arc<dyn TransactionHandler>>,
    by_kind: HashMap<TxKind, Vec<usize>>,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` after every handler already present.
    pub fn register(&mut self, handler: Arc<dyn TransactionHandler>) {
        let slot = self.handlers.len();
        for kind in handler.kinds() {
            self.by_kind.entry(*kind).or_default().push(slot);
        }
        self.handlers.push(handler);
    }

    pub fn with(mut self, handler: Arc<dyn TransactionHandler>) -> Self {
        self.register(handler);
        self
    }

    /// Names of the handlers owning `kind`, in dispatch order.
    pub fn owners(&self, kind: TxKind) -> Vec<&'static str> {
        self.by_kind
            .get(&kind)
            .map(|slots| slots.iter().map(|&i| self.handlers[i].name()).collect())
            .unwrap_or_default()
    }

    pub fn route(&self, tx: &Transaction, state: &mut StateStore) -> Outcome {
        let Some(slots) = self.by_kind.get(&tx.kind()) else {
            return Outcome::Accepted;
        };
        for &slot in slots {
            let handler = &self.handlers[slot];
            match handler.apply(tx, state) {
                Ok(()) => {}
                Err(HandlerError::Rejected(reason)) => {
                    return Outcome::Rejected {
                        handler: handler.name(),
                        reason,
                    }
                }
                Err(HandlerError::Fault(fault)) => {
                    return Outcome::Faulted {
                        handler: handler.name(),
                        fault,
                    }
                }
            }
        }
        Outcome::Accepted
    }
}
