use crate::domain::{HandlerResult, StateStore};
use shared_types::{Transaction, TxKind};

/// A domain module able to apply transactions of the kinds it owns.
///
/// Implementations must run every check before their first write, so a
/// rejected transaction leaves `state` untouched.
pub trait TransactionHandler: Send + Sync {
    /// Short module name used in logs.
    fn name(&self) -> &'static str;

    /// Kinds this handler owns.
    fn kinds(&self) -> &'static [TxKind];

    fn handles(&self, kind: TxKind) -> bool {
        self.kinds().contains(&kind)
    }

    /// Apply `tx`. A transaction of a kind this handler does not own is a
    /// no-op returning `Ok(())`.
    fn apply(&self, tx: &Transaction, state: &mut StateStore) -> HandlerResult;
}
