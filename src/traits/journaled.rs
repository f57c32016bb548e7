//! Checkpoint/restore capability for collaborators.
//!
//! A pool operation may touch both ledgers several times. If a later step
//! fails, the earlier transfers must not survive, so the pool takes a
//! checkpoint of each collaborator before its first call, then either
//! commits or restores it once the operation settles.

/// A collaborator whose state can be captured and rolled back.
///
/// # Contract
///
/// - `restore(checkpoint())` leaves the collaborator observably identical
///   to the moment the checkpoint was taken: same balances, same
///   allowances.
/// - `commit(checkpoint())` keeps every change made since and releases
///   whatever the collaborator retained to undo them.
/// - Every checkpoint is settled exactly once, innermost first.
pub trait Journaled {
    /// Opaque marker for a saved state.
    type Checkpoint;

    /// Opens a checkpoint at the current state.
    fn checkpoint(&mut self) -> Self::Checkpoint;

    /// Accepts every change made since `checkpoint`.
    fn commit(&mut self, checkpoint: Self::Checkpoint);

    /// Rolls back to the state at `checkpoint`.
    fn restore(&mut self, checkpoint: Self::Checkpoint);
}
