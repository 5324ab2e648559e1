//! Drag lifecycle phases.
//!
//! An explicit phase enum rather than scattered boolean flags, so illegal
//! combinations (settled but still publishing hover, resolving twice) are
//! unrepresentable.
//!
//! ## Transitions
//!
//! ```text
//! Idle      -> Dragging   (gesture start on an item)
//! Dragging  -> Dragging   (pointer update)
//! Dragging  -> Resolving  (gesture end; final position resolved)
//! Resolving -> Settled    (at most one move issued; highlight cleared)
//! Any       -> Settled    (teardown/abort; no move issued)
//! ```
//!
//! Settled is terminal; the session is discarded afterwards.

/// Lifecycle phase of a single drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// Session created, gesture not yet started
    #[default]
    Idle,

    /// Pointer is down and moving; hover is being published every update
    Dragging,

    /// Gesture ended; final department resolved, commit pending
    Resolving,

    /// Terminal: commit issued (or skipped) and highlight cleared
    Settled,
}

impl DragPhase {
    /// True while the session is consuming pointer updates.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging)
    }

    /// True once the session has reached its terminal phase.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Settled)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
