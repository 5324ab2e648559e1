//! Gesture-to-main command marshaling.
//!
//! The gesture scheduler never mutates the store directly; it enqueues a
//! well-typed command here, fire-and-forget, and the main scheduler drains
//! the queue into the store on its next tick. The command set is a closed
//! enum, so the only thing that can cross the scheduler boundary is something
//! the store already knows how to apply.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::store::ItemStore;

/// A store mutation requested from off the main scheduler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreCommand {
    /// Reassign an item's department (the drag-settle commit).
    Move { item_id: String, department: String },
}

/// Shared FIFO of pending store commands.
///
/// Cheap to clone; all clones share one queue. Pushing never blocks on the
/// store and the pusher never learns the outcome - rejected commands are
/// logged and dropped during drain.
#[derive(Clone, Default)]
pub struct CommandQueue {
    inner: Arc<Mutex<VecDeque<StoreCommand>>>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a command, fire-and-forget.
    pub fn push(&self, command: StoreCommand) {
        debug!(?command, "command enqueued");
        self.inner.lock().push_back(command);
    }

    /// Apply every pending command to the store, in FIFO order.
    ///
    /// Called from the main scheduler that owns the store. Rejections are
    /// non-fatal by design (the item may have been removed, or the drop
    /// target may no longer be valid, between settle and drain); they are
    /// logged and the drain continues. Returns the number of commands
    /// applied successfully.
    pub fn drain_into(&self, store: &mut ItemStore) -> usize {
        let pending: Vec<StoreCommand> = {
            let mut queue = self.inner.lock();
            queue.drain(..).collect()
        };
        let mut applied = 0;
        for command in pending {
            let result = match &command {
                StoreCommand::Move {
                    item_id,
                    department,
                } => store.move_item(item_id, department),
            };
            match result {
                Ok(()) => applied += 1,
                Err(err) => warn!(?command, %err, "command dropped"),
            }
        }
        applied
    }

    /// Number of commands waiting to be drained.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
