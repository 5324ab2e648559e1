//! Drag session state machine.
//!
//! A [`DragSession`] covers one item's gesture from start to settle. The
//! gesture scheduler feeds it raw per-frame pointer events; the session
//! resolves the department under the pointer on every update, publishes the
//! highlight, and on release enqueues at most one move command for the main
//! scheduler to apply.
//!
//! ## Performance notes
//!
//! `pointer_update` runs per frame (60+ times per second). It does one
//! registry lookup and one highlight publish per call and returns early when
//! the session is not in the dragging phase. Enable the `profiling` feature
//! to see timing.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::input::commands::{CommandQueue, StoreCommand};
use crate::input::hover::{resolve, HoverHighlight};
use crate::input::state::DragPhase;
use crate::layout::DepartmentLayoutRegistry;
use crate::profile_scope;
use crate::types::ShoppingItem;

// ============================================================================
// DragSessions - per-item session gate
// ============================================================================

/// Hands out drag sessions and enforces at most one live session per item.
///
/// Concurrent drags on different items are independent; they share only the
/// command queue, the highlight slot, and the read-only registry snapshot.
#[derive(Clone)]
pub struct DragSessions {
    active: Arc<Mutex<HashSet<String>>>,
    commands: CommandQueue,
    highlight: HoverHighlight,
}

impl DragSessions {
    pub fn new(commands: CommandQueue, highlight: HoverHighlight) -> Self {
        Self {
            active: Arc::new(Mutex::new(HashSet::new())),
            commands,
            highlight,
        }
    }

    /// Start a drag on `item`.
    ///
    /// Returns `None` when a session for this item is already live; the slot
    /// frees when that session settles or is dropped.
    pub fn begin(&self, item: &ShoppingItem) -> Option<DragSession> {
        {
            let mut active = self.active.lock();
            if !active.insert(item.id.clone()) {
                debug!(id = %item.id, "drag refused: session already live");
                return None;
            }
        }
        debug!(id = %item.id, origin = %item.department, "drag started");
        Some(DragSession {
            item_id: item.id.clone(),
            origin_department: item.department.clone(),
            translation: (0.0, 0.0),
            hovered: None,
            phase: DragPhase::Dragging,
            commands: self.commands.clone(),
            highlight: self.highlight.clone(),
            active: Arc::clone(&self.active),
        })
    }

    /// Whether a session for this item is currently live.
    pub fn is_dragging(&self, item_id: &str) -> bool {
        self.active.lock().contains(item_id)
    }
}

// ============================================================================
// DragSession
// ============================================================================

/// One item's drag gesture, from start to settle.
///
/// Phases run `Dragging -> Resolving -> Settled`; Settled is terminal and the
/// session is discarded afterwards. A session that is dropped before settling
/// (view teardown mid-drag) still reaches Settled with no move issued and the
/// highlight cleared.
pub struct DragSession {
    item_id: String,
    origin_department: String,
    /// Pointer translation since gesture start, presentation-only
    translation: (f32, f32),
    /// Last resolved department, mirrored into the shared highlight slot
    hovered: Option<String>,
    phase: DragPhase,
    commands: CommandQueue,
    highlight: HoverHighlight,
    active: Arc<Mutex<HashSet<String>>>,
}

impl DragSession {
    /// Handle a per-frame pointer event.
    ///
    /// Records the translation, resolves the department under the pointer
    /// against the latest registry snapshot, and publishes the highlight -
    /// every update, including `None` when the pointer is outside all
    /// extents. No-op unless the session is in the dragging phase.
    pub fn pointer_update(
        &mut self,
        absolute_y: f32,
        translation: (f32, f32),
        scroll_offset: f32,
        registry: &DepartmentLayoutRegistry,
    ) {
        profile_scope!("pointer_update");

        if !self.phase.is_dragging() {
            return;
        }

        self.translation = translation;
        let resolved = resolve(absolute_y, scroll_offset, registry);
        if resolved != self.hovered {
            trace!(id = %self.item_id, hovered = ?resolved, "hover changed");
        }
        self.hovered = resolved.clone();
        self.highlight.set(resolved);
    }

    /// Handle gesture end.
    ///
    /// Resolves the final pointer position with the same resolution function
    /// as pointer updates, then settles: if the result is a real department
    /// different from the origin, exactly one move command is enqueued;
    /// otherwise none. The highlight clears unconditionally. No-op unless
    /// the session is in the dragging phase.
    pub fn end(
        &mut self,
        absolute_y: f32,
        scroll_offset: f32,
        registry: &DepartmentLayoutRegistry,
    ) {
        if !self.phase.is_dragging() {
            return;
        }
        self.phase = DragPhase::Resolving;
        let resolved = resolve(absolute_y, scroll_offset, registry);
        self.settle(resolved);
    }

    /// Tear the session down without committing.
    ///
    /// Used when the underlying view goes away mid-drag. Reaches Settled
    /// with no move issued and the highlight cleared; safe to call in any
    /// phase.
    pub fn abort(&mut self) {
        if self.phase.is_settled() {
            return;
        }
        debug!(id = %self.item_id, "drag aborted");
        self.settle(None);
    }

    fn settle(&mut self, resolved: Option<String>) {
        match resolved {
            Some(department) if department != self.origin_department => {
                debug!(id = %self.item_id, to = %department, "drag settled: move enqueued");
                self.commands.push(StoreCommand::Move {
                    item_id: self.item_id.clone(),
                    department,
                });
            }
            Some(_) => {
                debug!(id = %self.item_id, "drag settled: dropped on origin department");
            }
            None => {
                debug!(id = %self.item_id, "drag settled: no department under pointer");
            }
        }
        // The item reappears in its natural layout slot on the next render;
        // there is no fly-to-slot animation to coordinate with.
        self.hovered = None;
        self.highlight.clear();
        self.phase = DragPhase::Settled;
        self.active.lock().remove(&self.item_id);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn item_id(&self) -> &str {
        &self.item_id
    }

    pub fn origin_department(&self) -> &str {
        &self.origin_department
    }

    /// Pointer translation since gesture start.
    pub fn translation(&self) -> (f32, f32) {
        self.translation
    }

    /// The department currently under the pointer, if any.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }
}

impl Drop for DragSession {
    /// Teardown backstop: an unsettled session must never leave the
    /// highlight stuck or its per-item slot reserved.
    fn drop(&mut self) {
        if !self.phase.is_settled() {
            self.abort();
        }
    }
}
