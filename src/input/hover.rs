//! Hover resolution.
//!
//! Maps a pointer position to the department underneath it. Extents are
//! recorded in content-space while pointer events arrive in viewport-space,
//! so the scroll offset is added before the registry lookup; this is the one
//! coordinate conversion in the crate and it lives here so no caller
//! duplicates it.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::layout::DepartmentLayoutRegistry;

/// Resolve a viewport-space pointer y to the department under it.
///
/// Pure with respect to the registry snapshot: no state of its own, safe to
/// call at per-frame frequency from the gesture scheduler.
#[inline]
pub fn resolve(
    absolute_y: f32,
    scroll_offset: f32,
    registry: &DepartmentLayoutRegistry,
) -> Option<String> {
    registry.lookup(absolute_y + scroll_offset)
}

/// The currently highlighted drop target, shared with the presentation layer.
///
/// Drag sessions publish here on every pointer update (including `None` when
/// the pointer leaves all extents) and clear it unconditionally on settling,
/// so the slot can never stay stuck on a stale department after a gesture
/// ends or is torn down.
#[derive(Clone, Default)]
pub struct HoverHighlight {
    current: Arc<Mutex<Option<String>>>,
}

impl HoverHighlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a new highlighted department (or `None`).
    pub fn set(&self, department: Option<String>) {
        *self.current.lock() = department;
    }

    /// Clear the highlight.
    pub fn clear(&self) {
        *self.current.lock() = None;
    }

    /// The department currently highlighted, if any.
    pub fn current(&self) -> Option<String> {
        self.current.lock().clone()
    }
}
