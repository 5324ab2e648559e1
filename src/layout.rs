//! Department layout registry.
//!
//! Layout passes report the on-screen vertical extent of each department's
//! section here; hover resolution reads it back. Extents are recorded in
//! content-space (scroll-independent), exactly one per department, and each
//! fresh measurement overwrites the previous one wholesale. Last writer wins;
//! that rule is the entire consistency contract between layout writes and
//! resolver reads.

use std::collections::HashMap;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::departments::DepartmentDomain;

/// The vertical interval a department's section currently occupies, in
/// content-space coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepartmentExtent {
    /// Top edge of the section
    pub offset_y: f32,
    /// Section height; zero or negative heights never match a pointer
    pub height: f32,
}

impl DepartmentExtent {
    /// Whether `y` falls inside the half-open interval
    /// `[offset_y, offset_y + height)`.
    #[inline]
    pub fn contains(&self, y: f32) -> bool {
        y >= self.offset_y && y < self.offset_y + self.height
    }
}

/// Tracks the current extent of each department's rendering region.
///
/// Interior locking makes the registry shareable between the main scheduler
/// (layout writes, store-side reads) and the gesture scheduler (per-frame
/// hover lookups); writers never hold the lock across anything but the
/// overwrite itself.
pub struct DepartmentLayoutRegistry {
    domain: DepartmentDomain,
    extents: RwLock<HashMap<String, DepartmentExtent>>,
}

impl DepartmentLayoutRegistry {
    /// Create an empty registry over the given domain.
    pub fn new(domain: DepartmentDomain) -> Self {
        Self {
            domain,
            extents: RwLock::new(HashMap::new()),
        }
    }

    /// The domain whose declared order drives [`lookup`](Self::lookup).
    pub fn domain(&self) -> &DepartmentDomain {
        &self.domain
    }

    /// Record a fresh measurement for `department`, replacing any previous
    /// one. Measurements for departments outside the domain are dropped.
    pub fn update_extent(&self, department: &str, offset_y: f32, height: f32) {
        if !self.domain.contains(department) {
            warn!(department, "extent dropped: unknown department");
            return;
        }
        self.extents
            .write()
            .insert(department.to_string(), DepartmentExtent { offset_y, height });
    }

    /// The last recorded extent for `department`, if any.
    pub fn extent(&self, department: &str) -> Option<DepartmentExtent> {
        self.extents.read().get(department).copied()
    }

    /// Map a content-space y coordinate to the department under it.
    ///
    /// Iterates the domain in declared order and returns the first department
    /// whose recorded extent contains `absolute_y`. Declared order is the
    /// tie-break for overlapping or degenerate extents, which keeps the
    /// result deterministic for a given snapshot. Returns `None` when no
    /// extent contains the point or none has been recorded yet.
    pub fn lookup(&self, absolute_y: f32) -> Option<String> {
        let extents = self.extents.read();
        self.domain
            .iter()
            .find(|dept| {
                extents
                    .get(*dept)
                    .is_some_and(|extent| extent.contains(absolute_y))
            })
            .map(str::to_string)
    }

    /// Forget all measurements (e.g. when the list view is torn down).
    pub fn clear(&self) {
        self.extents.write().clear();
    }
}
