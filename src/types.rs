//! Core types for the shopping-list system.
//!
//! This module defines the item record shared between the store and the
//! presentation layer. Departments are plain strings validated against the
//! fixed [`DepartmentDomain`](crate::departments::DepartmentDomain); they are
//! a value domain, not a stored entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single shopping-list entry.
///
/// The id is unique within a store and immutable after creation; `completed`
/// and `department` change only through [`ItemStore`](crate::store::ItemStore)
/// operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Unique identifier
    pub id: String,
    /// Human-readable name as entered by the user
    pub name: String,
    /// Whether the item has been checked off
    pub completed: bool,
    /// Department this item currently belongs to
    pub department: String,
}

impl ShoppingItem {
    /// Create a new unchecked item with a freshly minted v4 UUID id.
    pub fn new(name: impl Into<String>, department: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), name, department)
    }

    /// Create an item with a caller-supplied id.
    ///
    /// External collaborators that mint their own ids (e.g. from a capture
    /// timestamp) go through here; uniqueness is enforced by the store on
    /// `add`, not by this constructor.
    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed: false,
            department: department.into(),
        }
    }
}
