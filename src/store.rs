//! The authoritative item store.
//!
//! All item mutation in the system flows through the five operations on
//! [`ItemStore`]. Every operation is synchronous and atomic with respect to
//! the main scheduler that owns the store; readers observe each mutation
//! immediately, with no buffering.
//!
//! Invalid inputs never panic and never leave partial state: they degrade to
//! typed no-op rejections ([`StoreError`]) so presentation code can misuse the
//! surface freely without crashing the app.

use thiserror::Error;
use tracing::{debug, trace};

use crate::departments::DepartmentDomain;
use crate::types::ShoppingItem;

// ============================================================================
// Errors
// ============================================================================

/// Non-fatal rejections from store operations.
///
/// Every variant means "nothing changed". Callers that don't care (the UI
/// mostly doesn't) can drop the result; callers that marshal commands log it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The named department is not in the fixed domain.
    #[error("unknown department: {department:?}")]
    UnknownDepartment { department: String },

    /// An item with this id already exists; `add` rejects rather than
    /// overwrites.
    #[error("duplicate item id: {id:?}")]
    DuplicateId { id: String },

    /// No item with this id exists.
    #[error("no item with id: {id:?}")]
    MissingItem { id: String },
}

/// Result type alias for store operations.
pub type StoreResult = Result<(), StoreError>;

// ============================================================================
// ItemStore
// ============================================================================

/// Authoritative collection of shopping items.
///
/// Items live in a single Vec in insertion order; grouping by department for
/// display is a read-time projection ([`ItemStore::items_in`]), not a stored
/// grouping. Items carry their own department, so a move is an O(1) field
/// write rather than list surgery, and relative order among items is
/// preserved across moves.
pub struct ItemStore {
    domain: DepartmentDomain,
    items: Vec<ShoppingItem>,
}

impl ItemStore {
    /// Create an empty store over the given department domain.
    pub fn new(domain: DepartmentDomain) -> Self {
        Self {
            domain,
            items: Vec::new(),
        }
    }

    /// The fixed department domain this store validates against.
    pub fn domain(&self) -> &DepartmentDomain {
        &self.domain
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Append an item to the end of the collection.
    ///
    /// Rejects (store unchanged) when the item's department is outside the
    /// domain or its id duplicates an existing item.
    pub fn add(&mut self, item: ShoppingItem) -> StoreResult {
        if !self.domain.contains(&item.department) {
            debug!(id = %item.id, department = %item.department, "add rejected: unknown department");
            return Err(StoreError::UnknownDepartment {
                department: item.department,
            });
        }
        if self.items.iter().any(|i| i.id == item.id) {
            debug!(id = %item.id, "add rejected: duplicate id");
            return Err(StoreError::DuplicateId { id: item.id });
        }
        trace!(id = %item.id, department = %item.department, "item added");
        self.items.push(item);
        Ok(())
    }

    /// Delete the item with this id.
    pub fn remove(&mut self, id: &str) -> StoreResult {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() == before {
            return Err(StoreError::MissingItem { id: id.to_string() });
        }
        trace!(id, "item removed");
        Ok(())
    }

    /// Flip the completed flag on the item with this id.
    pub fn toggle(&mut self, id: &str) -> StoreResult {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.completed = !item.completed;
                trace!(id, completed = item.completed, "item toggled");
                Ok(())
            }
            None => Err(StoreError::MissingItem { id: id.to_string() }),
        }
    }

    /// Reassign the item's department.
    ///
    /// A move to the item's current department is a silent no-op `Ok`, not an
    /// error; an unknown target department or missing id is a rejection.
    pub fn move_item(&mut self, id: &str, to_department: &str) -> StoreResult {
        if !self.domain.contains(to_department) {
            debug!(id, department = to_department, "move rejected: unknown department");
            return Err(StoreError::UnknownDepartment {
                department: to_department.to_string(),
            });
        }
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| StoreError::MissingItem { id: id.to_string() })?;
        if item.department == to_department {
            return Ok(());
        }
        debug!(id, from = %item.department, to = to_department, "item moved");
        item.department = to_department.to_string();
        Ok(())
    }

    /// Empty the collection.
    pub fn clear_all(&mut self) {
        trace!(count = self.items.len(), "store cleared");
        self.items.clear();
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// All items, in insertion order.
    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    /// Items currently assigned to `department`, in insertion order.
    ///
    /// Read-time filter over the primary collection; fine at shopping-list
    /// scale.
    pub fn items_in<'a>(&'a self, department: &'a str) -> impl Iterator<Item = &'a ShoppingItem> {
        self.items.iter().filter(move |i| i.department == department)
    }

    /// Look up a single item by id.
    pub fn get(&self, id: &str) -> Option<&ShoppingItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
