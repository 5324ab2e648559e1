//! Application-wide constants.
//!
//! Centralizes the shipped department list so the default domain has a single
//! source of truth.

// ============================================================================
// Departments
// ============================================================================

/// Departments shipped with the app, in display order.
///
/// The order here is load-bearing: it is the declared order used for hover
/// resolution tie-breaking and for on-screen section layout.
pub const DEFAULT_DEPARTMENTS: &[&str] = &[
    "Produce",
    "Bakery",
    "Dairy",
    "Meat & Seafood",
    "Frozen",
    "Pantry",
    "Beverages",
    "Snacks",
    "Household",
];
