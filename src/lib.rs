//! Cartboard core - a personal shopping-list organizer.
//!
//! The crate is the authoritative item store plus the drag-to-department
//! resolution engine that mutates it. Presentation code adds, toggles, and
//! removes items through [`store::ItemStore`]; layout passes report each
//! department section's vertical extent to [`layout::DepartmentLayoutRegistry`];
//! a drag gesture drives [`input::DragSession`], which resolves the department
//! under the pointer every frame and, on release, commits a reassignment
//! through the command queue back on the main scheduler.
//!
//! Everything outside that loop - navigation, capture, import, settings,
//! theming - is an external collaborator of this crate.

pub mod constants;
pub mod departments;
pub mod input;
pub mod layout;
pub mod perf;
pub mod store;
pub mod types;

pub use departments::DepartmentDomain;
pub use input::{CommandQueue, DragSession, DragSessions, HoverHighlight, StoreCommand};
pub use layout::{DepartmentExtent, DepartmentLayoutRegistry};
pub use store::{ItemStore, StoreError};
pub use types::ShoppingItem;

use tracing_subscriber::EnvFilter;

/// Install a global tracing subscriber filtered by `RUST_LOG`.
///
/// For embedding binaries and tests; safe to call more than once (later
/// calls are ignored).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
