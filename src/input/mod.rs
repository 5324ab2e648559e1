//! Drag gesture handling.
//!
//! This module implements the drag-to-department interaction: the per-item
//! gesture state machine, hover resolution against the layout registry, and
//! the command queue that marshals the resulting store mutation back onto the
//! main scheduler.
//!
//! ## Architecture
//!
//! The gesture scheduler drives [`DragSession`] with raw per-frame pointer
//! events; the session consults the hover resolver on every update and
//! publishes the highlighted department for the presentation layer. On
//! release it enqueues at most one [`StoreCommand::Move`], fire-and-forget;
//! the main scheduler drains the queue into the store on its next tick. The
//! gesture side never touches the store directly.
//!
//! ## Modules
//!
//! - `state` - Drag lifecycle phases and query helpers
//! - `hover` - Pure pointer-to-department resolution + the highlight observable
//! - `commands` - The gesture-to-main command queue
//! - `drag` - The drag session state machine and per-item session gate

pub mod commands;
pub mod hover;
mod drag;
mod state;

pub use commands::{CommandQueue, StoreCommand};
pub use drag::{DragSession, DragSessions};
pub use hover::{resolve, HoverHighlight};
pub use state::DragPhase;
