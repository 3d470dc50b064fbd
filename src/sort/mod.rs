//! Client-side table sorting.
//!
//! Every list view (tasks, projects, orders) shares the same sorting
//! machinery:
//!
//! ```text
//! column press ──→ SortState::cycle ──→ SortState ──→ sort_rows ──→ view
//! ```
//!
//! - [`SortState`] is a plain value owned by the screen state; cycling is a
//!   pure transition with no side effects.
//! - [`sort_rows`] computes a fresh sorted projection and never touches the
//!   source rows, so clearing the sort restores the original order.
//! - [`SortKeyed`] is the seam between typed rows and the engine: a row
//!   resolves a dot-separated key (`"customer.name"`) to a [`SortValue`].
//!
//! The engine is total: unknown keys, missing fields, and mixed value types
//! degrade to defined orderings instead of failing.

mod engine;
mod state;
mod value;

pub use engine::{compare_values, sort_rows};
pub use state::{SortDirection, SortState};
pub use value::{resolve_path, SortKeyed, SortValue};
