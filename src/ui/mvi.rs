//! Model-View-Intent (MVI) primitives for the screen states.
//!
//! Every screen follows the same unidirectional flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot of a screen (rows, filters, sort,
//!   selection)
//! - **Intent**: user actions (key presses) and data arrivals
//! - **Reducer**: pure function transforming state based on intents
//!
//! Keeping reducers pure keeps every screen's behavior unit-testable
//! without a terminal.

/// Marker trait for screen state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intent objects.
pub trait Intent: Send + 'static {}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
