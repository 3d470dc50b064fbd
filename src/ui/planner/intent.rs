use chrono::{DateTime, Utc};

use crate::ui::mvi::Intent;

/// Timestamps come in with the intent so the reducer stays a pure
/// transition.
#[derive(Debug, Clone)]
pub enum PlannerIntent {
    /// Screen shown for the first time; seeds the assistant greeting.
    Opened { now: DateTime<Utc> },
    Input(char),
    Backspace,
    /// Send the typed message and produce the assistant's reply.
    Submit { now: DateTime<Utc> },
    /// Cycle the sort of the latest suggestion table.
    SortSuggestions { key: String },
    SelectUp,
    SelectDown,
    ScrollUp,
    ScrollDown,
}

impl Intent for PlannerIntent {}
