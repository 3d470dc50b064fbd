use std::collections::HashMap;

use uuid::Uuid;

use crate::planner::{ChatMessage, ChatRole, TaskSuggestion};
use crate::sort::{sort_rows, SortState};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlannerState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    /// Project name stamped onto suggestions, as in the web client's
    /// project selector. Defaults to a fresh plan.
    pub project_name: String,
    /// Each suggestion table keeps its own independent sort, keyed by the
    /// message that carries it.
    pub suggestion_sorts: HashMap<Uuid, SortState>,
    /// Row selection inside the latest suggestion table.
    pub selected_suggestion: usize,
    pub scroll: usize,
}

impl UiState for PlannerState {}

impl PlannerState {
    /// The most recent assistant message that carries suggestions, if any.
    pub fn latest_suggestions(&self) -> Option<&ChatMessage> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == ChatRole::Assistant && !m.suggestions.is_empty())
    }

    /// The sort applied to a message's suggestion table.
    pub fn sort_for(&self, message_id: Uuid) -> SortState {
        self.suggestion_sorts
            .get(&message_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Suggestions of a message in display order.
    pub fn sorted_suggestions(&self, message: &ChatMessage) -> Vec<TaskSuggestion> {
        sort_rows(&message.suggestions, &self.sort_for(message.id))
    }

    /// The currently selected suggestion of the latest table.
    pub fn selected_suggestion(&self) -> Option<TaskSuggestion> {
        let message = self.latest_suggestions()?;
        let sorted = self.sorted_suggestions(message);
        sorted.get(self.selected_suggestion).cloned()
    }
}
