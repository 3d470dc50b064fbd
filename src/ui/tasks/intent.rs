use crate::api::models::Task;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TasksIntent {
    Loaded { tasks: Vec<Task> },
    /// A column header was activated; cycles that column's sort.
    SortBy { key: String },
    /// `/` opens the search box; Esc or Enter closes it.
    OpenSearch,
    CloseSearch,
    SearchInput(char),
    SearchBackspace,
    /// Step the status filter through all → each status → all.
    CycleStatusFilter,
    CyclePriorityFilter,
    MoveUp,
    MoveDown,
    /// A new task arrived (created from the planner).
    Created { task: Task },
}

impl Intent for TasksIntent {}
