use crate::api::models::{Priority, Task, TaskStatus};
use crate::sort::{sort_rows, SortState};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TasksState {
    pub tasks: Vec<Task>,
    pub loaded: bool,
    pub sort: SortState,
    pub search: String,
    /// When true, printable keys go into the search box.
    pub search_active: bool,
    pub status_filter: Option<TaskStatus>,
    pub priority_filter: Option<Priority>,
    pub selected: usize,
}

impl UiState for TasksState {}

impl TasksState {
    /// The rows the table displays: filtered, then sorted.
    ///
    /// Sorting runs on the filtered copy, so the stored rows keep their
    /// source order and clearing the sort restores it.
    pub fn visible_tasks(&self) -> Vec<Task> {
        let filtered: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| self.matches(task))
            .cloned()
            .collect();
        sort_rows(&filtered, &self.sort)
    }

    fn matches(&self, task: &Task) -> bool {
        if let Some(status) = self.status_filter {
            if task.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority_filter {
            if task.priority != priority {
                return false;
            }
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        task.title.to_lowercase().contains(&needle)
            || task
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}
