use crate::api::models::{Priority, TaskStatus};
use crate::ui::mvi::Reducer;
use crate::ui::tasks::intent::TasksIntent;
use crate::ui::tasks::state::TasksState;

pub struct TasksReducer;

impl Reducer for TasksReducer {
    type State = TasksState;
    type Intent = TasksIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TasksIntent::Loaded { tasks } => {
                let mut next = TasksState {
                    tasks,
                    loaded: true,
                    ..state
                };
                clamp_selection(&mut next);
                next
            }
            TasksIntent::SortBy { key } => TasksState {
                sort: state.sort.cycle(&key),
                ..state
            },
            TasksIntent::OpenSearch => TasksState {
                search_active: true,
                ..state
            },
            TasksIntent::CloseSearch => TasksState {
                search_active: false,
                ..state
            },
            TasksIntent::SearchInput(ch) => {
                if !state.search_active {
                    return state;
                }
                let mut search = state.search.clone();
                search.push(ch);
                let mut next = TasksState { search, ..state };
                clamp_selection(&mut next);
                next
            }
            TasksIntent::SearchBackspace => {
                if !state.search_active {
                    return state;
                }
                let mut search = state.search.clone();
                search.pop();
                TasksState { search, ..state }
            }
            TasksIntent::CycleStatusFilter => {
                let mut next = TasksState {
                    status_filter: next_status(state.status_filter),
                    ..state
                };
                clamp_selection(&mut next);
                next
            }
            TasksIntent::CyclePriorityFilter => {
                let mut next = TasksState {
                    priority_filter: next_priority(state.priority_filter),
                    ..state
                };
                clamp_selection(&mut next);
                next
            }
            TasksIntent::MoveUp => TasksState {
                selected: state.selected.saturating_sub(1),
                ..state
            },
            TasksIntent::MoveDown => {
                let last = state.visible_tasks().len().saturating_sub(1);
                TasksState {
                    selected: (state.selected + 1).min(last),
                    ..state
                }
            }
            TasksIntent::Created { task } => {
                let mut tasks = state.tasks.clone();
                tasks.push(task);
                TasksState { tasks, ..state }
            }
        }
    }
}

fn clamp_selection(state: &mut TasksState) {
    let len = state.visible_tasks().len();
    if len == 0 {
        state.selected = 0;
    } else if state.selected >= len {
        state.selected = len - 1;
    }
}

fn next_status(current: Option<TaskStatus>) -> Option<TaskStatus> {
    match current {
        None => Some(TaskStatus::Open),
        Some(TaskStatus::Open) => Some(TaskStatus::InProgress),
        Some(TaskStatus::InProgress) => Some(TaskStatus::Completed),
        Some(TaskStatus::Completed) => Some(TaskStatus::Overdue),
        Some(TaskStatus::Overdue) => None,
    }
}

fn next_priority(current: Option<Priority>) -> Option<Priority> {
    match current {
        None => Some(Priority::High),
        Some(Priority::High) => Some(Priority::Medium),
        Some(Priority::Medium) => Some(Priority::Low),
        Some(Priority::Low) => None,
    }
}
