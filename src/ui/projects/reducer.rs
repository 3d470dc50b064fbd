use crate::ui::mvi::Reducer;
use crate::ui::projects::intent::ProjectsIntent;
use crate::ui::projects::state::ProjectsState;

pub struct ProjectsReducer;

impl Reducer for ProjectsReducer {
    type State = ProjectsState;
    type Intent = ProjectsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProjectsIntent::Loaded { projects } => {
                let selected = if projects.is_empty() {
                    0
                } else {
                    state.selected.min(projects.len() - 1)
                };
                ProjectsState {
                    projects,
                    loaded: true,
                    selected,
                    ..state
                }
            }
            ProjectsIntent::SortBy { key } => ProjectsState {
                sort: state.sort.cycle(&key),
                ..state
            },
            ProjectsIntent::MoveUp => ProjectsState {
                selected: state.selected.saturating_sub(1),
                ..state
            },
            ProjectsIntent::MoveDown => {
                let last = state.projects.len().saturating_sub(1);
                ProjectsState {
                    selected: (state.selected + 1).min(last),
                    ..state
                }
            }
        }
    }
}
