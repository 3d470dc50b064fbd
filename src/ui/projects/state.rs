use crate::api::models::Project;
use crate::sort::{sort_rows, SortState};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectsState {
    pub projects: Vec<Project>,
    pub loaded: bool,
    pub sort: SortState,
    pub selected: usize,
}

impl UiState for ProjectsState {}

impl ProjectsState {
    pub fn visible_projects(&self) -> Vec<Project> {
        sort_rows(&self.projects, &self.sort)
    }
}
