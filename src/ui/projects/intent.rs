use crate::api::models::Project;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProjectsIntent {
    Loaded { projects: Vec<Project> },
    SortBy { key: String },
    MoveUp,
    MoveDown,
}

impl Intent for ProjectsIntent {}
