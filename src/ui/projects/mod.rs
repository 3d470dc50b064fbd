//! Project list screen.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ProjectsIntent;
pub use reducer::ProjectsReducer;
pub use state::ProjectsState;
pub use view::{render_projects, PROJECT_COLUMNS};
