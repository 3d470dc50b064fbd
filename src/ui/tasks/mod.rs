//! Task list screen: search, status/priority filters, sortable columns.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::TasksIntent;
pub use reducer::TasksReducer;
pub use state::TasksState;
pub use view::{render_tasks, TASK_COLUMNS};
