//! User settings screen: display and AI preferences.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::SettingsIntent;
pub use reducer::SettingsReducer;
pub use state::{apply_fields, snapshot_fields, SettingId, SettingsFieldSnapshot, SettingsState};
pub use view::render_settings;
