use crate::api::models::UserSettings;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SettingsIntent {
    Loaded { settings: UserSettings },
    /// User pressed Escape. If dirty and not yet confirming, sets the
    /// confirm_discard flag. If clean or already confirming, reverts to
    /// Loading so the next visit refetches.
    RequestClose,
    MoveUp,
    MoveDown,
    /// Step the focused field to its next option.
    CycleValue,
    /// A save round-tripped; the backend's copy is now current.
    Saved { settings: UserSettings },
}

impl Intent for SettingsIntent {}
