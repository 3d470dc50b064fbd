use crate::ui::mvi::Reducer;
use crate::ui::settings::intent::SettingsIntent;
use crate::ui::settings::state::{snapshot_fields, SettingsState};

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsState;
    type Intent = SettingsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SettingsIntent::Loaded { settings } => SettingsState::Ready {
                fields: snapshot_fields(&settings),
                focused: 0,
                dirty: false,
                confirm_discard: false,
            },
            SettingsIntent::Saved { settings } => SettingsState::Ready {
                fields: snapshot_fields(&settings),
                focused: match state {
                    SettingsState::Ready { focused, .. } => focused,
                    SettingsState::Loading => 0,
                },
                dirty: false,
                confirm_discard: false,
            },
            SettingsIntent::RequestClose => match state {
                SettingsState::Ready {
                    dirty: true,
                    confirm_discard: false,
                    fields,
                    focused,
                    ..
                } => {
                    // First Escape with unsaved changes: ask for confirmation
                    SettingsState::Ready {
                        fields,
                        focused,
                        dirty: true,
                        confirm_discard: true,
                    }
                }
                _ => {
                    // Clean state or already confirming: leave the screen
                    SettingsState::Loading
                }
            },
            SettingsIntent::MoveUp => match state {
                SettingsState::Ready {
                    fields,
                    focused,
                    dirty,
                    ..
                } => {
                    let new_focused = if focused == 0 {
                        fields.len().saturating_sub(1)
                    } else {
                        focused - 1
                    };
                    SettingsState::Ready {
                        fields,
                        focused: new_focused,
                        dirty,
                        confirm_discard: false,
                    }
                }
                other => other,
            },
            SettingsIntent::MoveDown => match state {
                SettingsState::Ready {
                    fields,
                    focused,
                    dirty,
                    ..
                } => {
                    let new_focused = if focused + 1 >= fields.len() {
                        0
                    } else {
                        focused + 1
                    };
                    SettingsState::Ready {
                        fields,
                        focused: new_focused,
                        dirty,
                        confirm_discard: false,
                    }
                }
                other => other,
            },
            SettingsIntent::CycleValue => match state {
                SettingsState::Ready {
                    mut fields,
                    focused,
                    ..
                } => {
                    if let Some(field) = fields.get_mut(focused) {
                        if !field.options.is_empty() {
                            field.selected = (field.selected + 1) % field.options.len();
                        }
                    }
                    SettingsState::Ready {
                        fields,
                        focused,
                        dirty: true,
                        confirm_discard: false,
                    }
                }
                other => other,
            },
        }
    }
}
