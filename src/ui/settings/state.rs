use crate::api::models::UserSettings;
use crate::ui::mvi::UiState;

/// Which preference a field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingId {
    TextSize,
    DateFormat,
    TimeFormat,
    EnableAi,
    AiProvider,
}

/// An editable view of one preference: a label plus the option list the
/// field cycles through.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsFieldSnapshot {
    pub id: SettingId,
    pub label: &'static str,
    pub options: Vec<String>,
    pub selected: usize,
}

impl SettingsFieldSnapshot {
    pub fn value(&self) -> &str {
        self.options
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or_default()
    }

    fn new(id: SettingId, label: &'static str, options: &[&str], current: &str) -> Self {
        let selected = options.iter().position(|o| *o == current).unwrap_or(0);
        Self {
            id,
            label,
            options: options.iter().map(|o| o.to_string()).collect(),
            selected,
        }
    }
}

/// Build the editable field list from the stored settings.
pub fn snapshot_fields(settings: &UserSettings) -> Vec<SettingsFieldSnapshot> {
    let ai_value = if settings.enable_ai_features {
        "enabled"
    } else {
        "disabled"
    };
    vec![
        SettingsFieldSnapshot::new(
            SettingId::TextSize,
            "Text size",
            &["small", "normal", "large"],
            &settings.text_size,
        ),
        SettingsFieldSnapshot::new(
            SettingId::DateFormat,
            "Date format",
            &["MM/DD/YYYY", "DD/MM/YYYY", "YYYY-MM-DD"],
            &settings.date_format,
        ),
        SettingsFieldSnapshot::new(
            SettingId::TimeFormat,
            "Time format",
            &["12", "24"],
            &settings.time_format,
        ),
        SettingsFieldSnapshot::new(
            SettingId::EnableAi,
            "AI features",
            &["enabled", "disabled"],
            ai_value,
        ),
        SettingsFieldSnapshot::new(
            SettingId::AiProvider,
            "AI provider",
            &["openai", "anthropic"],
            &settings.preferred_ai_provider,
        ),
    ]
}

/// Fold the edited fields back into a settings payload.
pub fn apply_fields(fields: &[SettingsFieldSnapshot]) -> UserSettings {
    let mut settings = UserSettings::default();
    for field in fields {
        match field.id {
            SettingId::TextSize => settings.text_size = field.value().to_string(),
            SettingId::DateFormat => settings.date_format = field.value().to_string(),
            SettingId::TimeFormat => settings.time_format = field.value().to_string(),
            SettingId::EnableAi => settings.enable_ai_features = field.value() == "enabled",
            SettingId::AiProvider => {
                settings.preferred_ai_provider = field.value().to_string()
            }
        }
    }
    settings
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SettingsState {
    /// Waiting for the stored settings to arrive.
    #[default]
    Loading,
    Ready {
        fields: Vec<SettingsFieldSnapshot>,
        focused: usize,
        dirty: bool,
        /// When true, next Escape will discard changes. Set on first Escape
        /// when dirty.
        confirm_discard: bool,
    },
}

impl UiState for SettingsState {}

impl SettingsState {
    pub fn is_ready(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}
