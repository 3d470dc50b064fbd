use ratatui::style::Color;

use crate::api::models::{Priority, ProjectStatus, TaskStatus};

pub const ACCENT: Color = Color::Rgb(0x60, 0xa5, 0xfa);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x71, 0x71, 0x7a);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_WARN: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
/// Glyph color for the active sort column's direction indicator.
pub const SORT_INDICATOR: Color = Color::Rgb(0xfa, 0xfa, 0xfa);

/// Badge color for a task priority, matching the web client's palette.
pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => STATUS_ERROR,
        Priority::Medium => STATUS_WARN,
        Priority::Low => STATUS_OK,
    }
}

pub fn task_status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Completed => STATUS_OK,
        TaskStatus::InProgress => ACCENT,
        TaskStatus::Overdue => STATUS_ERROR,
        TaskStatus::Open => MUTED_TEXT,
    }
}

pub fn project_status_color(status: ProjectStatus) -> Color {
    match status {
        ProjectStatus::Completed => STATUS_OK,
        ProjectStatus::InProgress => ACCENT,
        ProjectStatus::OnHold => STATUS_WARN,
        ProjectStatus::Planning => MUTED_TEXT,
    }
}
