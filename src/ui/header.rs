use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::api::models::User;
use crate::ui::app::Screen;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};

const TABS: [(Screen, &str, &str); 5] = [
    (Screen::Dashboard, "Dashboard", "^D"),
    (Screen::Tasks, "Tasks", "^T"),
    (Screen::Projects, "Projects", "^P"),
    (Screen::Planner, "Planner", "^A"),
    (Screen::Settings, "Settings", "^E"),
];

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, active: Screen, user: Option<&User>) -> Paragraph<'static> {
        let mut spans = vec![Span::styled(
            "  taskdeck  ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )];

        for (screen, label, chord) in TABS {
            spans.push(Span::styled("│ ", Style::default().fg(HEADER_SEPARATOR)));
            let style = if screen == active {
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            spans.push(Span::styled(format!("{} ", label), style));
            spans.push(Span::styled(
                format!("{} ", chord),
                Style::default().fg(HEADER_SEPARATOR),
            ));
        }

        if let Some(user) = user {
            spans.push(Span::styled("│  ", Style::default().fg(HEADER_SEPARATOR)));
            spans.push(Span::styled(
                user.email.clone(),
                Style::default().fg(MUTED_TEXT),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
