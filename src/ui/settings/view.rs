use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::settings::state::SettingsState;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_WARN,
};

pub fn render_settings(frame: &mut Frame<'_>, area: Rect, state: &SettingsState) {
    let mut lines: Vec<Line> = vec![Line::from("")];

    match state {
        SettingsState::Loading => {
            lines.push(Line::from(Span::styled(
                " Loading settings...",
                Style::default().fg(MUTED_TEXT),
            )));
        }
        SettingsState::Ready {
            fields,
            focused,
            dirty,
            confirm_discard,
        } => {
            for (idx, field) in fields.iter().enumerate() {
                let is_focused = idx == *focused;
                let marker = if is_focused { "›" } else { " " };
                let label_style = if is_focused {
                    Style::default().fg(ACCENT)
                } else {
                    Style::default().fg(HEADER_TEXT)
                };
                lines.push(Line::from(vec![
                    Span::styled(format!(" {} ", marker), label_style),
                    Span::styled(format!("{:<14}", field.label), label_style),
                    Span::styled(field.value().to_string(), Style::default().fg(HEADER_TEXT)),
                ]));
            }
            lines.push(Line::from(""));
            if *confirm_discard {
                lines.push(Line::from(Span::styled(
                    " Unsaved changes. Press Esc again to discard.",
                    Style::default().fg(STATUS_WARN),
                )));
            } else if *dirty {
                lines.push(Line::from(Span::styled(
                    " Modified. Ctrl+S: save  Esc: discard",
                    Style::default().fg(STATUS_WARN),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    " Up/Down: move  Enter: change  Esc: back",
                    Style::default().fg(MUTED_TEXT),
                )));
            }
        }
    }

    let block = Block::default()
        .title(Span::styled(" Settings ", Style::default().fg(HEADER_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
