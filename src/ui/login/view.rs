use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::login::state::{LoginField, LoginState};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

const DIALOG_WIDTH: u16 = 48;
const DIALOG_HEIGHT: u16 = 9;

pub fn render_login(frame: &mut Frame<'_>, area: Rect, state: &LoginState) {
    let dialog = centered_rect_by_size(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    frame.render_widget(Clear, dialog);

    let field = |label: &str, value: &str, focused: bool, masked: bool| {
        let shown = if masked {
            "•".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let cursor = if focused { "█" } else { "" };
        let label_style = if focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(MUTED_TEXT)
        };
        Line::from(vec![
            Span::styled(format!(" {:<10}", label), label_style),
            Span::styled(format!("{}{}", shown, cursor), Style::default().fg(HEADER_TEXT)),
        ])
    };

    let mut lines = vec![
        Line::from(""),
        field(
            "Email:",
            &state.email,
            state.focus == LoginField::Email,
            false,
        ),
        Line::from(""),
        field(
            "Password:",
            &state.password,
            state.focus == LoginField::Password,
            true,
        ),
        Line::from(""),
    ];

    if state.submitting {
        lines.push(Line::from(Span::styled(
            " Signing in...",
            Style::default().fg(MUTED_TEXT),
        )));
    } else if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(STATUS_ERROR),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            " Tab: switch field  Enter: sign in",
            Style::default().fg(MUTED_TEXT),
        )));
    }

    let block = Block::default()
        .title(Span::styled(" Sign in ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), dialog);
}
