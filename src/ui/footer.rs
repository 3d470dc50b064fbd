use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::Screen;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_WARN};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(
        &self,
        area: Rect,
        screen: Option<Screen>,
        status: Option<&str>,
    ) -> Paragraph<'static> {
        let hints = match screen {
            None => " Tab: Switch field │ Enter: Sign in │ Ctrl+Q: Quit",
            Some(Screen::Dashboard) => {
                " 1-5: Sort column │ ↑/↓: Select │ Ctrl+L: Sign out │ Ctrl+Q: Quit"
            }
            Some(Screen::Tasks) => {
                " 1-6: Sort │ /: Search │ s: Status │ r: Priority │ ↑/↓: Select │ Ctrl+Q: Quit"
            }
            Some(Screen::Projects) => {
                " 1-5: Sort column │ ↑/↓: Select │ Ctrl+L: Sign out │ Ctrl+Q: Quit"
            }
            Some(Screen::Planner) => {
                " Enter: Send/Add │ ↑/↓: Select suggestion │ Alt+1-4: Sort │ Ctrl+Q: Quit"
            }
            Some(Screen::Settings) => {
                " ↑/↓: Move │ Enter: Change │ Ctrl+S: Save │ Esc: Back │ Ctrl+Q: Quit"
            }
        };

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        // Transient status (API errors, confirmations) takes over the line.
        let line = if let Some(status) = status {
            Line::from(Span::styled(
                format!(" {}", status),
                Style::default().fg(STATUS_WARN),
            ))
        } else {
            let version = format!("v{} ", VERSION);
            let hints_width = hints.chars().count();
            let version_width = version.chars().count();
            let content_width = area.width.saturating_sub(2) as usize;
            let padding = content_width
                .saturating_sub(hints_width)
                .saturating_sub(version_width);
            Line::from(vec![
                Span::styled(hints, text_style),
                Span::styled(" ".repeat(padding), text_style),
                Span::styled(version, text_style),
            ])
        };

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
