use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use crate::planner::{ChatRole, TaskSuggestion};
use crate::ui::planner::state::PlannerState;
use crate::ui::table::{header_row, widths, Column};
use crate::ui::theme::{
    priority_color, ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
};

pub const SUGGESTION_COLUMNS: [Column; 4] = [
    Column::new("title", "Task", Constraint::Min(24)),
    Column::new("priority", "Priority", Constraint::Length(10)),
    Column::new("estimated_duration", "Duration", Constraint::Length(11)),
    Column::new("project", "Project", Constraint::Length(18)),
];

const INPUT_HEIGHT: u16 = 3;
const SUGGESTIONS_HEIGHT: u16 = 8;

pub fn render_planner(frame: &mut Frame<'_>, area: Rect, state: &PlannerState) {
    let input_area = Rect {
        y: area.y + area.height.saturating_sub(INPUT_HEIGHT),
        height: INPUT_HEIGHT.min(area.height),
        ..area
    };

    let has_suggestions = state.latest_suggestions().is_some();
    let suggestions_height = if has_suggestions {
        SUGGESTIONS_HEIGHT.min(area.height.saturating_sub(INPUT_HEIGHT))
    } else {
        0
    };
    let suggestions_area = Rect {
        y: input_area.y.saturating_sub(suggestions_height),
        height: suggestions_height,
        ..area
    };
    let transcript_area = Rect {
        height: area
            .height
            .saturating_sub(INPUT_HEIGHT + suggestions_height),
        ..area
    };

    render_transcript(frame, transcript_area, state);
    if let Some(message) = state.latest_suggestions() {
        let sorted = state.sorted_suggestions(message);
        let sort = state.sort_for(message.id);
        let table = Table::new(
            sorted.iter().map(suggestion_row),
            widths(&SUGGESTION_COLUMNS),
        )
        .header(header_row(&SUGGESTION_COLUMNS, &sort))
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .block(
            Block::default()
                .title(Span::styled(
                    " Suggested tasks (Enter on input empty: add selected) ",
                    Style::default().fg(HEADER_TEXT),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
        let mut table_state =
            TableState::default().with_selected(Some(state.selected_suggestion));
        frame.render_stateful_widget(table, suggestions_area, &mut table_state);
    }

    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(ACCENT)),
        Span::styled(
            format!("{}█", state.input),
            Style::default().fg(HEADER_TEXT),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .title(Span::styled(
                " Describe your event ",
                Style::default().fg(MUTED_TEXT),
            )),
    );
    frame.render_widget(input, input_area);
}

fn render_transcript(frame: &mut Frame<'_>, area: Rect, state: &PlannerState) {
    let mut lines: Vec<Line> = Vec::new();
    for message in &state.messages {
        let (label, style) = match message.role {
            ChatRole::User => ("you", Style::default().fg(ACCENT)),
            ChatRole::Assistant => ("assistant", Style::default().fg(HEADER_TEXT)),
        };
        lines.push(Line::from(Span::styled(
            format!("{} · {}", label, message.timestamp.format("%H:%M")),
            style,
        )));
        for text_line in message.content.lines() {
            lines.push(Line::from(Span::styled(
                text_line.to_string(),
                Style::default().fg(MUTED_TEXT),
            )));
        }
        lines.push(Line::from(""));
    }

    // Keep the tail visible; scroll walks back through history.
    let visible = area.height.saturating_sub(2) as usize;
    let offset = lines
        .len()
        .saturating_sub(visible)
        .saturating_sub(state.scroll);

    let transcript = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((offset as u16, 0))
        .block(
            Block::default()
                .title(Span::styled(" Planner ", Style::default().fg(HEADER_TEXT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(transcript, area);
}

fn suggestion_row(suggestion: &TaskSuggestion) -> Row<'static> {
    Row::new(vec![
        Cell::from(suggestion.title.clone()),
        Cell::from(Span::styled(
            suggestion.priority.as_str(),
            Style::default().fg(priority_color(suggestion.priority)),
        )),
        Cell::from(Span::styled(
            suggestion.estimated_duration.clone(),
            Style::default().fg(MUTED_TEXT),
        )),
        Cell::from(Span::styled(
            suggestion.project.clone(),
            Style::default().fg(MUTED_TEXT),
        )),
    ])
    .height(1)
}
