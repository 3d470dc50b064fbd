use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::api::models::Task;
use crate::ui::table::{header_row, widths, Column};
use crate::ui::tasks::state::TasksState;
use crate::ui::theme::{
    priority_color, task_status_color, ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT,
    MUTED_TEXT,
};

pub const TASK_COLUMNS: [Column; 6] = [
    Column::new("title", "Task", Constraint::Min(24)),
    Column::new("priority", "Priority", Constraint::Length(10)),
    Column::new("due_date", "Due Date", Constraint::Length(12)),
    Column::new("status", "Status", Constraint::Length(13)),
    Column::new("project.name", "Project", Constraint::Length(22)),
    Column::new("assignee.name", "Assignee", Constraint::Length(16)),
];

pub fn render_tasks(frame: &mut Frame<'_>, area: Rect, state: &TasksState) {
    let filter_height = 1.min(area.height);
    let filter_area = Rect {
        height: filter_height,
        ..area
    };
    let table_area = Rect {
        y: area.y + filter_height,
        height: area.height.saturating_sub(filter_height),
        ..area
    };

    frame.render_widget(filter_line(state), filter_area);

    let rows = state.visible_tasks();
    let table = Table::new(rows.iter().map(task_row), widths(&TASK_COLUMNS))
        .header(header_row(&TASK_COLUMNS, &state.sort))
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" Tasks ({}) ", rows.len()),
                    Style::default().fg(HEADER_TEXT),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, table_area, &mut table_state);
}

fn filter_line(state: &TasksState) -> Paragraph<'static> {
    let mut spans = Vec::new();
    if state.search_active {
        spans.push(Span::styled("Search: ", Style::default().fg(ACCENT)));
        spans.push(Span::styled(
            format!("{}█", state.search),
            Style::default().fg(HEADER_TEXT),
        ));
    } else {
        let search_label = if state.search.is_empty() {
            "/ search".to_string()
        } else {
            format!("search: {}", state.search)
        };
        spans.push(Span::styled(search_label, Style::default().fg(MUTED_TEXT)));
    }
    spans.push(Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER)));
    let status = state
        .status_filter
        .map(|s| s.as_str())
        .unwrap_or("All Status");
    spans.push(Span::styled(
        format!("s: {}", status),
        Style::default().fg(MUTED_TEXT),
    ));
    spans.push(Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER)));
    let priority = state
        .priority_filter
        .map(|p| p.as_str())
        .unwrap_or("All Priority");
    spans.push(Span::styled(
        format!("r: {}", priority),
        Style::default().fg(MUTED_TEXT),
    ));
    Paragraph::new(Line::from(spans))
}

fn task_row(task: &Task) -> Row<'static> {
    let due = task
        .due_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    let project = task
        .project
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "-".to_string());
    let assignee = task
        .assignee
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "-".to_string());

    Row::new(vec![
        Cell::from(task.title.clone()),
        Cell::from(Span::styled(
            task.priority.as_str(),
            Style::default().fg(priority_color(task.priority)),
        )),
        Cell::from(Span::styled(due, Style::default().fg(MUTED_TEXT))),
        Cell::from(Span::styled(
            task.status.as_str(),
            Style::default().fg(task_status_color(task.status)),
        )),
        Cell::from(Span::styled(project, Style::default().fg(MUTED_TEXT))),
        Cell::from(Span::styled(assignee, Style::default().fg(MUTED_TEXT))),
    ])
    .height(1)
}
