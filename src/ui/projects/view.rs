use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use crate::api::models::Project;
use crate::ui::projects::state::ProjectsState;
use crate::ui::table::{header_row, widths, Column};
use crate::ui::theme::{
    project_status_color, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
};

pub const PROJECT_COLUMNS: [Column; 5] = [
    Column::new("name", "Project", Constraint::Min(24)),
    Column::new("status", "Status", Constraint::Length(13)),
    Column::new("progress", "Progress", Constraint::Length(10)),
    Column::new("due_date", "Due Date", Constraint::Length(12)),
    Column::new("total_tasks", "Tasks", Constraint::Length(9)),
];

pub fn render_projects(frame: &mut Frame<'_>, area: Rect, state: &ProjectsState) {
    let rows = state.visible_projects();
    let table = Table::new(rows.iter().map(project_row), widths(&PROJECT_COLUMNS))
        .header(header_row(&PROJECT_COLUMNS, &state.sort))
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" Projects ({}) ", rows.len()),
                    Style::default().fg(HEADER_TEXT),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn project_row(project: &Project) -> Row<'static> {
    let due = project
        .due_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());

    Row::new(vec![
        Cell::from(project.name.clone()),
        Cell::from(Span::styled(
            project.status.as_str(),
            Style::default().fg(project_status_color(project.status)),
        )),
        Cell::from(format!("{:>3}%", project.progress)),
        Cell::from(Span::styled(due, Style::default().fg(MUTED_TEXT))),
        Cell::from(Span::styled(
            format!("{}/{}", project.completed_tasks, project.total_tasks),
            Style::default().fg(MUTED_TEXT),
        )),
    ])
    .height(1)
}
