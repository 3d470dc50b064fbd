use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use crate::api::models::{Order, TaskStatus};
use crate::ui::dashboard::state::DashboardState;
use crate::ui::projects::ProjectsState;
use crate::ui::table::{header_row, widths, Column};
use crate::ui::tasks::TasksState;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};

pub const ORDER_COLUMNS: [Column; 5] = [
    Column::new("id", "Order number", Constraint::Length(15)),
    Column::new("date", "Purchase date", Constraint::Length(15)),
    Column::new("customer.name", "Customer", Constraint::Min(18)),
    Column::new("event.name", "Event", Constraint::Min(20)),
    Column::new("amount.usd", "Amount", Constraint::Length(10)),
];

pub fn render_dashboard(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &DashboardState,
    tasks: &TasksState,
    projects: &ProjectsState,
) {
    let stats_height = 3.min(area.height);
    let stats_area = Rect {
        height: stats_height,
        ..area
    };
    let orders_area = Rect {
        y: area.y + stats_height,
        height: area.height.saturating_sub(stats_height),
        ..area
    };

    frame.render_widget(stats_line(tasks, projects), stats_area);

    let rows = state.visible_orders();
    let table = Table::new(rows.iter().map(order_row), widths(&ORDER_COLUMNS))
        .header(header_row(&ORDER_COLUMNS, &state.sort))
        .row_highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
        .block(
            Block::default()
                .title(Span::styled(
                    " Recent orders ",
                    Style::default().fg(HEADER_TEXT),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );

    let mut table_state = TableState::default().with_selected(Some(state.selected));
    frame.render_stateful_widget(table, orders_area, &mut table_state);
}

fn stats_line(tasks: &TasksState, projects: &ProjectsState) -> Paragraph<'static> {
    let open = count_status(tasks, TaskStatus::Open);
    let in_progress = count_status(tasks, TaskStatus::InProgress);
    let overdue = count_status(tasks, TaskStatus::Overdue);
    let completed = count_status(tasks, TaskStatus::Completed);

    let stat = |label: &str, value: usize, color| {
        vec![
            Span::styled(
                format!("{} ", value),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(label.to_string(), Style::default().fg(MUTED_TEXT)),
            Span::styled("   ", Style::default()),
        ]
    };

    let mut spans = Vec::new();
    spans.extend(stat("open", open, HEADER_TEXT));
    spans.extend(stat("in progress", in_progress, ACCENT));
    spans.extend(stat("overdue", overdue, STATUS_ERROR));
    spans.extend(stat("completed", completed, STATUS_OK));
    spans.extend(stat("projects", projects.projects.len(), HEADER_TEXT));

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .title(Span::styled(" Overview ", Style::default().fg(HEADER_TEXT))),
    )
}

fn count_status(tasks: &TasksState, status: TaskStatus) -> usize {
    tasks.tasks.iter().filter(|t| t.status == status).count()
}

fn order_row(order: &Order) -> Row<'static> {
    let event = order
        .event
        .as_ref()
        .map(|e| e.name.clone())
        .unwrap_or_else(|| "-".to_string());

    Row::new(vec![
        Cell::from(format!("{}", order.id)),
        Cell::from(Span::styled(
            order.date.format("%Y-%m-%d").to_string(),
            Style::default().fg(MUTED_TEXT),
        )),
        Cell::from(order.customer.name.clone()),
        Cell::from(event),
        Cell::from(Span::styled(
            format!("US{}", order.amount.usd),
            Style::default().fg(HEADER_TEXT),
        )),
    ])
    .height(1)
}
