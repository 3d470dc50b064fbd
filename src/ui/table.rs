//! Sortable table headers.
//!
//! Tables bind each column to a sort key; pressing the column's number
//! cycles that column through ascending, descending, and unsorted. The
//! active column shows a direction glyph, mirroring the chevron pair on
//! the web client's headers.

use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Row};

use crate::sort::{SortDirection, SortState};
use crate::ui::theme::{HEADER_TEXT, MUTED_TEXT, SORT_INDICATOR};

/// One column of a sortable table.
pub struct Column {
    /// Sort key resolved against the row type (may be nested, e.g.
    /// `"customer.name"`).
    pub key: &'static str,
    pub title: &'static str,
    pub constraint: Constraint,
}

impl Column {
    pub const fn new(key: &'static str, title: &'static str, constraint: Constraint) -> Self {
        Self {
            key,
            title,
            constraint,
        }
    }
}

/// The sort key bound to the `n`-th column (1-based, as shown in headers).
pub fn column_key(columns: &[Column], number: usize) -> Option<&'static str> {
    if number == 0 {
        return None;
    }
    columns.get(number - 1).map(|c| c.key)
}

pub fn widths(columns: &[Column]) -> Vec<Constraint> {
    columns.iter().map(|c| c.constraint).collect()
}

/// Build the header row, marking the active sort column.
pub fn header_row(columns: &[Column], sort: &SortState) -> Row<'static> {
    let cells: Vec<Cell> = columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let mut spans = vec![
                Span::styled(format!("{} ", idx + 1), Style::default().fg(MUTED_TEXT)),
                Span::styled(
                    column.title.to_string(),
                    Style::default()
                        .fg(HEADER_TEXT)
                        .add_modifier(Modifier::BOLD),
                ),
            ];
            if let Some(direction) = sort.direction_for(column.key) {
                let glyph = match direction {
                    SortDirection::Ascending => " ▲",
                    SortDirection::Descending => " ▼",
                };
                spans.push(Span::styled(glyph, Style::default().fg(SORT_INDICATOR)));
            }
            Cell::from(Line::from(spans))
        })
        .collect();
    Row::new(cells).height(1)
}
