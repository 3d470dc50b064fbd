//! Keyboard routing.
//!
//! Global chords use Ctrl so plain characters stay available to the text
//! inputs (login form, search box, planner chat). Table screens bind the
//! digit keys to their column headers for sort cycling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Screen};
use crate::ui::dashboard::{DashboardIntent, ORDER_COLUMNS};
use crate::ui::login::LoginIntent;
use crate::ui::planner::{PlannerIntent, SUGGESTION_COLUMNS};
use crate::ui::projects::{ProjectsIntent, PROJECT_COLUMNS};
use crate::ui::settings::SettingsIntent;
use crate::ui::table::column_key;
use crate::ui::tasks::{TasksIntent, TASK_COLUMNS};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if !app.is_authenticated() {
        handle_login_key(app, key);
        return;
    }

    if is_ctrl_char(key, 'd') {
        app.navigate(Screen::Dashboard);
        return;
    }
    if is_ctrl_char(key, 't') {
        app.navigate(Screen::Tasks);
        return;
    }
    if is_ctrl_char(key, 'p') {
        app.navigate(Screen::Projects);
        return;
    }
    if is_ctrl_char(key, 'a') {
        app.navigate(Screen::Planner);
        return;
    }
    if is_ctrl_char(key, 'e') {
        app.navigate(Screen::Settings);
        return;
    }
    if is_ctrl_char(key, 'l') {
        app.sign_out();
        return;
    }

    match app.screen() {
        Screen::Dashboard => handle_dashboard_key(app, key),
        Screen::Tasks => handle_tasks_key(app, key),
        Screen::Projects => handle_projects_key(app, key),
        Screen::Planner => handle_planner_key(app, key),
        Screen::Settings => handle_settings_key(app, key),
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => app.dispatch_login(LoginIntent::SwitchField),
        KeyCode::Enter => app.submit_login(),
        KeyCode::Backspace => app.dispatch_login(LoginIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_login(LoginIntent::Input(ch));
        }
        _ => {}
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.dispatch_dashboard(DashboardIntent::MoveUp),
        KeyCode::Down => app.dispatch_dashboard(DashboardIntent::MoveDown),
        KeyCode::Char(ch) => {
            if let Some(sort_key) = digit_column(ch, &ORDER_COLUMNS) {
                app.dispatch_dashboard(DashboardIntent::SortBy { key: sort_key });
            }
        }
        _ => {}
    }
}

fn handle_tasks_key(app: &mut App, key: KeyEvent) {
    if app.tasks_state().search_active {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => app.dispatch_tasks(TasksIntent::CloseSearch),
            KeyCode::Backspace => app.dispatch_tasks(TasksIntent::SearchBackspace),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.dispatch_tasks(TasksIntent::SearchInput(ch));
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Up => app.dispatch_tasks(TasksIntent::MoveUp),
        KeyCode::Down => app.dispatch_tasks(TasksIntent::MoveDown),
        KeyCode::Char('/') => app.dispatch_tasks(TasksIntent::OpenSearch),
        KeyCode::Char('s') => app.dispatch_tasks(TasksIntent::CycleStatusFilter),
        KeyCode::Char('r') => app.dispatch_tasks(TasksIntent::CyclePriorityFilter),
        KeyCode::Char(ch) => {
            if let Some(sort_key) = digit_column(ch, &TASK_COLUMNS) {
                app.dispatch_tasks(TasksIntent::SortBy { key: sort_key });
            }
        }
        _ => {}
    }
}

fn handle_projects_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.dispatch_projects(ProjectsIntent::MoveUp),
        KeyCode::Down => app.dispatch_projects(ProjectsIntent::MoveDown),
        KeyCode::Char(ch) => {
            if let Some(sort_key) = digit_column(ch, &PROJECT_COLUMNS) {
                app.dispatch_projects(ProjectsIntent::SortBy { key: sort_key });
            }
        }
        _ => {}
    }
}

fn handle_planner_key(app: &mut App, key: KeyEvent) {
    // Alt+digit sorts the suggestion table; plain digits are chat text.
    if key.modifiers.contains(KeyModifiers::ALT) {
        if let KeyCode::Char(ch) = key.code {
            if let Some(sort_key) = digit_column(ch, &SUGGESTION_COLUMNS) {
                app.dispatch_planner(PlannerIntent::SortSuggestions { key: sort_key });
            }
        }
        return;
    }

    match key.code {
        KeyCode::Up => app.dispatch_planner(PlannerIntent::SelectUp),
        KeyCode::Down => app.dispatch_planner(PlannerIntent::SelectDown),
        KeyCode::PageUp => app.dispatch_planner(PlannerIntent::ScrollUp),
        KeyCode::PageDown => app.dispatch_planner(PlannerIntent::ScrollDown),
        KeyCode::Backspace => app.dispatch_planner(PlannerIntent::Backspace),
        KeyCode::Enter => {
            if app.planner_state().input.trim().is_empty() {
                app.add_selected_suggestion();
            } else {
                app.dispatch_planner(PlannerIntent::Submit {
                    now: chrono::Utc::now(),
                });
            }
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_planner(PlannerIntent::Input(ch));
        }
        _ => {}
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 's') {
        app.save_settings();
        return;
    }
    match key.code {
        KeyCode::Up => app.dispatch_settings(SettingsIntent::MoveUp),
        KeyCode::Down => app.dispatch_settings(SettingsIntent::MoveDown),
        KeyCode::Enter | KeyCode::Char(' ') => app.dispatch_settings(SettingsIntent::CycleValue),
        KeyCode::Esc => {
            app.dispatch_settings(SettingsIntent::RequestClose);
            app.on_settings_closed();
        }
        _ => {}
    }
}

/// Map a digit key to the sort key of the matching 1-based column.
fn digit_column(ch: char, columns: &[crate::ui::table::Column]) -> Option<String> {
    let number = ch.to_digit(10)? as usize;
    column_key(columns, number).map(|k| k.to_string())
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
