use ratatui::widgets::Clear;
use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::dashboard::render_dashboard;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::login::render_login;
use crate::ui::planner::render_planner;
use crate::ui::projects::render_projects;
use crate::ui::settings::render_settings;
use crate::ui::tasks::render_tasks;
use crate::ui::app::Screen;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let signed_in = app.is_authenticated();
    let screen = signed_in.then(|| app.screen());

    frame.render_widget(Header::new().widget(app.screen(), app.user()), header);
    frame.render_widget(Clear, body);

    match screen {
        None => render_login(frame, body, app.login_state()),
        Some(Screen::Dashboard) => render_dashboard(
            frame,
            body,
            app.dashboard_state(),
            app.tasks_state(),
            app.projects_state(),
        ),
        Some(Screen::Tasks) => render_tasks(frame, body, app.tasks_state()),
        Some(Screen::Projects) => render_projects(frame, body, app.projects_state()),
        Some(Screen::Planner) => render_planner(frame, body, app.planner_state()),
        Some(Screen::Settings) => render_settings(frame, body, app.settings_state()),
    }

    frame.render_widget(
        Footer::new().widget(footer, screen, app.status_line()),
        footer,
    );
}
