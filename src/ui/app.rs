use crate::api::models::User;
use crate::config::ConfigStore;
use crate::ui::bridge::{DataCommand, DataCommandSender};
use crate::ui::dashboard::{DashboardIntent, DashboardReducer, DashboardState};
use crate::ui::events::AppEvent;
use crate::ui::login::{LoginIntent, LoginReducer, LoginState};
use crate::ui::mvi::Reducer;
use crate::ui::planner::{PlannerIntent, PlannerReducer, PlannerState};
use crate::ui::projects::{ProjectsIntent, ProjectsReducer, ProjectsState};
use crate::ui::settings::{apply_fields, SettingsIntent, SettingsReducer, SettingsState};
use crate::ui::tasks::{TasksIntent, TasksReducer, TasksState};

/// The screens behind the sign-in gate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Dashboard,
    Tasks,
    Projects,
    Planner,
    Settings,
}

/// How many ticks a transient status line stays visible.
const STATUS_TTL_TICKS: u8 = 20;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    /// The signed-in user. `None` routes every draw to the login screen.
    user: Option<User>,
    status_line: Option<String>,
    status_ttl: u8,
    login: LoginState,
    dashboard: DashboardState,
    tasks: TasksState,
    projects: ProjectsState,
    planner: PlannerState,
    settings: SettingsState,
    commands: Option<DataCommandSender>,
    config: ConfigStore,
}

impl App {
    pub fn new(config: ConfigStore) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Dashboard,
            user: None,
            status_line: None,
            status_ttl: 0,
            login: LoginState::default(),
            dashboard: DashboardState::default(),
            tasks: TasksState::default(),
            projects: ProjectsState::default(),
            planner: PlannerState::default(),
            settings: SettingsState::default(),
            commands: None,
            config,
        }
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn set_command_sender(&mut self, sender: DataCommandSender) {
        self.commands = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn status_line(&self) -> Option<&str> {
        self.status_line.as_deref()
    }

    // -- Screen states -----------------------------------------------------

    pub fn login_state(&self) -> &LoginState {
        &self.login
    }

    pub fn dashboard_state(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn tasks_state(&self) -> &TasksState {
        &self.tasks
    }

    pub fn projects_state(&self) -> &ProjectsState {
        &self.projects
    }

    pub fn planner_state(&self) -> &PlannerState {
        &self.planner
    }

    pub fn settings_state(&self) -> &SettingsState {
        &self.settings
    }

    // -- Navigation --------------------------------------------------------

    /// Switch to a screen and request the data it shows.
    ///
    /// Ignored while signed out: the login screen is the only reachable
    /// view until authentication succeeds.
    pub fn navigate(&mut self, screen: Screen) {
        if !self.is_authenticated() {
            return;
        }
        self.screen = screen;
        match screen {
            Screen::Dashboard => {
                self.send_command(DataCommand::FetchOrders);
                self.send_command(DataCommand::FetchTasks);
                self.send_command(DataCommand::FetchProjects);
            }
            Screen::Tasks => {
                self.send_command(DataCommand::FetchTasks);
            }
            Screen::Projects => {
                self.send_command(DataCommand::FetchProjects);
            }
            Screen::Planner => {
                self.dispatch_planner(PlannerIntent::Opened {
                    now: chrono::Utc::now(),
                });
            }
            Screen::Settings => {
                self.send_command(DataCommand::FetchSettings);
            }
        }
    }

    // -- Authentication flow -----------------------------------------------

    /// Try to resume a stored session at startup.
    pub fn resume_session(&mut self) {
        self.send_command(DataCommand::ResumeSession);
    }

    /// Submit the login form.
    pub fn submit_login(&mut self) {
        if !self.login.can_submit() {
            return;
        }
        let email = self.login.email.clone();
        let password = self.login.password.clone();
        self.dispatch_login(LoginIntent::Submitting);
        self.send_command(DataCommand::SignIn { email, password });
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.send_command(DataCommand::SignOut);
        self.dispatch_login(LoginIntent::Reset);
        self.screen = Screen::Dashboard;
    }

    // -- Data events -------------------------------------------------------

    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SignedIn(user) => {
                tracing::info!("signed in as {}", user.email);
                self.user = Some(user);
                self.dispatch_login(LoginIntent::Reset);
                self.screen = Screen::Dashboard;
                self.send_command(DataCommand::FetchOrders);
                self.send_command(DataCommand::FetchTasks);
                self.send_command(DataCommand::FetchProjects);
            }
            AppEvent::AuthFailed(message) => {
                if self.is_authenticated() {
                    self.set_status(format!("Sign-in refresh failed: {}", message));
                } else {
                    self.dispatch_login(LoginIntent::Failed { message });
                }
            }
            AppEvent::SessionExpired => {
                self.user = None;
                self.dispatch_login(LoginIntent::SessionExpired);
            }
            AppEvent::TasksLoaded(tasks) => {
                self.dispatch_tasks(TasksIntent::Loaded { tasks });
            }
            AppEvent::ProjectsLoaded(projects) => {
                self.dispatch_projects(ProjectsIntent::Loaded { projects });
            }
            AppEvent::OrdersLoaded(orders) => {
                self.dispatch_dashboard(DashboardIntent::Loaded { orders });
            }
            AppEvent::SettingsLoaded(settings) => {
                self.dispatch_settings(SettingsIntent::Loaded { settings });
            }
            AppEvent::SettingsSaved(settings) => {
                self.dispatch_settings(SettingsIntent::Saved { settings });
                self.set_status("Settings saved".to_string());
            }
            AppEvent::TaskCreated(task) => {
                self.set_status(format!("Task created: {}", task.title));
                self.dispatch_tasks(TasksIntent::Created { task });
            }
            AppEvent::ApiFailure(message) => {
                self.set_status(message);
            }
            // Key/Tick/Resize are routed by the runtime, not here.
            AppEvent::Key(_) | AppEvent::Tick | AppEvent::Resize(..) => {}
        }
    }

    pub fn on_tick(&mut self) {
        if self.status_ttl > 0 {
            self.status_ttl -= 1;
            if self.status_ttl == 0 {
                self.status_line = None;
            }
        }
    }

    // -- Screen actions ----------------------------------------------------

    /// Add the selected planner suggestion as a task.
    pub fn add_selected_suggestion(&mut self) {
        let Some(suggestion) = self.planner.selected_suggestion() else {
            return;
        };
        self.send_command(DataCommand::CreateTask(suggestion.to_task_create(None)));
    }

    /// Push the edited settings to the backend.
    pub fn save_settings(&mut self) {
        let SettingsState::Ready { fields, dirty, .. } = &self.settings else {
            return;
        };
        if !dirty {
            return;
        }
        let settings = apply_fields(fields);
        self.send_command(DataCommand::SaveSettings(settings));
    }

    /// Settings screen closed (reducer reverted to Loading): go back.
    pub fn on_settings_closed(&mut self) {
        if self.screen == Screen::Settings && !self.settings.is_ready() {
            self.screen = Screen::Dashboard;
        }
    }

    // -- MVI dispatch ------------------------------------------------------

    pub fn dispatch_login(&mut self, intent: LoginIntent) {
        dispatch_mvi!(self, login, LoginReducer, intent);
    }

    pub fn dispatch_dashboard(&mut self, intent: DashboardIntent) {
        dispatch_mvi!(self, dashboard, DashboardReducer, intent);
    }

    pub fn dispatch_tasks(&mut self, intent: TasksIntent) {
        dispatch_mvi!(self, tasks, TasksReducer, intent);
    }

    pub fn dispatch_projects(&mut self, intent: ProjectsIntent) {
        dispatch_mvi!(self, projects, ProjectsReducer, intent);
    }

    pub fn dispatch_planner(&mut self, intent: PlannerIntent) {
        dispatch_mvi!(self, planner, PlannerReducer, intent);
    }

    pub fn dispatch_settings(&mut self, intent: SettingsIntent) {
        dispatch_mvi!(self, settings, SettingsReducer, intent);
    }

    // -- Plumbing ----------------------------------------------------------

    fn set_status(&mut self, message: String) {
        self.status_line = Some(message);
        self.status_ttl = STATUS_TTL_TICKS;
    }

    fn send_command(&mut self, command: DataCommand) {
        let Some(sender) = &self.commands else {
            return;
        };
        if let Err(err) = sender.try_send(command) {
            self.set_status(format!("Backend queue full: {}", err));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigStore};
    use std::path::PathBuf;

    fn make_app() -> App {
        let config = ConfigStore::new(Config::default(), PathBuf::from("/tmp/test.toml"));
        App::new(config)
    }

    fn signed_in_app() -> App {
        let mut app = make_app();
        app.on_event(AppEvent::SignedIn(crate::data::sample_user()));
        app
    }

    // -- auth gating -------------------------------------------------------

    #[test]
    fn starts_signed_out() {
        let app = make_app();
        assert!(!app.is_authenticated());
    }

    #[test]
    fn navigation_ignored_while_signed_out() {
        let mut app = make_app();
        app.navigate(Screen::Tasks);
        assert_eq!(app.screen(), Screen::Dashboard);
        assert!(!app.is_authenticated());
    }

    #[test]
    fn signed_in_lands_on_dashboard() {
        let app = signed_in_app();
        assert!(app.is_authenticated());
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[test]
    fn navigation_works_when_signed_in() {
        let mut app = signed_in_app();
        app.navigate(Screen::Projects);
        assert_eq!(app.screen(), Screen::Projects);
    }

    #[test]
    fn session_expiry_signs_out() {
        let mut app = signed_in_app();
        app.on_event(AppEvent::SessionExpired);
        assert!(!app.is_authenticated());
        assert!(app.login_state().error.is_some());
    }

    #[test]
    fn sign_out_clears_user() {
        let mut app = signed_in_app();
        app.sign_out();
        assert!(!app.is_authenticated());
    }

    // -- data events -------------------------------------------------------

    #[test]
    fn tasks_loaded_populates_state() {
        let mut app = signed_in_app();
        app.on_event(AppEvent::TasksLoaded(crate::data::sample_tasks()));
        assert!(app.tasks_state().loaded);
        assert_eq!(app.tasks_state().tasks.len(), 6);
    }

    #[test]
    fn api_failure_sets_status_line() {
        let mut app = signed_in_app();
        app.on_event(AppEvent::ApiFailure("boom".to_string()));
        assert_eq!(app.status_line(), Some("boom"));
    }

    #[test]
    fn status_line_expires_after_ticks() {
        let mut app = signed_in_app();
        app.on_event(AppEvent::ApiFailure("boom".to_string()));
        for _ in 0..STATUS_TTL_TICKS {
            app.on_tick();
        }
        assert_eq!(app.status_line(), None);
    }
}
