//! Bridge between the synchronous UI loop and the async API client.
//!
//! The UI never awaits: it sends a [`DataCommand`] into a tokio task and
//! gets the result back later as an [`AppEvent`]. In offline mode the
//! worker answers from the built-in sample collections instead of the
//! network, so every screen works without a backend.

use std::sync::mpsc::Sender as EventSender;

use tokio::sync::mpsc;

use crate::api::models::{TaskCreate, UserSettings};
use crate::api::{ApiClient, ApiError};
use crate::config::Session;
use crate::data;
use crate::ui::events::AppEvent;

/// Requests the UI can make of the backend worker.
#[derive(Debug)]
pub enum DataCommand {
    SignIn { email: String, password: String },
    SignOut,
    /// Validate a stored session token by fetching the current user.
    ResumeSession,
    FetchTasks,
    FetchProjects,
    FetchOrders,
    FetchSettings,
    SaveSettings(UserSettings),
    CreateTask(TaskCreate),
}

pub type DataCommandSender = mpsc::Sender<DataCommand>;

const COMMAND_BUFFER: usize = 32;

/// Spawn the worker task and return its command sender.
pub fn spawn_worker(
    client: ApiClient,
    session: Session,
    offline: bool,
    events: EventSender<AppEvent>,
) -> DataCommandSender {
    let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
    tokio::spawn(async move {
        let mut worker = Worker {
            client,
            session,
            offline,
            events,
        };
        worker.run(rx).await;
    });
    tx
}

struct Worker {
    client: ApiClient,
    session: Session,
    offline: bool,
    events: EventSender<AppEvent>,
}

impl Worker {
    async fn run(&mut self, mut rx: mpsc::Receiver<DataCommand>) {
        while let Some(command) = rx.recv().await {
            self.handle(command).await;
        }
    }

    fn emit(&self, event: AppEvent) {
        // The UI loop has exited if this fails; nothing left to do.
        let _ = self.events.send(event);
    }

    /// Map an API failure to the right event. 401 means the session died.
    fn emit_failure(&self, error: ApiError) {
        if error.is_unauthorized() {
            self.emit(AppEvent::SessionExpired);
        } else {
            self.emit(AppEvent::ApiFailure(error.to_string()));
        }
    }

    async fn handle(&mut self, command: DataCommand) {
        if self.offline {
            self.handle_offline(command);
            return;
        }

        match command {
            DataCommand::SignIn { email, password } => {
                match self.client.login(&email, &password).await {
                    Ok(token) => {
                        if let Err(err) = self
                            .session
                            .save(&crate::api::BearerToken::new(token.access_token))
                        {
                            tracing::warn!("could not persist session: {}", err);
                        }
                        match self.client.current_user().await {
                            Ok(user) => self.emit(AppEvent::SignedIn(user)),
                            Err(err) => self.emit(AppEvent::AuthFailed(err.to_string())),
                        }
                    }
                    Err(err) => self.emit(AppEvent::AuthFailed(err.to_string())),
                }
            }
            DataCommand::SignOut => {
                self.client.logout();
                if let Err(err) = self.session.clear() {
                    tracing::warn!("could not clear session: {}", err);
                }
            }
            DataCommand::ResumeSession => match self.client.current_user().await {
                Ok(user) => self.emit(AppEvent::SignedIn(user)),
                Err(err) => {
                    // A stale token on startup is routine; clear it quietly.
                    if err.is_unauthorized() {
                        let _ = self.session.clear();
                    }
                    self.emit_failure(err);
                }
            },
            DataCommand::FetchTasks => match self.client.list_tasks().await {
                Ok(tasks) => self.emit(AppEvent::TasksLoaded(tasks)),
                Err(err) => self.emit_failure(err),
            },
            DataCommand::FetchProjects => match self.client.list_projects().await {
                Ok(projects) => self.emit(AppEvent::ProjectsLoaded(projects)),
                Err(err) => self.emit_failure(err),
            },
            DataCommand::FetchOrders => {
                // Orders have no backend endpoint; they are demo fixtures
                // in the original too.
                self.emit(AppEvent::OrdersLoaded(data::sample_orders()));
            }
            DataCommand::FetchSettings => match self.client.get_settings().await {
                Ok(settings) => self.emit(AppEvent::SettingsLoaded(settings)),
                Err(err) => self.emit_failure(err),
            },
            DataCommand::SaveSettings(settings) => {
                match self.client.update_settings(&settings).await {
                    Ok(saved) => self.emit(AppEvent::SettingsSaved(saved)),
                    Err(err) => self.emit_failure(err),
                }
            }
            DataCommand::CreateTask(create) => match self.client.create_task(&create).await {
                Ok(task) => self.emit(AppEvent::TaskCreated(task)),
                Err(err) => self.emit_failure(err),
            },
        }
    }

    /// Offline answers, served from the sample collections.
    fn handle_offline(&mut self, command: DataCommand) {
        match command {
            DataCommand::SignIn { .. } | DataCommand::ResumeSession => {
                self.emit(AppEvent::SignedIn(data::sample_user()));
            }
            DataCommand::SignOut => {}
            DataCommand::FetchTasks => self.emit(AppEvent::TasksLoaded(data::sample_tasks())),
            DataCommand::FetchProjects => {
                self.emit(AppEvent::ProjectsLoaded(data::sample_projects()))
            }
            DataCommand::FetchOrders => self.emit(AppEvent::OrdersLoaded(data::sample_orders())),
            DataCommand::FetchSettings => {
                self.emit(AppEvent::SettingsLoaded(UserSettings::default()))
            }
            DataCommand::SaveSettings(settings) => self.emit(AppEvent::SettingsSaved(settings)),
            DataCommand::CreateTask(create) => {
                // Fabricate a row the way the backend would.
                let now = chrono::Utc::now();
                let task = crate::api::models::Task {
                    id: now.timestamp_millis(),
                    title: create.title,
                    description: create.description,
                    priority: create.priority,
                    due_date: create.due_date,
                    status: crate::api::models::TaskStatus::Open,
                    project: None,
                    assignee: None,
                    tags: Vec::new(),
                    created_at: now,
                    updated_at: now,
                };
                self.emit(AppEvent::TaskCreated(task));
            }
        }
    }
}
