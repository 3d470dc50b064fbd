use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{Event as TermEvent, KeyEvent};

use crate::api::models::{Order, Project, Task, User, UserSettings};

/// Everything the UI loop reacts to: terminal input, the tick, and data
/// arriving from the backend worker.
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Sign-in completed; the backend confirmed who we are.
    SignedIn(User),
    /// Sign-in was rejected (bad credentials, unreachable backend).
    AuthFailed(String),
    /// A request came back 401: the stored session is no longer valid.
    SessionExpired,
    TasksLoaded(Vec<Task>),
    ProjectsLoaded(Vec<Project>),
    OrdersLoaded(Vec<Order>),
    SettingsLoaded(UserSettings),
    SettingsSaved(UserSettings),
    /// A task was created (from the planner or a view).
    TaskCreated(Task),
    /// A non-auth API failure, surfaced as a status line.
    ApiFailure(String),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the input thread.
    ///
    /// Polls crossterm with a short timeout so ticks stay regular, and
    /// forwards key and resize events. The thread exits when the receiver
    /// is dropped.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                match crossterm::event::poll(timeout) {
                    Ok(true) => match crossterm::event::read() {
                        Ok(TermEvent::Key(key)) => {
                            if event_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(TermEvent::Resize(cols, rows)) => {
                            if event_tx.send(AppEvent::Resize(cols, rows)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => {}
                        Err(err) => {
                            tracing::error!("terminal event read failed: {}", err);
                            break;
                        }
                    },
                    Ok(false) => {}
                    Err(err) => {
                        tracing::error!("terminal event poll failed: {}", err);
                        break;
                    }
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// A sender for the backend worker to push data events through.
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
