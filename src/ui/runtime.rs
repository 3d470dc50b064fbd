use std::time::Duration;

use crate::api::ApiClient;
use crate::config::{ConfigStore, Session};
use crate::ui::app::App;
use crate::ui::bridge::spawn_worker;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Set up the terminal, wire the backend worker, and run the UI loop.
///
/// Must run inside a tokio runtime: the worker task serving API requests is
/// spawned onto it. The loop itself is synchronous and redraws at tick
/// granularity or on events, whichever comes first.
pub async fn run(config: ConfigStore) -> anyhow::Result<()> {
    let cfg = config.get();
    let mut client = ApiClient::new(
        &cfg.api.base_url,
        Duration::from_secs(cfg.api.timeout_seconds as u64),
    )?;

    let session = Session::new(Session::default_path());
    let had_token = match session.load() {
        Some(token) => {
            client.set_token(token);
            true
        }
        None => false,
    };

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms);
    let mut app = App::new(config.clone());
    let events = EventHandler::new(tick_rate);
    let commands = spawn_worker(client, session, cfg.api.offline, events.sender());
    app.set_command_sender(commands);

    // A stored token skips the login screen if the backend still honors it.
    if had_token {
        app.resume_session();
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(event) => app.on_event(event),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
