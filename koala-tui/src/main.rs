//! KoalaWiki TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use koala_tui::api_client::ApiClient;
use koala_tui::config::TuiConfig;
use koala_tui::dispatch::{handle_event, run, Work};
use koala_tui::error::TuiError;
use koala_tui::events::TuiEvent;
use koala_tui::logging;
use koala_tui::persistence::{self, PersistedState};
use koala_tui::state::App;
use koala_tui::views::render_view;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

const TICK_MS: u64 = 250;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    logging::init(&config.error_log_path)?;
    let api = ApiClient::new(&config)?;
    let mut app = App::new(config, api);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard;

    match persistence::load(&app.config.persistence_path) {
        Ok(Some(state)) => app.replace(state.route()),
        Ok(None) => {}
        Err(err) => tracing::warn!(error = %err, "ignoring unreadable ui state"),
    }
    let mut pending = Some(Work::Load);

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    let mut ticker = tokio::time::interval(Duration::from_millis(TICK_MS));

    while !app.should_quit {
        terminal.draw(|f| render_view(f, &app))?;

        // the frame above shows the busy state of whatever is pending
        if let Some(work) = pending.take() {
            run(&mut app, work).await;
            continue;
        }

        tokio::select! {
            _ = ticker.tick() => {}
            Some(event) = event_rx.recv() => pending = handle_event(&mut app, event),
        }
    }

    let persisted = PersistedState::from_route(&app.route);
    if let Err(err) = persistence::save(&app.config.persistence_path, &persisted) {
        tracing::warn!(error = %err, "failed to save ui state");
    }
    tracing::info!("koala-tui exiting");

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                let sent = match evt {
                    CrosstermEvent::Key(key) => sender.blocking_send(TuiEvent::Input(key)),
                    CrosstermEvent::Resize(width, height) => {
                        sender.blocking_send(TuiEvent::Resize { width, height })
                    }
                    _ => Ok(()),
                };
                if sent.is_err() {
                    break;
                }
            }
        }
    });
}
