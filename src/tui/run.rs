//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal: all intelligence lives in the pure layers.
//!
//! Architecture: producer threads feed a single mpsc channel.
//! - Key reader thread: forwards mapped key presses and resizes
//! - Worker threads: one per effect (load, act, bulk pass, status timer)
//! The event loop consumes from the channel, one event at a time.

use std::io;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::github::RelationshipClient;
use crate::loader::load_data;
use crate::types::{AccountName, BulkOutcome, RelationAction};

use super::state::{Action, App, AppEvent, Effect};
use super::update::{init, update};
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchPane),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Enter => Some(Action::ActOnSelected),
        KeyCode::Char('a') => Some(Action::BulkAct),

        // Navigation, delegated to the focused list
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left | KeyCode::PageUp | KeyCode::Char('h') => Some(Action::PageUp),
        KeyCode::Right | KeyCode::PageDown | KeyCode::Char('l') => Some(Action::PageDown),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::Home),
        KeyCode::End | KeyCode::Char('G') => Some(Action::End),

        _ => None,
    }
}

/// Translate a raw terminal event into an AppEvent, if it means anything.
pub fn translate(event: Event) -> Option<AppEvent> {
    match event {
        // Some platforms report releases too; act on presses only
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key).map(AppEvent::Input),
        Event::Resize(width, height) => Some(AppEvent::Resize { width, height }),
        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards them to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(raw) => {
                    if let Some(event) = translate(raw) {
                        if tx.send(event).is_err() {
                            break; // receiver dropped, TUI is shutting down
                        }
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "terminal input failed");
                    break;
                }
            }
        }
    });
}

/// Runs effects on worker threads and reports back through the channel.
///
/// Workers never touch the model. A failed send means the event loop is
/// gone, so results are dropped silently.
pub struct Executor {
    client: Arc<dyn RelationshipClient>,
    tx: mpsc::Sender<AppEvent>,
}

impl Executor {
    pub fn new(client: Arc<dyn RelationshipClient>, tx: mpsc::Sender<AppEvent>) -> Self {
        Executor { client, tx }
    }

    /// Start `effect` in the background. Never blocks.
    pub fn dispatch(&self, effect: Effect) {
        tracing::debug!(?effect, "dispatching effect");
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();

        match effect {
            Effect::LoadData => {
                thread::spawn(move || {
                    let _ = tx.send(load_event(client.as_ref()));
                });
            }
            Effect::Act { action, account } => {
                // Action first, then the reload, so the reload sees the change
                thread::spawn(move || {
                    let _ = tx.send(act_event(client.as_ref(), action, &account));
                    let _ = tx.send(load_event(client.as_ref()));
                });
            }
            Effect::Bulk { action, accounts } => {
                thread::spawn(move || {
                    let outcome = bulk_apply(client.as_ref(), action, &accounts);
                    let _ = tx.send(AppEvent::BulkFinished(outcome));
                });
            }
            Effect::ExpireStatus { token, after } => {
                thread::spawn(move || {
                    thread::sleep(after);
                    let _ = tx.send(AppEvent::StatusExpired { token });
                });
            }
        }
    }
}

fn load_event(client: &dyn RelationshipClient) -> AppEvent {
    match load_data(client) {
        Ok(data) => AppEvent::DataLoaded(data),
        Err(e) => {
            tracing::warn!(error = %e, "load failed");
            AppEvent::LoadFailed(e.to_string())
        }
    }
}

fn act_event(client: &dyn RelationshipClient, action: RelationAction, account: &str) -> AppEvent {
    match client.apply(action, account) {
        Ok(()) => {
            tracing::info!(%action, account, "relationship changed");
            AppEvent::ActionSucceeded(format!("{} {}!", action.past_tense(), account))
        }
        Err(e) => {
            tracing::warn!(%action, account, error = %e, "relationship change failed");
            AppEvent::ActionFailed(format!("failed to {} {}: {}", action, account, e))
        }
    }
}

/// Apply `action` to every account in order. Individual failures are
/// logged and counted, never fatal.
pub fn bulk_apply(
    client: &dyn RelationshipClient,
    action: RelationAction,
    accounts: &[AccountName],
) -> BulkOutcome {
    let mut failed = 0;
    for account in accounts {
        if let Err(e) = client.apply(action, account) {
            tracing::warn!(%action, %account, error = %e, "bulk item failed");
            failed += 1;
        }
    }
    tracing::info!(%action, attempted = accounts.len(), failed, "bulk pass complete");
    BulkOutcome {
        action,
        attempted: accounts.len(),
        failed,
    }
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI until the user quits.
///
/// Sets up the terminal, schedules the initial load, and feeds every event
/// through `update` in arrival order, redrawing after each.
pub fn run(client: Arc<dyn RelationshipClient>, status_timeout: Duration) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let (tx, rx) = mpsc::channel::<AppEvent>();
    let executor = Executor::new(client, tx.clone());

    let size = terminal.size()?;
    let (mut app, _) = update(
        App::new(status_timeout),
        AppEvent::Resize {
            width: size.width,
            height: size.height,
        },
    );

    spawn_key_reader(tx);
    for effect in init() {
        executor.dispatch(effect);
    }

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        let (next, effects) = update(app, event);
        app = next;
        for effect in effects {
            executor.dispatch(effect);
        }
    }

    restore_terminal()?;
    tracing::info!("tui exited");
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
