//! Pure state transitions: (App, AppEvent) → (App, Effects).
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Each mode defines which events it accepts. Unhandled events return the
//! model unchanged (no-op).

use crate::types::{BulkOutcome, LoadedData};

use super::state::{Action, App, AppEvent, Effect, Mode, PaneLayout};

/// Effects to run once at startup.
pub fn init() -> Vec<Effect> {
    vec![Effect::LoadData]
}

/// Pure state transition function.
///
/// Takes the model by value and hands it back along with the side effects
/// the effects boundary should start. Events are applied one at a time in
/// arrival order; nothing here blocks.
pub fn update(mut app: App, event: AppEvent) -> (App, Vec<Effect>) {
    let effects = match event {
        AppEvent::Input(action) => handle_input(&mut app, action),
        AppEvent::Resize { width, height } => {
            app.width = width;
            app.height = height;
            app.layout = PaneLayout::for_terminal(width, height);
            Vec::new()
        }
        AppEvent::DataLoaded(data) => handle_loaded(&mut app, data),
        AppEvent::LoadFailed(message) => {
            // An earlier failure stays on screen
            if app.error.is_none() {
                app.loading = false;
                app.error = Some(message);
            }
            Vec::new()
        }
        AppEvent::ActionSucceeded(text) => status_with_expiry(&mut app, text),
        AppEvent::ActionFailed(message) => {
            app.loading = false;
            if app.error.is_none() {
                app.error = Some(message);
            }
            Vec::new()
        }
        AppEvent::BulkFinished(outcome) => handle_bulk_finished(&mut app, outcome),
        AppEvent::StatusExpired { token } => {
            if app.status.as_ref().is_some_and(|s| s.token == token) {
                app.status = None;
            }
            Vec::new()
        }
    };
    (app, effects)
}

// ============================================================================
// INPUT
// ============================================================================

/// Quit always works. Everything else requires Ready: a held error, a bulk
/// pass, or a load in flight swallows the input.
fn handle_input(app: &mut App, action: Action) -> Vec<Effect> {
    if action == Action::Quit {
        app.should_quit = true;
        return Vec::new();
    }

    if app.mode() != Mode::Ready {
        return Vec::new();
    }

    let page = usize::from(app.layout.list_height);

    match action {
        Action::Quit => Vec::new(),
        Action::SwitchPane => {
            app.active_pane = app.active_pane.toggled();
            Vec::new()
        }
        Action::Refresh => {
            app.loading = true;
            app.error = None;
            vec![Effect::LoadData]
        }
        Action::ActOnSelected => match app.active_list().selected().cloned() {
            Some(account) => {
                app.loading = true;
                vec![Effect::Act {
                    action: app.active_pane.action(),
                    account,
                }]
            }
            None => Vec::new(),
        },
        Action::BulkAct => {
            let list = app.active_list();
            if list.is_empty() {
                return Vec::new();
            }
            let accounts = list.items.clone();
            let action = app.active_pane.action();
            app.busy = true;
            app.set_status(format!("Bulk {}ing all users...", action.verb()));
            vec![Effect::Bulk { action, accounts }]
        }
        Action::MoveUp => {
            app.active_list_mut().move_up();
            Vec::new()
        }
        Action::MoveDown => {
            app.active_list_mut().move_down();
            Vec::new()
        }
        Action::PageUp => {
            app.active_list_mut().page_up(page);
            Vec::new()
        }
        Action::PageDown => {
            app.active_list_mut().page_down(page);
            Vec::new()
        }
        Action::Home => {
            app.active_list_mut().home();
            Vec::new()
        }
        Action::End => {
            app.active_list_mut().end();
            Vec::new()
        }
    }
}

// ============================================================================
// COMPLETION SIGNALS
// ============================================================================

/// A load landed. Ignored while an error is held: a failed action's error
/// must survive the reload that was scheduled alongside it.
fn handle_loaded(app: &mut App, data: LoadedData) -> Vec<Effect> {
    if app.error.is_some() {
        return Vec::new();
    }
    app.loading = false;
    app.user = data.user;
    app.following.replace(data.sets.only_following);
    app.followers.replace(data.sets.only_followers);
    Vec::new()
}

/// Bulk pass done: report, schedule expiry, and reload so the lists reflect
/// what actually changed.
fn handle_bulk_finished(app: &mut App, outcome: BulkOutcome) -> Vec<Effect> {
    app.busy = false;
    let mut effects = status_with_expiry(app, format!("Bulk {} complete!", outcome.action.verb()));
    if app.error.is_none() {
        app.loading = true;
        effects.push(Effect::LoadData);
    }
    effects
}

fn status_with_expiry(app: &mut App, text: String) -> Vec<Effect> {
    let token = app.set_status(text);
    vec![Effect::ExpireStatus {
        token,
        after: app.status_timeout,
    }]
}

// ============================================================================
// TESTS
// ============================================================================
