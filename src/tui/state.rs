//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire TUI state space. The transition function
//! (`update`) and the rendering layer (`view`) both program against them.
//!
//! Design principle: the model has exactly one writer. `update` takes the
//! `App` by value and hands it back, so no other code can hold it across
//! an event. Background work never sees the model; it only produces
//! [`AppEvent`]s.

use std::time::Duration;

use crate::config::DEFAULT_STATUS_TIMEOUT_SECS;
use crate::types::{AccountName, BulkOutcome, LoadedData, Pane, RelationAction};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Producers feeding the single mpsc channel:
/// - The key reader thread sends `Input` and `Resize`
/// - Worker threads send completion signals (loads, actions, bulk passes)
/// - Timer threads send `StatusExpired`
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// A semantic user action (already mapped from a key press).
    Input(Action),
    /// Terminal was resized.
    Resize { width: u16, height: u16 },
    /// Load finished successfully.
    DataLoaded(LoadedData),
    /// Load failed; carries the rendered error.
    LoadFailed(String),
    /// Single follow/unfollow succeeded; carries the status text.
    ActionSucceeded(String),
    /// Single follow/unfollow failed; carries the rendered error.
    ActionFailed(String),
    /// Bulk pass finished (always, regardless of per-account failures).
    BulkFinished(BulkOutcome),
    /// The status line scheduled with this token may now be cleared.
    StatusExpired { token: u64 },
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Toggle focus between the two panes.
    SwitchPane,
    /// Reload everything from the service.
    Refresh,
    /// Unfollow (Following pane) or follow (Followers pane) the selection.
    ActOnSelected,
    /// Apply the pane's action to every listed account.
    BulkAct,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Home,
    End,
}

// ============================================================================
// EFFECTS
// ============================================================================

/// Side effect requested by a transition.
///
/// Pure code never executes these; it only describes them.
/// The effects boundary (`run`) interprets them on worker threads.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fetch and compute relationship sets.
    LoadData,
    /// Apply `action` to `account`, then reload.
    Act {
        action: RelationAction,
        account: AccountName,
    },
    /// Apply `action` to each account in turn, ignoring individual failures.
    Bulk {
        action: RelationAction,
        accounts: Vec<AccountName>,
    },
    /// Deliver `StatusExpired { token }` after `after`.
    ExpireStatus { token: u64, after: Duration },
}

// ============================================================================
// DERIVED MODE
// ============================================================================

/// Coarse state, derived from the flags on [`App`].
///
/// Not stored: the flags are the source of truth. Precedence follows
/// input gating: quitting, then a held error, then a bulk pass, then a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Loading,
    Ready,
    ErrorHalted,
    BulkBusy,
    Quitting,
}

// ============================================================================
// ACCOUNT LIST
// ============================================================================

/// A selectable list of accounts: items plus a cursor.
///
/// Scroll offset is derived during rendering, not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountList {
    pub items: Vec<AccountName>,
    pub cursor: usize,
}

impl AccountList {
    pub fn new(items: Vec<AccountName>) -> Self {
        AccountList { items, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Account under the cursor, if any.
    pub fn selected(&self) -> Option<&AccountName> {
        self.items.get(self.cursor)
    }

    /// Swap in new items, keeping the cursor position where possible.
    pub fn replace(&mut self, items: Vec<AccountName>) {
        self.items = items;
        self.cursor = self.cursor.min(self.last());
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1).min(self.last());
    }

    pub fn page_up(&mut self, page: usize) {
        self.cursor = self.cursor.saturating_sub(page.max(1));
    }

    pub fn page_down(&mut self, page: usize) {
        self.cursor = (self.cursor + page.max(1)).min(self.last());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.last();
    }

    fn last(&self) -> usize {
        self.items.len().saturating_sub(1)
    }
}

// ============================================================================
// LAYOUT
// ============================================================================

/// Rows taken by the header line.
pub const HEADER_ROWS: u16 = 1;
/// Rows taken by the key legend and the status line.
pub const FOOTER_ROWS: u16 = 2;
/// Top + bottom pane border.
pub const BORDER_ROWS: u16 = 2;

/// Per-pane geometry derived from the terminal size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaneLayout {
    /// Width of each pane (the two panes split the terminal evenly).
    pub width: u16,
    /// Visible list rows inside a pane. Drives page up/down.
    pub list_height: u16,
}

impl PaneLayout {
    pub fn for_terminal(width: u16, height: u16) -> Self {
        PaneLayout {
            width: width / 2,
            list_height: height.saturating_sub(HEADER_ROWS + FOOTER_ROWS + BORDER_ROWS),
        }
    }
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Transient message in the footer.
///
/// `token` identifies this particular message so a late expiry for an
/// older message cannot clear a newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub token: u64,
}

/// Top-level TUI model.
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    /// Authenticated account. Empty until the first load lands.
    pub user: AccountName,
    /// Accounts I follow that don't follow back.
    pub following: AccountList,
    /// Accounts following me that I don't follow back.
    pub followers: AccountList,
    pub active_pane: Pane,

    /// A load is in flight.
    pub loading: bool,
    /// A bulk pass is in flight.
    pub busy: bool,
    /// Held error. While set, only quitting is possible.
    pub error: Option<String>,
    pub status: Option<StatusLine>,
    /// How long a status line lives before it expires.
    pub status_timeout: Duration,
    /// Last issued status token.
    pub status_seq: u64,

    /// Last known terminal size.
    pub width: u16,
    pub height: u16,
    pub layout: PaneLayout,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        App::new(Duration::from_secs(DEFAULT_STATUS_TIMEOUT_SECS))
    }
}

impl App {
    /// Fresh model: loading, empty lists, Following focused.
    pub fn new(status_timeout: Duration) -> Self {
        App {
            user: AccountName::new(),
            following: AccountList::default(),
            followers: AccountList::default(),
            active_pane: Pane::Following,
            loading: true,
            busy: false,
            error: None,
            status: None,
            status_timeout,
            status_seq: 0,
            width: 0,
            height: 0,
            layout: PaneLayout::default(),
            should_quit: false,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.should_quit {
            Mode::Quitting
        } else if self.error.is_some() {
            Mode::ErrorHalted
        } else if self.busy {
            Mode::BulkBusy
        } else if self.loading {
            Mode::Loading
        } else {
            Mode::Ready
        }
    }

    pub fn list(&self, pane: Pane) -> &AccountList {
        match pane {
            Pane::Following => &self.following,
            Pane::Followers => &self.followers,
        }
    }

    pub fn list_mut(&mut self, pane: Pane) -> &mut AccountList {
        match pane {
            Pane::Following => &mut self.following,
            Pane::Followers => &mut self.followers,
        }
    }

    pub fn active_list(&self) -> &AccountList {
        self.list(self.active_pane)
    }

    pub fn active_list_mut(&mut self) -> &mut AccountList {
        self.list_mut(self.active_pane)
    }

    /// Replace the status line, returning the new message's token.
    pub fn set_status(&mut self, text: impl Into<String>) -> u64 {
        self.status_seq += 1;
        self.status = Some(StatusLine {
            text: text.into(),
            token: self.status_seq,
        });
        self.status_seq
    }
}

// ============================================================================
// TESTS
// ============================================================================
