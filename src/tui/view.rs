//! Pure rendering: map App state to ratatui widget trees.
//!
//! Three exclusive branches come first (quitting, loading, error); only a
//! ready model gets the full layout. Widget-building functions are pure
//! (state in, widgets out); the only effect is Frame::render_widget()
//! which writes to the terminal buffer.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::types::Pane;

use super::state::{AccountList, App, FOOTER_ROWS, HEADER_ROWS};
use super::theme;

/// Key legend shown in the footer.
pub const HELP_TEXT: &str =
    "[q] Quit   [↑↓] Move   [←→] Page   [tab] Switch Pane   [r] Refresh   [enter] Action   [a] Action All";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the model to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    if app.should_quit {
        frame.render_widget(Clear, area);
        return;
    }

    if app.loading {
        let loading = Paragraph::new(Span::styled("Loading data...", theme::STYLE_LOADING));
        frame.render_widget(loading, area);
        return;
    }

    if let Some(error) = &app.error {
        frame.render_widget(render_error(error), area);
        return;
    }

    // Common layout: header, two panes, legend, status
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_ROWS),
        Constraint::Min(0),
        Constraint::Length(FOOTER_ROWS),
    ])
    .split(area);

    frame.render_widget(render_header(&app.user), chunks[0]);

    let panes = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    for (pane, pane_area) in [Pane::Following, Pane::Followers].into_iter().zip(panes.iter()) {
        render_pane(app.list(pane), pane, pane == app.active_pane, frame, *pane_area);
    }

    frame.render_widget(render_footer(app), chunks[2]);
}

// ============================================================================
// BRANCHES
// ============================================================================

fn render_error(error: &str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(format!("Error: {}", error), theme::STYLE_ERROR)),
        Line::from(Span::styled("[q] to quit", theme::STYLE_HELP)),
    ])
    .wrap(Wrap { trim: false })
}

fn render_header(user: &str) -> Paragraph<'static> {
    Paragraph::new(Span::raw(format!(" GitHub Account : {} ", user))).style(theme::STYLE_HEADER)
}

/// One bordered list. The focused pane gets a thick accent border.
fn render_pane(list: &AccountList, pane: Pane, focused: bool, frame: &mut Frame, area: Rect) {
    let (border_type, border_style) = if focused {
        (BorderType::Thick, theme::STYLE_FOCUSED_BORDER)
    } else {
        (BorderType::Rounded, theme::STYLE_BORDER)
    };

    let title = format!(" {} ({}) ", pane.title(), list.len());
    let block = Block::bordered()
        .border_type(border_type)
        .border_style(border_style)
        .title(Span::styled(title, theme::STYLE_IMPORTANT));

    if list.is_empty() {
        let empty = Paragraph::new(Span::styled("No items.", theme::STYLE_DIM)).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = list
        .items
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if i == list.cursor {
                Line::from(vec![
                    Span::styled("> ", theme::STYLE_CURSOR),
                    Span::styled(name.as_str(), theme::STYLE_SELECTED),
                ])
            } else {
                Line::from(format!("  {}", name))
            }
        })
        .collect();

    // Scroll: keep the cursor on the last visible row once it passes the fold
    let visible_height = area.height.saturating_sub(2) as usize;
    let scroll_offset = if visible_height > 0 && list.cursor >= visible_height {
        list.cursor - visible_height + 1
    } else {
        0
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}

/// Legend plus status. A bulk pass in flight shows "Working..." instead of
/// the status text.
fn render_footer(app: &App) -> Paragraph<'static> {
    let status = if app.busy {
        "Working...".to_string()
    } else {
        app.status
            .as_ref()
            .map(|s| s.text.clone())
            .unwrap_or_default()
    };

    Paragraph::new(vec![
        Line::from(Span::styled(HELP_TEXT, theme::STYLE_HELP)),
        Line::from(Span::styled(status, theme::STYLE_STATUS)),
    ])
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LoadedData, RelationshipSets};
    use crate::tui::state::{Action, AppEvent};
    use crate::tui::update::update;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(120, 20);
        Terminal::new(backend).unwrap()
    }

    fn ready_app() -> App {
        let data = LoadedData {
            user: "alice".into(),
            sets: RelationshipSets {
                only_following: vec!["bob".into(), "carol".into()],
                only_followers: vec!["dave".into()],
            },
        };
        let (app, _) = update(App::default(), AppEvent::DataLoaded(data));
        app
    }

    fn rendered(app: &App) -> String {
        let mut terminal = make_terminal();
        terminal
            .draw(|frame| render(app, frame))
            .expect("render should not panic");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    #[test]
    fn loading_screen() {
        let content = rendered(&App::default());
        assert!(content.contains("Loading data..."));
        assert!(!content.contains("GitHub Account"));
    }

    #[test]
    fn error_screen_shows_message_and_quit_hint() {
        let (app, _) = update(App::default(), AppEvent::LoadFailed("failed to get user: nope".into()));
        let content = rendered(&app);
        assert!(content.contains("Error: failed to get user: nope"));
        assert!(content.contains("[q] to quit"));
        assert!(!content.contains("Following"));
    }

    #[test]
    fn quitting_renders_nothing() {
        let (app, _) = update(ready_app(), AppEvent::Input(Action::Quit));
        let content = rendered(&app);
        assert!(content.trim().is_empty());
    }

    #[test]
    fn ready_screen_shows_header_panes_and_legend() {
        let content = rendered(&ready_app());
        assert!(content.contains("GitHub Account : alice"));
        assert!(content.contains("Following (2)"));
        assert!(content.contains("Followers (1)"));
        assert!(content.contains("> bob"));
        assert!(content.contains("carol"));
        assert!(content.contains("> dave"));
        assert!(content.contains("[tab] Switch Pane"));
    }

    #[test]
    fn focused_pane_has_thick_border() {
        let app = ready_app();
        let mut terminal = make_terminal();
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let buffer = terminal.backend().buffer();

        // Row 1 is the top border of both panes; left pane focused
        assert_eq!(buffer[(0, 1)].symbol(), "┏");
        assert_eq!(buffer[(60, 1)].symbol(), "╭");

        let (app, _) = update(app, AppEvent::Input(Action::SwitchPane));
        terminal.draw(|frame| render(&app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 1)].symbol(), "╭");
        assert_eq!(buffer[(60, 1)].symbol(), "┏");
    }

    #[test]
    fn empty_pane_says_so() {
        let mut app = ready_app();
        app.followers.replace(Vec::new());
        let content = rendered(&app);
        assert!(content.contains("No items."));
    }

    #[test]
    fn status_text_in_footer() {
        let (app, _) = update(ready_app(), AppEvent::ActionSucceeded("Followed dave!".into()));
        assert!(rendered(&app).contains("Followed dave!"));
    }

    #[test]
    fn busy_shows_working() {
        let (app, _) = update(ready_app(), AppEvent::Input(Action::BulkAct));
        let content = rendered(&app);
        assert!(content.contains("Working..."));
        assert!(!content.contains("Bulk unfollowing"));
    }

    #[test]
    fn cursor_scrolls_into_view() {
        let names: Vec<String> = (0..50).map(|i| format!("user{:02}", i)).collect();
        let data = LoadedData {
            user: "alice".into(),
            sets: RelationshipSets {
                only_following: names,
                only_followers: Vec::new(),
            },
        };
        let (app, _) = update(App::default(), AppEvent::DataLoaded(data));
        let (app, _) = update(app, AppEvent::Input(Action::End));
        let content = rendered(&app);
        assert!(content.contains("> user49"));
        assert!(!content.contains("user00"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let app = ready_app();
        let mut terminal = Terminal::new(TestBackend::new(4, 2)).unwrap();
        terminal
            .draw(|frame| render(&app, frame))
            .expect("render should not panic");
    }
}
