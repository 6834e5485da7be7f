//! TUI color semantics and style constants.
//!
//! Pure data, consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Purple: header bar and focused pane border
//! - Green: progress (loading indicator, cursor marker)
//! - Red: held error
//! - Cyan: the selected account
//! - Dim: legend, status line, unfocused borders, empty lists

use ratatui::style::{Color, Modifier, Style};

/// Accent used for the header background and the focused border.
pub const ACCENT: Color = Color::Rgb(0x7D, 0x56, 0xF4);

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Loading indicator: bold green.
pub const STYLE_LOADING: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Held error: bold red.
pub const STYLE_ERROR: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

/// De-emphasized text: dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text: bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Header bar with the account name.
pub const STYLE_HEADER: Style = Style::new()
    .fg(Color::White)
    .bg(ACCENT)
    .add_modifier(Modifier::BOLD);

/// Border of the focused pane.
pub const STYLE_FOCUSED_BORDER: Style = Style::new().fg(ACCENT);

/// Border of the unfocused pane.
pub const STYLE_BORDER: Style = Style::new().fg(Color::DarkGray);

/// "> " marker in front of the cursor row.
pub const STYLE_CURSOR: Style = Style::new().fg(Color::Green);

/// Account name under the cursor.
pub const STYLE_SELECTED: Style = Style::new().fg(Color::Cyan);

/// Footer key legend.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

/// Footer status line.
pub const STYLE_STATUS: Style = Style::new().fg(Color::Gray);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semantic_styles_have_expected_colors() {
        assert_eq!(STYLE_LOADING.fg, Some(Color::Green));
        assert_eq!(STYLE_ERROR.fg, Some(Color::Red));
        assert_eq!(STYLE_SELECTED.fg, Some(Color::Cyan));
        assert_eq!(STYLE_HEADER.bg, Some(ACCENT));
    }

    #[test]
    fn error_style_is_bold() {
        assert!(STYLE_ERROR.add_modifier.contains(Modifier::BOLD));
    }
}
