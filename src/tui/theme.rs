//! TUI color semantics and style constants.
//!
//! Pure data: consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Green: chosen, enabled, the recommendation itself
//! - Yellow: still incomplete
//! - Cyan: interactive elements (keybinding hints, the phone number)
//! - Dim: de-emphasized (descriptions, disabled buttons)
//! - Bold: important (prompts, category names)

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Chosen / enabled: green.
pub const STYLE_SAFE: Style = Style::new().fg(Color::Green);

/// Incomplete / needs attention: yellow.
pub const STYLE_WARNING: Style = Style::new().fg(Color::Yellow);

/// Interactive element / keybinding hint: cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// De-emphasized text: dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text: bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// The recommended rule on the result screen.
pub const STYLE_RESULT: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Cursor row (focused, not necessarily chosen).
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Radio button: chosen.
pub const STYLE_CHECKED: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Radio button: not chosen.
pub const STYLE_UNCHECKED: Style = Style::new().fg(Color::DarkGray);

/// Term code chip in the catalog row.
pub const STYLE_CHIP: Style = Style::new().fg(Color::Black).bg(Color::Gray);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
