//! Platform-specific keyboard shortcuts

use crossterm::event::KeyModifiers;

/// Modifier for the form shortcuts.
/// macOS terminals swallow most Cmd combinations, so Ctrl is used everywhere.
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reset form shortcut display
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Password visibility shortcut display
pub const REVEAL_SHORTCUT: &str = "Ctrl+P";
