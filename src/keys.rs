//! Keybinding definitions for the demo application
//!
//! All keybindings are defined here for easy modification.

use crossterm::event::KeyCode;
use ratatui::style::Color;

/// Quit application
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Move focus to the next widget
pub const FOCUS_NEXT: KeyCode = KeyCode::Tab;

/// Activate the focused card's call-to-action
pub const ACTIVATE: KeyCode = KeyCode::Enter;

/// Toggle the `popular` presence attribute on the focused card
pub const TOGGLE_POPULAR: KeyCode = KeyCode::Char('p');

/// Toggle the feature list's `animation` attribute
pub const TOGGLE_ANIMATION: KeyCode = KeyCode::Char('a');

/// Cycle the feature list's `theme` attribute
pub const CYCLE_THEME: KeyCode = KeyCode::Char('t');

/// Restart the feature list's reveal stagger
pub const REPLAY_REVEAL: KeyCode = KeyCode::Char('r');

/// A key hint shown in the status bar
#[derive(Debug, Clone, Copy)]
pub struct KeyHint {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color,
}

/// Hints for the status bar, in display order
pub const HINTS: &[KeyHint] = &[
    KeyHint {
        key: "Tab",
        label: "focus",
        color: Color::Cyan,
    },
    KeyHint {
        key: "Enter",
        label: "subscribe",
        color: Color::Green,
    },
    KeyHint {
        key: "p",
        label: "popular",
        color: Color::Magenta,
    },
    KeyHint {
        key: "t",
        label: "theme",
        color: Color::Blue,
    },
    KeyHint {
        key: "a",
        label: "animation",
        color: Color::Yellow,
    },
    KeyHint {
        key: "r",
        label: "replay",
        color: Color::Yellow,
    },
    KeyHint {
        key: "q",
        label: "quit",
        color: Color::Red,
    },
];
