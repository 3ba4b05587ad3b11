//! Demo application module
//!
//! Mounts one instance of each widget, routes key events, and observes
//! the notification bus the way an embedding application would. Split
//! into:
//! - `state`: App struct and widget lifecycle
//! - `input`: Key event handling
//! - `render`: UI rendering

mod input;
mod render;
mod state;

pub use state::{App, Focus};
