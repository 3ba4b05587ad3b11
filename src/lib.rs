//! Cardstock - pricing and feature-list widgets for the terminal
//!
//! Small presentational widgets configured entirely through string
//! attributes, in the spirit of HTML custom elements.
//!
//! This library provides:
//! - [`app`]: Demo application state and logic
//! - [`keys`]: Key binding definitions
//! - [`registry`]: Process-wide tag-name registry
//! - [`ui`]: Concrete widgets, theme, and symbols
//! - [`widget`]: Component trait, attributes, events, and scheduling

pub mod app;
pub mod keys;
pub mod registry;
pub mod ui;
pub mod widget;
