//! UI module
//!
//! Contains the concrete widgets plus the theme and symbol tables they
//! draw from, and small components used by the demo application.

pub mod components;
pub mod symbols;
pub mod theme;
pub mod widgets;
