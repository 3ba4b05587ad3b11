//! Rendering tests using ratatui's TestBackend
//!
//! Widgets are drawn into an in-memory terminal and the resulting buffer
//! is inspected directly.

#[path = "ui/common.rs"]
mod common;

#[path = "ui/test_feature_list.rs"]
mod test_feature_list;

#[path = "ui/test_pricing_tab.rs"]
mod test_pricing_tab;

#[path = "ui/test_pricing_card.rs"]
mod test_pricing_card;
