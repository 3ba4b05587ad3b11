//! Rendering tests for the simple pricing card

use ratatui::{Terminal, backend::TestBackend};

use cardstock::ui::widgets::PricingTab;
use cardstock::widget::{Component, MountContext};

use crate::common::{buffer_lines, rows_containing};

fn draw(tab: &PricingTab) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
    terminal
        .draw(|frame| tab.render(frame, frame.area()))
        .unwrap();
    terminal
}

#[test]
fn card_without_attributes_renders_defaults() {
    let mut tab = PricingTab::new();
    tab.mount(&MountContext::default());
    let terminal = draw(&tab);

    assert_eq!(rows_containing(terminal.backend(), "Basic Plan"), 1);
    assert_eq!(rows_containing(terminal.backend(), "$29"), 1);
    assert_eq!(rows_containing(terminal.backend(), "Monthly subscription"), 1);
    // Zero feature rows
    assert_eq!(rows_containing(terminal.backend(), "✓"), 0);
}

#[test]
fn card_renders_configured_header_and_checklist() {
    let mut tab = PricingTab::new();
    tab.set_attribute("plan-name", "Team Plan").unwrap();
    tab.set_attribute("price", "99").unwrap();
    tab.set_attribute("description", "Yearly billing").unwrap();
    tab.set_attribute("features", r#"["Audit log", "SSO"]"#).unwrap();
    tab.mount(&MountContext::default());
    let terminal = draw(&tab);

    assert_eq!(rows_containing(terminal.backend(), "Team Plan"), 1);
    assert_eq!(rows_containing(terminal.backend(), "$99"), 1);
    assert_eq!(rows_containing(terminal.backend(), "Includes:"), 1);
    assert_eq!(rows_containing(terminal.backend(), "✓ Audit log"), 1);
    assert_eq!(rows_containing(terminal.backend(), "✓ SSO"), 1);
}

#[test]
fn popular_changes_styling_but_not_content() {
    let mut tab = PricingTab::new();
    tab.set_attribute("features", r#"["A", "B", "C"]"#).unwrap();
    tab.mount(&MountContext::default());

    let plain = draw(&tab);
    let plain_lines = buffer_lines(plain.backend());
    let plain_border = plain.backend().buffer().cell((0, 0)).unwrap().style();

    tab.set_attribute("popular", "").unwrap();
    let popular = draw(&tab);
    let popular_lines = buffer_lines(popular.backend());
    let popular_border = popular.backend().buffer().cell((0, 0)).unwrap().style();

    // Same text in the same order, different palette
    assert_eq!(plain_lines, popular_lines);
    assert_ne!(plain_border.fg, popular_border.fg);
}

#[test]
fn detached_card_renders_nothing() {
    let mut tab = PricingTab::new();
    tab.set_attribute("plan-name", "Early").unwrap();
    let terminal = draw(&tab);
    assert_eq!(rows_containing(terminal.backend(), "Early"), 0);

    tab.mount(&MountContext::default());
    let terminal = draw(&tab);
    assert_eq!(rows_containing(terminal.backend(), "Early"), 1);
}

#[test]
fn malformed_features_render_an_empty_checklist() {
    let mut tab = PricingTab::new();
    tab.set_attribute("features", "[unterminated").unwrap();
    tab.mount(&MountContext::default());
    let terminal = draw(&tab);

    assert_eq!(rows_containing(terminal.backend(), "✓"), 0);
    assert_eq!(rows_containing(terminal.backend(), "Basic Plan"), 1);
}
