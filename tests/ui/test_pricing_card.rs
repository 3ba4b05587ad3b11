//! Rendering and event tests for the interactive pricing card

use ratatui::{Terminal, backend::TestBackend};

use cardstock::ui::widgets::PricingCard;
use cardstock::widget::{Component, MountContext, NotificationBus};

use crate::common::{buffer_lines, rows_containing};

fn draw(card: &PricingCard) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(40, 14)).unwrap();
    terminal
        .draw(|frame| card.render(frame, frame.area()))
        .unwrap();
    terminal
}

fn demo_card(bus: &NotificationBus) -> PricingCard {
    let mut card = PricingCard::new();
    card.set_attribute("plan-name", "Pro Plan").unwrap();
    card.set_attribute("price", "59").unwrap();
    card.set_attribute("features", r#"["A", "B"]"#).unwrap();
    card.set_attribute("price-id", "abc").unwrap();
    card.mount(&MountContext::new(bus.clone()));
    card
}

#[test]
fn activation_emits_one_payment_notification() {
    let bus = NotificationBus::new();
    let card = demo_card(&bus);

    card.activate();

    let events = bus.drain();
    assert_eq!(events.len(), 1);
    let payload = serde_json::to_string(&events[0]).unwrap();
    assert_eq!(payload, r#"{"priceId":"abc","type":"payment"}"#);
}

#[test]
fn loading_updates_only_the_control() {
    let bus = NotificationBus::new();
    let mut card = demo_card(&bus);

    let idle = buffer_lines(draw(&card).backend());
    card.set_loading(true);
    let loading = buffer_lines(draw(&card).backend());

    let mut changed = 0;
    for (before, after) in idle.iter().zip(loading.iter()) {
        if before != after {
            changed += 1;
            assert!(before.contains("Subscribe"), "unexpected change: {before:?}");
            assert!(after.contains("Processing"), "unexpected change: {after:?}");
        }
    }
    assert_eq!(changed, 1);

    // Header and checklist untouched
    assert_eq!(rows_containing(draw(&card).backend(), "Pro Plan"), 1);
    assert_eq!(rows_containing(draw(&card).backend(), "✓ A"), 1);
}

#[test]
fn loading_disables_activation() {
    let bus = NotificationBus::new();
    let mut card = demo_card(&bus);
    card.set_loading(true);

    card.activate();
    assert!(bus.is_empty());

    card.set_loading(false);
    card.activate();
    assert_eq!(bus.len(), 1);
}

#[test]
fn popular_card_shows_the_badge() {
    let bus = NotificationBus::new();
    let mut card = demo_card(&bus);
    assert_eq!(rows_containing(draw(&card).backend(), "POPULAR"), 0);

    card.set_attribute("popular", "").unwrap();
    assert_eq!(rows_containing(draw(&card).backend(), "POPULAR"), 1);
}

#[test]
fn spinner_replaces_label_while_loading() {
    let bus = NotificationBus::new();
    let mut card = demo_card(&bus);
    card.set_loading(true);
    let terminal = draw(&card);

    assert_eq!(rows_containing(terminal.backend(), "Subscribe"), 0);
    assert_eq!(rows_containing(terminal.backend(), "◐ Processing"), 1);
}

#[test]
fn card_without_attributes_renders_defaults() {
    let mut card = PricingCard::new();
    card.mount(&MountContext::default());
    let terminal = draw(&card);

    assert_eq!(rows_containing(terminal.backend(), "Basic Plan"), 1);
    assert_eq!(rows_containing(terminal.backend(), "$29"), 1);
    assert_eq!(rows_containing(terminal.backend(), "Subscribe"), 1);
}
