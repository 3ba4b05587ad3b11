//! Rendering tests for the feature list widget

use std::time::{Duration, Instant};

use ratatui::{Terminal, backend::TestBackend};

use cardstock::ui::widgets::FeatureList;
use cardstock::widget::{ChildNode, Component, MountContext};

use crate::common::{buffer_lines, rows_containing};

fn mounted_list(attributes: &[(&str, &str)]) -> FeatureList {
    let mut list = FeatureList::new();
    for (name, value) in attributes {
        list.set_attribute(name, value).unwrap();
    }
    list.mount(&MountContext::default());
    list
}

#[test]
fn renders_rows_with_icon_and_text_in_order() {
    // <feature-list features='["A","B"]' icon="★">
    let list = mounted_list(&[
        ("features", r#"["A","B"]"#),
        ("icon", "★"),
        ("animation", "false"),
    ]);

    let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();
    terminal
        .draw(|frame| list.render(frame, frame.area()))
        .unwrap();

    let lines = buffer_lines(terminal.backend());
    assert!(lines[0].starts_with("★ A"), "got {:?}", lines[0]);
    assert!(lines[1].starts_with("★ B"), "got {:?}", lines[1]);
    assert!(lines[2].trim().is_empty());
}

#[test]
fn attribute_features_render_back_in_order() {
    let features = vec!["First", "Second", "Third"];
    let encoded = serde_json::to_string(&features).unwrap();
    let list = mounted_list(&[("features", &encoded), ("animation", "false")]);

    let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();
    terminal
        .draw(|frame| list.render(frame, frame.area()))
        .unwrap();

    let lines = buffer_lines(terminal.backend());
    for (row, feature) in features.iter().enumerate() {
        assert!(lines[row].contains(feature), "row {row} missing {feature}");
    }
}

#[test]
fn malformed_features_leave_rendered_list_unchanged() {
    let mut list = mounted_list(&[("features", r#"["Kept"]"#), ("animation", "false")]);
    list.set_attribute("features", "{definitely not json").unwrap();

    let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
    terminal
        .draw(|frame| list.render(frame, frame.area()))
        .unwrap();

    assert_eq!(rows_containing(terminal.backend(), "Kept"), 1);
    assert!(list.take_diagnostic().is_some());
}

#[test]
fn rerender_with_same_configuration_is_idempotent() {
    let list = mounted_list(&[("features", r#"["A","B"]"#), ("animation", "false")]);

    let mut first = Terminal::new(TestBackend::new(20, 4)).unwrap();
    first.draw(|frame| list.render(frame, frame.area())).unwrap();
    let mut second = Terminal::new(TestBackend::new(20, 4)).unwrap();
    second
        .draw(|frame| list.render(frame, frame.area()))
        .unwrap();

    assert_eq!(first.backend().buffer(), second.backend().buffer());
}

#[test]
fn stagger_reveals_rows_over_time() {
    let mut list = mounted_list(&[("features", r#"["A","B","C"]"#)]);
    let start = Instant::now();
    list.reschedule_from(start);

    let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();

    // At the start only row 0 is due
    terminal
        .draw(|frame| list.render_at(frame, frame.area(), start))
        .unwrap();
    let lines = buffer_lines(terminal.backend());
    assert!(lines[0].contains('A'));
    assert!(lines[1].trim().is_empty());
    assert!(lines[2].trim().is_empty());

    // 150ms in: rows 0 and 1
    terminal
        .draw(|frame| list.render_at(frame, frame.area(), start + Duration::from_millis(150)))
        .unwrap();
    let lines = buffer_lines(terminal.backend());
    assert!(lines[1].contains('B'));
    assert!(lines[2].trim().is_empty());

    // Well past the last deadline: everything
    terminal
        .draw(|frame| list.render_at(frame, frame.area(), start + Duration::from_secs(1)))
        .unwrap();
    assert_eq!(rows_containing(terminal.backend(), "C"), 1);
}

#[test]
fn child_nodes_feed_the_list_when_no_attribute_is_set() {
    let mut list = FeatureList::new();
    list.set_attribute("animation", "false").unwrap();
    list.mount(&MountContext::with_children(
        Default::default(),
        vec![
            ChildNode::new("feature", " 10GB storage "),
            ChildNode::new("feature", "SSL included"),
        ],
    ));

    let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
    terminal
        .draw(|frame| list.render(frame, frame.area()))
        .unwrap();

    let lines = buffer_lines(terminal.backend());
    assert!(lines[0].contains("10GB storage"));
    assert!(lines[1].contains("SSL included"));
}

#[test]
fn programmatic_set_features_renders_without_attribute() {
    let mut list = mounted_list(&[("animation", "false")]);
    list.set_features(vec!["Direct".to_string()]);

    let mut terminal = Terminal::new(TestBackend::new(20, 2)).unwrap();
    terminal
        .draw(|frame| list.render(frame, frame.area()))
        .unwrap();

    assert_eq!(rows_containing(terminal.backend(), "Direct"), 1);
}
