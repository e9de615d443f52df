//! Integration tests for the tag select control
//!
//! These tests exercise the public API end-to-end: seeding, press policy,
//! capacity handling, callbacks, and chip production.

use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;
use tag_select::{Item, PressOutcome, TagSelect, TagSelectConfig};

fn text_items(labels: &[&str]) -> Vec<Item> {
    labels.iter().map(|l| Item::from(*l)).collect()
}

fn record(id: i64, label: &str) -> Item {
    Item::record([("id", json!(id)), ("label", json!(label))])
}

#[test]
fn test_count_and_order_without_max() {
    let mut select = TagSelect::new(TagSelectConfig::new(text_items(&["a", "b", "c", "d"])));

    select.handle_press(&Item::from("c"));
    select.handle_press(&Item::from("a"));
    select.handle_press(&Item::from("d"));
    assert_eq!(select.total_selected(), 3);

    select.handle_press(&Item::from("a"));
    assert_eq!(select.total_selected(), 2);

    // Insertion order, not data order
    let selected: Vec<String> = select.selected_items().map(Item::fallback_text).collect();
    assert_eq!(selected, vec!["c", "d"]);
}

#[test]
fn test_toggle_twice_restores_prior_contents() {
    let mut select = TagSelect::new(TagSelectConfig::new(text_items(&["a", "b", "c"])));
    select.handle_press(&Item::from("a"));
    select.handle_press(&Item::from("b"));

    let before: Vec<String> = select.selected_items().map(Item::fallback_text).collect();

    select.handle_press(&Item::from("c"));
    select.handle_press(&Item::from("c"));

    let after: Vec<String> = select.selected_items().map(Item::fallback_text).collect();
    assert_eq!(before, after);
}

#[test]
fn test_capacity_rejection_fires_on_max_error_once() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);

    let config = TagSelectConfig::new(text_items(&["a", "b", "c"]))
        .with_max(2)
        .with_switch_to_next(false);
    let mut select = TagSelect::new(config).on_max_error(move || {
        counter.set(counter.get() + 1);
    });

    select.handle_press(&Item::from("a"));
    select.handle_press(&Item::from("b"));
    assert_eq!(calls.get(), 0);

    assert_eq!(select.handle_press(&Item::from("c")), PressOutcome::Rejected);
    assert_eq!(select.total_selected(), 2);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_capacity_eviction_drops_oldest() {
    let config = TagSelectConfig::new(text_items(&["a", "b", "c"]))
        .with_max(2)
        .with_switch_to_next(true);
    let mut select = TagSelect::new(config);

    select.handle_press(&Item::from("a"));
    select.handle_press(&Item::from("b"));
    select.handle_press(&Item::from("c"));

    let selected: Vec<String> = select.selected_items().map(Item::fallback_text).collect();
    assert_eq!(selected, vec!["b", "c"]);
}

#[test]
fn test_on_item_press_receives_pressed_item() {
    let pressed = Rc::new(Cell::new(None::<i64>));
    let sink = Rc::clone(&pressed);

    let data = vec![record(1, "one"), record(2, "two")];
    let mut select = TagSelect::new(TagSelectConfig::new(data)).on_item_press(move |item| {
        sink.set(item.field("id").and_then(serde_json::Value::as_i64));
    });

    select.handle_press(&record(2, "two"));
    assert_eq!(pressed.get(), Some(2));

    // Deselecting also notifies
    pressed.set(None);
    select.handle_press(&record(2, "two"));
    assert_eq!(pressed.get(), Some(2));
}

#[test]
fn test_rejection_does_not_fire_on_item_press() {
    let presses = Rc::new(Cell::new(0));
    let counter = Rc::clone(&presses);

    let config = TagSelectConfig::new(text_items(&["a", "b"]))
        .with_max(1)
        .with_switch_to_next(false);
    let mut select = TagSelect::new(config).on_item_press(move |_| {
        counter.set(counter.get() + 1);
    });

    select.handle_press(&Item::from("a"));
    select.handle_press(&Item::from("b"));
    assert_eq!(presses.get(), 1);
}

#[test]
fn test_key_and_label_derivation() {
    let data = vec![record(5, "x"), Item::from("foo")];
    let mut select = TagSelect::new(TagSelectConfig::new(data));

    select.handle_press(&record(5, "x"));
    select.handle_press(&Item::from("foo"));

    let chips = select.chips();
    assert_eq!(chips[0].key, "5");
    assert_eq!(chips[0].label, "x");
    assert!(chips[0].selected);
    assert_eq!(chips[1].key, "foo");
    assert_eq!(chips[1].label, "foo");
    assert!(chips[1].selected);
}

#[test]
fn test_initial_seeding_selects_before_any_press() {
    let data = vec![record(1, "one"), record(2, "two"), record(3, "three")];
    let value = vec![record(1, "one"), record(2, "two")];
    let select = TagSelect::new(TagSelectConfig::new(data).with_value(value));

    assert_eq!(select.total_selected(), 2);

    let chips = select.chips();
    assert!(chips[0].selected);
    assert!(chips[1].selected);
    assert!(!chips[2].selected);
}

#[test]
fn test_disabled_control_is_fully_inert() {
    let config = TagSelectConfig::new(text_items(&["a", "b"]))
        .with_value(text_items(&["a"]))
        .with_disabled(true);
    let mut select = TagSelect::new(config);

    assert_eq!(select.handle_press(&Item::from("a")), PressOutcome::Ignored);
    assert_eq!(select.handle_press(&Item::from("b")), PressOutcome::Ignored);
    assert_eq!(select.total_selected(), 1);

    // Disabled state reaches the chips for the renderer
    assert!(select.chips().iter().all(|c| c.disabled));
}

#[test]
fn test_config_round_trip_through_json() {
    let json = r#"{
        "data": [{"id": 1, "label": "one"}, {"id": 2, "label": "two"}, "raw"],
        "value": [{"id": 2, "label": "two"}],
        "max": 3,
        "on_max_switch_to_next": false
    }"#;
    let config: TagSelectConfig = serde_json::from_str(json).unwrap();
    let select = TagSelect::new(config);

    assert_eq!(select.total_selected(), 1);
    let chips = select.chips();
    assert_eq!(chips.len(), 3);
    assert!(!chips[0].selected);
    assert!(chips[1].selected);
    assert_eq!(chips[2].label, "raw");
}
