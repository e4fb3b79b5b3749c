//! Integration tests for tracing and event monitoring.
//!
//! NOTE: Tests here use #[serial] because they share the Fruit type's
//! process-wide trace-callback slot and cache. Each test looks up a name no
//! other test constructs, so construct-vs-hit sequences stay deterministic
//! regardless of test order.

use std::sync::{Arc, Mutex};

use serial_test::serial;

use enum_registry::{enum_type, EnumType};

#[derive(Clone)]
pub struct Fruit {
    pub kcal_per_100g: u16,
}

enum_type! {
    Fruit {
        "APPLE" => Fruit { kcal_per_100g: 52 },
        "BANANA" => Fruit { kcal_per_100g: 89 },
        "CHERRY" => Fruit { kcal_per_100g: 50 },
        "DATE" => Fruit { kcal_per_100g: 282 },
    }
}

/// Installs a capturing callback and returns the shared event log.
fn capture_events() -> Arc<Mutex<Vec<String>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();
    Fruit::set_trace_callback(move |event| {
        events_clone.lock().unwrap().push(event.to_string());
    });
    events
}

#[test]
#[serial]
fn test_construct_then_hit_sequence() {
    let events = capture_events();
    let enum_type = Fruit::type_name();

    let _ = Fruit::by_name("APPLE").unwrap();
    let _ = Fruit::by_name("APPLE").unwrap();

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(
        captured[0],
        format!("construct {{ enum_type: {enum_type}, name: APPLE, ordinal: 0 }}")
    );
    assert_eq!(
        captured[1],
        format!("hit {{ enum_type: {enum_type}, name: APPLE }}")
    );
    drop(captured);

    Fruit::clear_trace_callback();
}

#[test]
#[serial]
fn test_miss_event_for_unknown_name() {
    let events = capture_events();
    let enum_type = Fruit::type_name();

    let _ = Fruit::by_name("DURIAN");

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(
        captured[0],
        format!("miss {{ enum_type: {enum_type}, requested: DURIAN }}")
    );
    drop(captured);

    Fruit::clear_trace_callback();
}

#[test]
#[serial]
fn test_miss_event_for_bad_ordinal() {
    let events = capture_events();
    let enum_type = Fruit::type_name();

    let _ = Fruit::by_ordinal(17);

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(
        captured[0],
        format!("miss {{ enum_type: {enum_type}, requested: 17 }}")
    );
    drop(captured);

    Fruit::clear_trace_callback();
}

#[test]
#[serial]
fn test_by_ordinal_traces_through_by_name() {
    let events = capture_events();

    // BANANA is constructed only in this test.
    let _ = Fruit::by_ordinal(1).unwrap();

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert!(captured[0].starts_with("construct"));
    assert!(captured[0].contains("name: BANANA, ordinal: 1"));
    drop(captured);

    Fruit::clear_trace_callback();
}

#[test]
#[serial]
fn test_clear_trace_callback_stops_events() {
    let events = capture_events();

    let _ = Fruit::by_name("CHERRY").unwrap();
    assert_eq!(events.lock().unwrap().len(), 1);

    Fruit::clear_trace_callback();

    // These should NOT be traced.
    let _ = Fruit::by_name("CHERRY").unwrap();
    let _ = Fruit::by_name("DATE").unwrap();
    let _ = Fruit::by_name("DURIAN");

    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
#[serial]
fn test_replacing_callback_takes_effect() {
    let first = capture_events();
    let second = capture_events(); // replaces the first

    let _ = Fruit::by_name("NOPE");

    assert_eq!(first.lock().unwrap().len(), 0);
    assert_eq!(second.lock().unwrap().len(), 1);

    Fruit::clear_trace_callback();
}
