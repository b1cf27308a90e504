use stratasort::core::{KeyError, KeyRule, KeyTuple};
use stratasort::prelude::*;

// Simulate an external record type (like a row from a downstream crate).
#[derive(Debug, Clone, PartialEq)]
struct Event {
    source: String,
    timestamp: i64,
    sequence: u32,
}

// Implement KeyRule for a hand-written rule type.
// This proves the trait is implementable by "outside crates".
struct BySourceThenTime;

impl KeyRule<Event> for BySourceThenTime {
    fn key(&self, record: &Event) -> Result<KeyTuple, KeyError> {
        Ok(vec![
            record.source.as_str().into(),
            record.timestamp.into(),
            record.sequence.into(),
        ])
    }
}

fn fixture() -> Vec<Event> {
    vec![
        Event {
            source: "disk".into(),
            timestamp: 7,
            sequence: 1,
        },
        Event {
            source: "net".into(),
            timestamp: 3,
            sequence: 2,
        },
        Event {
            source: "disk".into(),
            timestamp: 2,
            sequence: 3,
        },
    ]
}

#[test]
fn test_external_rule_type() {
    let events = fixture();
    let sorted = stratasort(&events, &BySourceThenTime, &[]).unwrap();

    let order: Vec<u32> = sorted.iter().map(|e| e.sequence).collect();
    // disk@2, disk@7, net@3
    assert_eq!(order, vec![3, 1, 2]);
}

#[test]
fn test_external_rule_with_directions() {
    let events = fixture();

    // Source ascending, newest first within a source.
    let directions = [
        Direction::Ascending,
        Direction::Descending,
        Direction::Ascending,
    ];
    let sorted = stratasort(&events, &BySourceThenTime, &directions).unwrap();

    let order: Vec<u32> = sorted.iter().map(|e| e.sequence).collect();
    // disk@7, disk@2, net@3
    assert_eq!(order, vec![1, 3, 2]);
}

#[test]
fn test_external_rule_in_heap() {
    let mut heap = KeyedHeap::new(BySourceThenTime);
    for event in fixture() {
        heap.push(event).unwrap();
    }

    let mut order = Vec::new();
    while let Ok(event) = heap.pop_min() {
        order.push(event.sequence);
    }
    assert_eq!(order, vec![3, 1, 2]);
}
