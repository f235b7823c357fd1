use std::sync::Arc;
use std::thread;

use proptest::prelude::*;
use vigil_core::{FieldKind, HistoryRecord, Score, VigilError};
use vigil_history::HistoryTracker;

fn rec(raw: &str, valid: bool, confidence: f64) -> HistoryRecord {
    HistoryRecord::new(FieldKind::Generic, raw, valid, Score::new(confidence))
}

#[test]
fn zero_capacity_is_rejected() {
    assert!(matches!(
        HistoryTracker::new(0),
        Err(VigilError::InvalidCapacity { capacity: 0 })
    ));
}

#[test]
fn empty_history_reports_no_data() {
    let tracker = HistoryTracker::new(5).unwrap();
    assert!(tracker.stats().is_empty());
    assert!(tracker.is_empty());
}

#[test]
fn overflow_evicts_oldest_first() {
    let tracker = HistoryTracker::new(3).unwrap();
    for i in 0..5 {
        tracker.record(rec(&format!("input-{i}"), true, 100.0));
    }
    let records = tracker.records();
    assert_eq!(records.len(), 3);
    let expected: Vec<String> = (2..5)
        .map(|i| HistoryRecord::digest(&format!("input-{i}")))
        .collect();
    let actual: Vec<String> = records.into_iter().map(|r| r.input_digest).collect();
    assert_eq!(actual, expected);
}

#[test]
fn stats_cover_only_retained_records() {
    let tracker = HistoryTracker::new(2).unwrap();
    tracker.record(rec("a", false, 0.0));
    tracker.record(rec("b", true, 90.0));
    tracker.record(rec("c", true, 70.0));
    let stats = tracker.stats();
    let s = stats.summary().unwrap();
    assert_eq!(s.total_validations, 2);
    assert_eq!(s.success_rate, 100.0);
    assert_eq!(s.average_confidence, 80.0);
    assert_eq!(s.most_recent.input_digest, HistoryRecord::digest("c"));
}

#[test]
fn stats_for_filters_by_kind() {
    let tracker = HistoryTracker::new(10).unwrap();
    tracker.record(HistoryRecord::new(FieldKind::Email, "e", true, Score::new(65.0)));
    tracker.record(HistoryRecord::new(FieldKind::Phone, "p", false, Score::new(45.0)));
    let email = tracker.stats_for(FieldKind::Email);
    assert_eq!(email.summary().unwrap().total_validations, 1);
    assert!(tracker.stats_for(FieldKind::Name).is_empty());
}

#[test]
fn clear_empties_the_buffer() {
    let tracker = HistoryTracker::new(2).unwrap();
    tracker.record(rec("a", true, 100.0));
    tracker.clear();
    assert_eq!(tracker.len(), 0);
    assert_eq!(tracker.capacity(), 2);
}

#[test]
fn concurrent_records_respect_capacity() {
    let tracker = Arc::new(HistoryTracker::new(50).unwrap());
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let tracker = Arc::clone(&tracker);
            thread::spawn(move || {
                for i in 0..100 {
                    tracker.record(rec(&format!("{t}-{i}"), i % 2 == 0, 50.0));
                    let _ = tracker.stats();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(tracker.len(), 50);
    let stats = tracker.stats();
    assert_eq!(stats.summary().unwrap().total_validations, 50);
}

proptest! {
    #[test]
    fn length_never_exceeds_capacity(capacity in 1usize..32, n in 0usize..100) {
        let tracker = HistoryTracker::new(capacity).unwrap();
        for i in 0..n {
            tracker.record(rec(&i.to_string(), true, 100.0));
            prop_assert!(tracker.len() <= capacity);
        }
        prop_assert_eq!(tracker.len(), n.min(capacity));
    }
}
