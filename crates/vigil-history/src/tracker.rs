//! Bounded validation history.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use vigil_core::{FieldKind, HistoryRecord, Stats, StatsReport, VigilError, VigilResult};

/// Fixed-capacity FIFO of [`HistoryRecord`]s behind a single mutex.
///
/// Appends and stats reads serialize on the lock, so a stats call always sees
/// a consistent buffer.
#[derive(Debug)]
pub struct HistoryTracker {
    records: Mutex<VecDeque<HistoryRecord>>,
    capacity: usize,
}

impl HistoryTracker {
    pub fn new(capacity: usize) -> VigilResult<Self> {
        if capacity == 0 {
            return Err(VigilError::InvalidCapacity { capacity });
        }
        Ok(Self {
            records: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append a record, evicting the oldest one when full.
    pub fn record(&self, record: HistoryRecord) {
        let mut records = self.lock();
        if records.len() >= self.capacity {
            records.pop_front();
            vigil_observability::events::history_evicted(self.capacity);
        }
        records.push_back(record);
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of the buffer, oldest first.
    pub fn records(&self) -> Vec<HistoryRecord> {
        self.lock().iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
        tracing::debug!(event = "history_cleared", "validation history cleared");
    }

    /// Summary over every buffered record.
    pub fn stats(&self) -> StatsReport {
        summarize(self.lock().iter())
    }

    /// Summary over the buffered records of one field kind.
    pub fn stats_for(&self, kind: FieldKind) -> StatsReport {
        summarize(self.lock().iter().filter(|r| r.field_kind == kind))
    }

    // Records are plain data, so a panic mid-append can't leave them inconsistent.
    fn lock(&self) -> MutexGuard<'_, VecDeque<HistoryRecord>> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn summarize<'a>(records: impl Iterator<Item = &'a HistoryRecord>) -> StatsReport {
    let mut total = 0usize;
    let mut valid = 0usize;
    let mut confidence_sum = 0.0;
    let mut most_recent: Option<&HistoryRecord> = None;

    for record in records {
        total += 1;
        valid += usize::from(record.valid);
        confidence_sum += record.confidence.value();
        most_recent = Some(record);
    }

    match most_recent {
        None => StatsReport::NoData,
        Some(last) => StatsReport::Summary(Stats {
            total_validations: total,
            success_rate: valid as f64 / total as f64 * 100.0,
            average_confidence: confidence_sum / total as f64,
            most_recent: last.clone(),
        }),
    }
}
