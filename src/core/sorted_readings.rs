use chrono::{DateTime, Utc};

use crate::core::Reading;
use crate::core::primitives::datetime_to_unix_millis;

/// Readings sorted ascending by timestamp.
///
/// Sorting happens once, when the sequence is built. Every mapper lookup
/// relies on this order instead of re-sorting per call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortedReadings {
    readings: Vec<Reading>,
}

impl SortedReadings {
    /// Canonicalizes readings in any order.
    ///
    /// Samples with non-finite values are dropped. The sort is stable, so
    /// readings sharing a timestamp (e.g. several sensors sampled together)
    /// keep their input order.
    #[must_use]
    pub fn from_unsorted(readings: Vec<Reading>) -> Self {
        let mut readings: Vec<Reading> = readings
            .into_iter()
            .filter(|reading| reading.value.is_finite())
            .collect();
        readings.sort_by_key(|reading| reading.timestamp);
        Self { readings }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Reading> {
        self.readings.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Reading] {
        &self.readings
    }

    #[must_use]
    pub fn first(&self) -> Option<&Reading> {
        self.readings.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Reading> {
        self.readings.last()
    }

    /// Time covered by the sequence, in milliseconds.
    ///
    /// `None` with fewer than two readings or when all share one timestamp.
    #[must_use]
    pub fn span_millis(&self) -> Option<f64> {
        if self.readings.len() < 2 {
            return None;
        }
        let first = datetime_to_unix_millis(self.first()?.timestamp);
        let last = datetime_to_unix_millis(self.last()?.timestamp);
        let span = last - first;
        (span > 0.0).then_some(span)
    }

    /// Readings whose timestamp lies in `[start, end]` (inclusive).
    #[must_use]
    pub fn between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> &[Reading] {
        let (start, end) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };
        let lower = self.readings.partition_point(|r| r.timestamp < start);
        let upper = self.readings.partition_point(|r| r.timestamp <= end);
        &self.readings[lower..upper]
    }

    /// Sub-sequence produced by one sensor, still sorted.
    #[must_use]
    pub fn for_entity(&self, entity_id: &str) -> Self {
        Self {
            readings: self
                .readings
                .iter()
                .filter(|reading| reading.entity_id() == Some(entity_id))
                .cloned()
                .collect(),
        }
    }
}

impl From<Vec<Reading>> for SortedReadings {
    fn from(readings: Vec<Reading>) -> Self {
        Self::from_unsorted(readings)
    }
}
