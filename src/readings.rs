/// Bounded working set of recent sensor readings.
///
/// The window holds readings newest first, capped at `WINDOW_CAPACITY`.
/// Batch delivery replaces the whole set; push delivery prepends one reading.
/// Either way the tail is evicted by truncation, so high-frequency ingestion
/// cannot grow the set without bound.
///
/// # Clock injection
/// Staleness checks accept a `now: DateTime<Utc>` parameter rather than
/// calling `Utc::now()` internally, keeping them deterministic in tests.
/// A convenience wrapper over the real clock exists for service code.

use chrono::{DateTime, Utc};

use crate::model::SensorReading;

/// Maximum readings retained in the working set.
pub const WINDOW_CAPACITY: usize = 50;

/// Newest-first working set of readings.
#[derive(Debug, Clone, Default)]
pub struct ReadingWindow {
    readings: Vec<SensorReading>,
}

impl ReadingWindow {
    pub fn new() -> Self {
        ReadingWindow { readings: Vec::new() }
    }

    /// Replaces the whole window with a newest-first batch, truncating to
    /// capacity. Used for the initial and periodic full fetches.
    pub fn replace_all(&mut self, mut batch: Vec<SensorReading>) {
        batch.truncate(WINDOW_CAPACITY);
        self.readings = batch;
    }

    /// Prepends a single pushed reading, evicting the oldest past capacity.
    pub fn push_latest(&mut self, reading: SensorReading) {
        self.readings.insert(0, reading);
        self.readings.truncate(WINDOW_CAPACITY);
    }

    /// The most recent reading, if any.
    pub fn latest(&self) -> Option<&SensorReading> {
        self.readings.first()
    }

    /// Readings in stored (newest-first) order.
    pub fn iter(&self) -> impl Iterator<Item = &SensorReading> {
        self.readings.iter()
    }

    pub fn as_slice(&self) -> &[SensorReading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Returns `true` if the newest reading is strictly older than
    /// `max_age_secs` relative to `now`. An empty window is stale.
    ///
    /// Staleness never clears alerts or the score. The last-known-good
    /// state stays visible, and this flag only tells the presentation layer
    /// the feed has gone quiet.
    pub fn is_stale_at(&self, max_age_secs: i64, now: DateTime<Utc>) -> bool {
        match self.latest() {
            Some(reading) => (now - reading.timestamp).num_seconds() > max_age_secs,
            None => true,
        }
    }

    /// Convenience wrapper over the real clock. Use `is_stale_at` in tests.
    pub fn is_stale(&self, max_age_secs: i64) -> bool {
        self.is_stale_at(max_age_secs, Utc::now())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
