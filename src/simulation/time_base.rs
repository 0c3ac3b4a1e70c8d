//! Sample index and wall-clock timeline of a run

use chrono::{DateTime, Duration, Utc};

/// Fixed-length, fixed-interval timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBase {
    start: DateTime<Utc>,
    interval_secs: f64,
    samples: usize,
}

impl TimeBase {
    pub fn new(start: DateTime<Utc>, interval_secs: f64, samples: usize) -> Self {
        Self { start, interval_secs, samples }
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Run progress `index / (N - 1)`.
    ///
    /// Exactly 0 at the first sample and exactly 1 at the last. A run of one
    /// sample reports 0.
    pub fn progress(&self, index: usize) -> f64 {
        if self.samples < 2 {
            return 0.0;
        }
        index as f64 / (self.samples - 1) as f64
    }

    /// Timestamp of sample `index`, at microsecond resolution.
    pub fn timestamp(&self, index: usize) -> DateTime<Utc> {
        let offset_us = (index as f64 * self.interval_secs * 1e6).round() as i64;
        self.start + Duration::microseconds(offset_us)
    }

    /// Total time covered from the first to the last sample.
    pub fn span(&self) -> Duration {
        self.timestamp(self.samples.saturating_sub(1)) - self.start
    }
}
