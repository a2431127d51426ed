use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One bar's vertical extent in raw time units (seconds).
///
/// `start <= end` is not enforced: reversed intervals flow through geometry
/// unchanged and produce a bar whose top lies below its bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Builds an interval from two UTC instants, at millisecond precision.
    #[must_use]
    pub fn from_datetimes(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::new(
            datetime_to_unix_seconds(start),
            datetime_to_unix_seconds(end),
        )
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ChartError::InvalidData(
                "interval endpoints must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

impl From<(f64, f64)> for Interval {
    fn from((start, end): (f64, f64)) -> Self {
        Self::new(start, end)
    }
}

impl From<(i64, i64)> for Interval {
    fn from((start, end): (i64, i64)) -> Self {
        Self::new(start as f64, end as f64)
    }
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}
