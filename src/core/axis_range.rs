use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One hour, in seconds.
pub const DEFAULT_AXIS_INCREMENT: i64 = 60 * 60;

/// Marker counts above this are accepted but logged as suspicious.
pub const MARKER_COUNT_WARN_THRESHOLD: usize = 10_000;

/// Visible value window of the time axis, in integer time units (seconds).
///
/// `minimum` maps to normalized `0.0` (plot top) and `maximum` to `1.0`
/// (plot bottom). `increment` is the value distance between axis markers.
///
/// `minimum < maximum` and `increment > 0` hold for every value, including
/// deserialized ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AxisRangeRepr")]
pub struct AxisRange {
    minimum: i64,
    maximum: i64,
    increment: i64,
}

impl AxisRange {
    pub fn new(minimum: i64, maximum: i64) -> ChartResult<Self> {
        Self::with_increment(minimum, maximum, DEFAULT_AXIS_INCREMENT)
    }

    pub fn with_increment(minimum: i64, maximum: i64, increment: i64) -> ChartResult<Self> {
        validate_bounds(minimum, maximum)?;
        validate_increment(increment)?;
        Ok(Self {
            minimum,
            maximum,
            increment,
        })
    }

    #[must_use]
    pub fn minimum(self) -> i64 {
        self.minimum
    }

    #[must_use]
    pub fn maximum(self) -> i64 {
        self.maximum
    }

    #[must_use]
    pub fn increment(self) -> i64 {
        self.increment
    }

    /// Value span `maximum - minimum`, always positive.
    #[must_use]
    pub fn spread(self) -> f64 {
        self.maximum as f64 - self.minimum as f64
    }

    pub fn with_minimum(self, minimum: i64) -> ChartResult<Self> {
        Self::with_increment(minimum, self.maximum, self.increment)
    }

    pub fn with_maximum(self, maximum: i64) -> ChartResult<Self> {
        Self::with_increment(self.minimum, maximum, self.increment)
    }

    pub fn with_bounds(self, minimum: i64, maximum: i64) -> ChartResult<Self> {
        Self::with_increment(minimum, maximum, self.increment)
    }

    pub fn with_axis_increment(self, increment: i64) -> ChartResult<Self> {
        Self::with_increment(self.minimum, self.maximum, increment)
    }

    /// Number of whole increments that fit in the value span.
    #[must_use]
    pub fn marker_count(self) -> usize {
        (self.spread() / self.increment as f64).floor() as usize
    }

    /// Pixel distance covered by one increment on an axis `axis_height_px` tall.
    #[must_use]
    pub fn increment_scaled(self, axis_height_px: f64) -> f64 {
        axis_height_px / (self.spread() / self.increment as f64)
    }
}

/// Coerces a fractional time value to integer time units.
///
/// Truncates toward zero and saturates at the `i64` limits.
#[must_use]
pub fn coerce_time_units(value: f64) -> i64 {
    if value.is_nan() {
        return 0;
    }
    value.trunc() as i64
}

#[derive(Deserialize)]
struct AxisRangeRepr {
    minimum: i64,
    maximum: i64,
    #[serde(default = "default_increment")]
    increment: i64,
}

impl TryFrom<AxisRangeRepr> for AxisRange {
    type Error = ChartError;

    fn try_from(repr: AxisRangeRepr) -> ChartResult<Self> {
        Self::with_increment(repr.minimum, repr.maximum, repr.increment)
    }
}

fn default_increment() -> i64 {
    DEFAULT_AXIS_INCREMENT
}

fn validate_bounds(minimum: i64, maximum: i64) -> ChartResult<()> {
    if minimum == maximum {
        return Err(ChartError::DegenerateAxisRange { value: minimum });
    }
    if maximum < minimum {
        return Err(ChartError::InvertedAxisRange { minimum, maximum });
    }
    Ok(())
}

fn validate_increment(increment: i64) -> ChartResult<()> {
    if increment <= 0 {
        return Err(ChartError::InvalidAxisIncrement { value: increment });
    }
    Ok(())
}
