use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, PlotArea};
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Validated strftime pattern used for axis and bar value labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeFormat(String);

impl Default for TimeFormat {
    fn default() -> Self {
        Self(DEFAULT_TIME_FORMAT.to_owned())
    }
}

impl TimeFormat {
    pub fn new(pattern: impl Into<String>) -> ChartResult<Self> {
        let pattern = pattern.into();
        let invalid = pattern.is_empty()
            || StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error));
        if invalid {
            return Err(ChartError::InvalidTimeFormat { pattern });
        }
        Ok(Self(pattern))
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.0
    }

    /// Formats `seconds` since the Unix epoch at the given UTC offset.
    ///
    /// Timestamps outside chrono's range fall back to the raw number.
    #[must_use]
    pub fn format_seconds(&self, seconds: i64, offset: FixedOffset) -> String {
        let Some(instant) = DateTime::<Utc>::from_timestamp(seconds, 0) else {
            return seconds.to_string();
        };
        let local = instant.with_timezone(&offset);
        let mut text = String::new();
        if write!(text, "{}", local.format(&self.0)).is_err() {
            return seconds.to_string();
        }
        text
    }
}

impl TryFrom<String> for TimeFormat {
    type Error = ChartError;

    fn try_from(pattern: String) -> ChartResult<Self> {
        Self::new(pattern)
    }
}

impl From<TimeFormat> for String {
    fn from(format: TimeFormat) -> Self {
        format.0
    }
}

/// Resolves a UTC offset given in seconds east of Greenwich.
pub fn utc_offset(seconds_east: i32) -> ChartResult<FixedOffset> {
    FixedOffset::east_opt(seconds_east).ok_or_else(|| {
        ChartError::InvalidData(format!("utc offset out of range: {seconds_east}s"))
    })
}

/// One time-axis marker label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub index: usize,
    pub value: i64,
    /// Anchor point: the label's right edge sits at `x`, its middle at `y`.
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Inputs of one axis label pass.
#[derive(Debug, Clone, Copy)]
pub struct AxisLabelSpec<'a> {
    pub range: AxisRange,
    pub plot_area: PlotArea,
    pub marker_count: usize,
    pub increment_scaled: f64,
    pub label_margin: f64,
    pub time_format: &'a TimeFormat,
    pub utc_offset: FixedOffset,
}

/// Generates `marker_count + 1` labels, index 0 at the plot bottom.
///
/// Label `i` reads `maximum - increment * i` and sits `i * increment_scaled`
/// pixels above the plot bottom. Values are not clamped to `minimum`.
#[must_use]
pub fn generate_axis_labels(spec: AxisLabelSpec<'_>) -> Vec<AxisLabel> {
    let plot = spec.plot_area;
    let x = plot.left - spec.label_margin;

    (0..=spec.marker_count)
        .map(|index| {
            let y = plot.top + plot.height - index as f64 * spec.increment_scaled;
            let value = spec
                .range
                .maximum()
                .saturating_sub(spec.range.increment().saturating_mul(index as i64));
            AxisLabel {
                index,
                value,
                x,
                y,
                text: spec.time_format.format_seconds(value, spec.utc_offset),
            }
        })
        .collect()
}
