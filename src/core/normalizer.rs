use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{AxisRange, Column, Interval};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Column data mapped into normalized axis space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedColumn {
    pub label: String,
    pub normalized_intervals: Vec<Option<(f64, f64)>>,
    pub color: Color,
    /// Source intervals, kept only when per-bar value labels are requested.
    pub raw_intervals: Option<Vec<Option<Interval>>>,
}

/// Maps `value` onto the axis, `0.0` at `minimum` and `1.0` at `maximum`.
///
/// The result is not clamped; values outside the range land outside `[0, 1]`.
pub fn normalize(value: f64, range: AxisRange) -> ChartResult<f64> {
    let spread = range.spread();
    if spread == 0.0 {
        return Err(ChartError::DegenerateAxisRange {
            value: range.minimum(),
        });
    }
    Ok((value - range.minimum() as f64) / spread)
}

/// Normalizes every interval endpoint of every column, preserving `None` slots.
pub fn normalize_all(
    columns: &[Column],
    range: AxisRange,
    retain_raw: bool,
) -> ChartResult<Vec<NormalizedColumn>> {
    columns
        .iter()
        .map(|column| {
            let normalized_intervals = column
                .intervals
                .iter()
                .map(|interval| {
                    interval
                        .map(|interval| {
                            Ok::<_, ChartError>((
                                normalize(interval.start, range)?,
                                normalize(interval.end, range)?,
                            ))
                        })
                        .transpose()
                })
                .collect::<ChartResult<Vec<_>>>()?;

            Ok(NormalizedColumn {
                label: column.label.clone(),
                normalized_intervals,
                color: column.color,
                raw_intervals: retain_raw.then(|| column.intervals.clone()),
            })
        })
        .collect()
}

/// Normalized column set reused across renders until invalidated.
#[derive(Debug, Clone, Default)]
pub struct NormalizationCache {
    columns: Vec<NormalizedColumn>,
    dirty: bool,
    built: bool,
    rebuild_count: u64,
}

impl NormalizationCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the cached set stale; the next access rebuilds it.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    #[must_use]
    pub fn is_stale(&self) -> bool {
        !self.built || self.dirty
    }

    /// Times the set was recomputed since creation.
    #[must_use]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Returns the cached set, rebuilding it first when stale or `force` is set.
    ///
    /// A failed rebuild keeps the previous cached set and flags.
    pub fn get_or_rebuild(
        &mut self,
        columns: &[Column],
        range: AxisRange,
        retain_raw: bool,
        force: bool,
    ) -> ChartResult<&[NormalizedColumn]> {
        if force || self.is_stale() {
            self.columns = normalize_all(columns, range, retain_raw)?;
            self.built = true;
            self.dirty = false;
            self.rebuild_count += 1;
            trace!(
                column_count = self.columns.len(),
                rebuild_count = self.rebuild_count,
                force,
                "rebuilt normalized timeline data"
            );
        }
        Ok(&self.columns)
    }
}
