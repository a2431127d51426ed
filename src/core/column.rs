use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Interval;
use crate::error::ChartResult;
use crate::render::Color;

/// One named vertical slot of the timeline.
///
/// `None` entries keep their position in `intervals` but draw nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub label: String,
    pub intervals: Vec<Option<Interval>>,
    pub color: Color,
}

/// Columns in insertion order; index `i` is the `i`-th slot from the left.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column.
    ///
    /// An empty iterator still creates the column so later slots keep their
    /// position. Non-finite endpoints are rejected and nothing is appended.
    pub fn add_series<I>(
        &mut self,
        label: impl Into<String>,
        intervals: I,
        color: Color,
    ) -> ChartResult<()>
    where
        I: IntoIterator<Item = Option<Interval>>,
    {
        color.validate()?;
        let intervals = intervals
            .into_iter()
            .map(|interval| interval.map(Interval::validate).transpose())
            .collect::<ChartResult<Vec<_>>>()?;

        let label = label.into();
        debug!(
            label = %label,
            interval_count = intervals.len(),
            column_index = self.columns.len(),
            "add timeline series"
        );
        self.columns.push(Column {
            label,
            intervals,
            color,
        });
        Ok(())
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Smallest start and largest end over every present interval.
    ///
    /// Reversed intervals contribute both endpoints to both bounds.
    #[must_use]
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        self.columns
            .iter()
            .flat_map(|column| column.intervals.iter().flatten())
            .flat_map(|interval| [interval.start, interval.end])
            .fold(None, |extent, value| match extent {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            })
    }

    pub fn clear(&mut self) {
        self.columns.clear();
    }
}
