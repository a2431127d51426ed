use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{NormalizedColumn, PlotArea, SpacingFactor};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RectPrimitive};

/// Pixel rectangle of one visible timeline bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineBar {
    pub column_index: usize,
    pub interval_index: usize,
    pub left_x: f64,
    pub top_y: f64,
    pub right_x: f64,
    pub bottom_y: f64,
    pub color: Color,
}

impl TimelineBar {
    /// Fill-only canvas rectangle for this bar.
    #[must_use]
    pub fn to_rect(self) -> RectPrimitive {
        RectPrimitive::filled(
            self.left_x,
            self.top_y,
            self.right_x,
            self.bottom_y,
            self.color,
        )
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (
            (self.left_x + self.right_x) * 0.5,
            (self.top_y + self.bottom_y) * 0.5,
        )
    }
}

/// Horizontal extent of the bars of column `column_index`.
#[must_use]
pub fn column_bar_span(
    plot_area: PlotArea,
    column_count: usize,
    column_index: usize,
    spacing: SpacingFactor,
) -> (f64, f64) {
    let bar_width = plot_area.width / column_count as f64;
    let padding = (bar_width * (1.0 - spacing.value())) / 2.0;
    let left_x = plot_area.left + bar_width * column_index as f64 + padding;
    (left_x, left_x + bar_width * spacing.value())
}

/// Projects normalized columns into bar rectangles inside `plot_area`.
///
/// Bars are returned column by column, then in interval order, which is the
/// order they must be painted in. Bars entirely outside the vertical window
/// are dropped; the rest are clamped to it. Reversed intervals keep
/// `top_y > bottom_y`.
pub fn project_timeline_bars(
    columns: &[NormalizedColumn],
    plot_area: PlotArea,
    spacing: SpacingFactor,
) -> ChartResult<Vec<TimelineBar>> {
    if columns.is_empty() {
        return Err(ChartError::EmptyData);
    }

    let window_top = plot_area.top;
    let window_bottom = plot_area.bottom();
    let mut bars = Vec::new();

    for (column_index, column) in columns.iter().enumerate() {
        let (left_x, right_x) = column_bar_span(plot_area, columns.len(), column_index, spacing);

        for (interval_index, interval) in column.normalized_intervals.iter().enumerate() {
            let Some((start, end)) = *interval else {
                continue;
            };

            let mut top_y = window_top + start * plot_area.height;
            let mut bottom_y = window_top + end * plot_area.height;

            let within = |y: f64| (window_top..=window_bottom).contains(&y);
            let spans_window = top_y <= window_top && bottom_y >= window_bottom;
            if !(within(top_y) || within(bottom_y) || spans_window) {
                trace!(column_index, interval_index, top_y, bottom_y, "bar outside visible window");
                continue;
            }

            // Each edge is clamped against the window only, not against the other edge.
            if top_y <= window_top {
                top_y = window_top;
            }
            if bottom_y >= window_bottom {
                bottom_y = window_bottom;
            }

            bars.push(TimelineBar {
                column_index,
                interval_index,
                left_x,
                top_y,
                right_x,
                bottom_y,
                color: column.color,
            });
        }
    }

    Ok(bars)
}
