pub mod axis_labels;
pub mod axis_range;
pub mod bar_geometry;
pub mod column;
pub mod interval;
pub mod normalizer;
pub mod spacing;
pub mod types;

pub use axis_labels::{
    AxisLabel, AxisLabelSpec, DEFAULT_TIME_FORMAT, TimeFormat, generate_axis_labels, utc_offset,
};
pub use axis_range::{
    AxisRange, DEFAULT_AXIS_INCREMENT, MARKER_COUNT_WARN_THRESHOLD, coerce_time_units,
};
pub use bar_geometry::{TimelineBar, column_bar_span, project_timeline_bars};
pub use column::{Column, ColumnSet};
pub use interval::{Interval, datetime_to_unix_seconds};
pub use normalizer::{NormalizationCache, NormalizedColumn, normalize, normalize_all};
pub use spacing::SpacingFactor;
pub use types::{ChartMargins, PlotArea, Viewport};
