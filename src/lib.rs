//! timeline-chart: vertical timeline chart core.
//!
//! Turns labeled columns of time intervals into normalized axis space, bar
//! rectangles and time-axis labels, then hands one batched frame per render
//! to a pluggable canvas backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BaseChart, TimelineChart, TimelineChartConfig};
pub use error::{ChartError, ChartResult};
