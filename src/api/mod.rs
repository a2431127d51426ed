mod base_chart;
mod chart;
mod config;
mod layout;
mod snapshot;
mod timeline_draw;

pub use base_chart::{BaseChart, draw_guide_lines};
pub use chart::TimelineChart;
pub use config::{TimelineChartConfig, TimelineStyle};
pub use layout::ChartLayout;
pub use snapshot::{
    TIMELINE_SNAPSHOT_JSON_SCHEMA_V1, TimelineSnapshot, TimelineSnapshotJsonContractV1,
};
