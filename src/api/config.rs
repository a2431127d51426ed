use serde::{Deserialize, Serialize};

use crate::core::{
    AxisRange, ChartMargins, DEFAULT_AXIS_INCREMENT, SpacingFactor, TimeFormat, Viewport,
    utc_offset,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

const DEFAULT_MARKER_FONT_SIZE_PX: f64 = 12.0;
const DEFAULT_LABEL_MARGIN_PX: f64 = 10.0;

/// Fonts and colors of the chart scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineStyle {
    pub font_color: Color,
    pub marker_font_size_px: f64,
    pub guide_line_color: Color,
    pub guide_line_width: f64,
    pub value_label_color: Color,
    pub value_label_font_size_px: f64,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            font_color: Color::rgb(0.2, 0.2, 0.2),
            marker_font_size_px: DEFAULT_MARKER_FONT_SIZE_PX,
            guide_line_color: Color::rgba(0.6, 0.6, 0.6, 0.6),
            guide_line_width: 1.0,
            value_label_color: Color::rgb(1.0, 1.0, 1.0),
            value_label_font_size_px: 10.0,
        }
    }
}

impl TimelineStyle {
    pub fn validate(self) -> ChartResult<Self> {
        self.font_color.validate()?;
        self.guide_line_color.validate()?;
        self.value_label_color.validate()?;
        for (name, value) in [
            ("marker font size", self.marker_font_size_px),
            ("guide line width", self.guide_line_width),
            ("value label font size", self.value_label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Public timeline bootstrap configuration.
///
/// Serializable so host applications can persist chart setup. Every field
/// except the viewport and value range falls back to its default when
/// missing from the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineChartConfig {
    pub viewport: Viewport,
    pub minimum_value: i64,
    pub maximum_value: i64,
    #[serde(default = "default_axis_increment")]
    pub axis_increment: i64,
    /// Fraction of each column left as visible gap around its bars.
    #[serde(default = "default_spacing_percent")]
    pub spacing_percent: f64,
    #[serde(default)]
    pub time_format: TimeFormat,
    #[serde(default)]
    pub utc_offset_seconds: i32,
    #[serde(default)]
    pub margins: ChartMargins,
    #[serde(default = "default_label_margin")]
    pub label_margin: f64,
    #[serde(default)]
    pub style: TimelineStyle,
    #[serde(default = "default_true")]
    pub show_guide_lines: bool,
    #[serde(default = "default_true")]
    pub show_column_labels: bool,
    #[serde(default)]
    pub show_bar_value_labels: bool,
}

impl TimelineChartConfig {
    /// Creates a config with default presentation for the given value range.
    #[must_use]
    pub fn new(viewport: Viewport, minimum_value: i64, maximum_value: i64) -> Self {
        Self {
            viewport,
            minimum_value,
            maximum_value,
            axis_increment: default_axis_increment(),
            spacing_percent: default_spacing_percent(),
            time_format: TimeFormat::default(),
            utc_offset_seconds: 0,
            margins: ChartMargins::default(),
            label_margin: default_label_margin(),
            style: TimelineStyle::default(),
            show_guide_lines: true,
            show_column_labels: true,
            show_bar_value_labels: false,
        }
    }

    #[must_use]
    pub fn with_axis_increment(mut self, seconds: i64) -> Self {
        self.axis_increment = seconds;
        self
    }

    #[must_use]
    pub fn with_spacing_percent(mut self, spacing_percent: f64) -> Self {
        self.spacing_percent = spacing_percent;
        self
    }

    #[must_use]
    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    #[must_use]
    pub fn with_utc_offset_seconds(mut self, seconds_east: i32) -> Self {
        self.utc_offset_seconds = seconds_east;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: ChartMargins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_label_margin(mut self, label_margin: f64) -> Self {
        self.label_margin = label_margin;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: TimelineStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_guide_lines(mut self, enabled: bool) -> Self {
        self.show_guide_lines = enabled;
        self
    }

    #[must_use]
    pub fn with_column_labels(mut self, enabled: bool) -> Self {
        self.show_column_labels = enabled;
        self
    }

    #[must_use]
    pub fn with_bar_value_labels(mut self, enabled: bool) -> Self {
        self.show_bar_value_labels = enabled;
        self
    }

    pub fn axis_range(&self) -> ChartResult<AxisRange> {
        AxisRange::with_increment(self.minimum_value, self.maximum_value, self.axis_increment)
    }

    pub fn spacing_factor(&self) -> ChartResult<SpacingFactor> {
        SpacingFactor::from_spacing_percent(self.spacing_percent)
    }

    /// Checks every field; the chart constructor refuses configs that fail here.
    pub fn validate(&self) -> ChartResult<()> {
        self.axis_range()?;
        self.spacing_factor()?;
        utc_offset(self.utc_offset_seconds)?;
        self.margins.plot_area(self.viewport)?;
        if !self.label_margin.is_finite() || self.label_margin < 0.0 {
            return Err(ChartError::InvalidData(
                "label margin must be finite and >= 0".to_owned(),
            ));
        }
        self.style.validate()?;
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_axis_increment() -> i64 {
    DEFAULT_AXIS_INCREMENT
}

// Stored occupancy 0.9.
fn default_spacing_percent() -> f64 {
    0.1
}

fn default_label_margin() -> f64 {
    DEFAULT_LABEL_MARGIN_PX
}

fn default_true() -> bool {
    true
}
