use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, ChartMargins, PlotArea, Viewport};
use crate::error::ChartResult;

/// Pixel geometry shared by the scaffolding and the bar pass of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub plot_area: PlotArea,
    /// Number of whole axis increments in the value span.
    pub marker_count: usize,
    /// Pixel distance of one axis increment.
    pub increment_scaled: f64,
    /// Gap between the plot edge and axis labels.
    pub label_margin: f64,
}

impl ChartLayout {
    pub fn resolve(
        viewport: Viewport,
        margins: ChartMargins,
        range: AxisRange,
        label_margin: f64,
    ) -> ChartResult<Self> {
        let plot_area = margins.plot_area(viewport)?;
        Ok(Self {
            viewport,
            plot_area,
            marker_count: range.marker_count(),
            increment_scaled: range.increment_scaled(plot_area.height),
            label_margin,
        })
    }

    /// Y coordinate of marker `index`, counted upward from the plot bottom.
    #[must_use]
    pub fn marker_y(self, index: usize) -> f64 {
        self.plot_area.top + self.plot_area.height - index as f64 * self.increment_scaled
    }
}
