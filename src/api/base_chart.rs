use crate::error::ChartResult;
use crate::render::{Color, LinePrimitive, RenderFrame};

use super::ChartLayout;

/// Draw lifecycle shared by chart variants.
///
/// `draw` resolves the layout, lets the variant draw its axis markers and,
/// when there is data, its bars. Variants override the two hooks and reuse
/// the generic scaffolding helpers in this module.
pub trait BaseChart {
    fn chart_layout(&self) -> ChartResult<ChartLayout>;

    fn has_data(&self) -> bool;

    fn draw_line_markers(
        &mut self,
        layout: &ChartLayout,
        frame: &mut RenderFrame,
    ) -> ChartResult<()>;

    fn draw_bars(&mut self, layout: &ChartLayout, frame: &mut RenderFrame) -> ChartResult<()>;

    /// Builds the complete frame for one render pass.
    fn draw(&mut self) -> ChartResult<RenderFrame> {
        let layout = self.chart_layout()?;
        let mut frame = RenderFrame::new(layout.viewport);
        self.draw_line_markers(&layout, &mut frame)?;
        if self.has_data() {
            self.draw_bars(&layout, &mut frame)?;
        }
        Ok(frame)
    }
}

/// Horizontal guide line across the plot at every marker position.
pub fn draw_guide_lines(layout: &ChartLayout, color: Color, width: f64, frame: &mut RenderFrame) {
    let plot = layout.plot_area;
    frame.lines.extend((0..=layout.marker_count).map(|index| {
        let y = layout.marker_y(index);
        LinePrimitive::new(plot.left, y, plot.right(), y, width, color)
    }));
}
