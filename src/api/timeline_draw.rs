use tracing::trace;

use crate::core::{Interval, NormalizedColumn, TimelineBar, column_bar_span, project_timeline_bars};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer, TextHAlign, TextPrimitive, TextVAlign};

use super::base_chart::draw_guide_lines;
use super::{BaseChart, ChartLayout, TimelineChart};

impl<R: Renderer> BaseChart for TimelineChart<R> {
    fn chart_layout(&self) -> ChartResult<ChartLayout> {
        self.layout()
    }

    fn has_data(&self) -> bool {
        !self.columns.is_empty()
    }

    /// Guide lines from the base scaffolding, then time labels east of the plot.
    fn draw_line_markers(
        &mut self,
        layout: &ChartLayout,
        frame: &mut RenderFrame,
    ) -> ChartResult<()> {
        let style = self.config.style;
        if self.config.show_guide_lines {
            draw_guide_lines(layout, style.guide_line_color, style.guide_line_width, frame);
        }

        for label in self.axis_labels()? {
            frame.texts.push(
                TextPrimitive::new(
                    label.text,
                    label.x,
                    label.y,
                    style.marker_font_size_px,
                    style.font_color,
                    TextHAlign::Right,
                )
                .with_v_align(TextVAlign::Middle),
            );
        }
        Ok(())
    }

    fn draw_bars(&mut self, layout: &ChartLayout, frame: &mut RenderFrame) -> ChartResult<()> {
        let spacing = self.spacing;
        let config = &self.config;
        let utc_offset = self.utc_offset;
        let columns = self.cache.get_or_rebuild(
            self.columns.columns(),
            self.range,
            config.show_bar_value_labels,
            false,
        )?;

        let bars = project_timeline_bars(columns, layout.plot_area, spacing)?;
        trace!(bar_count = bars.len(), "projected timeline bars");
        frame.push_rects(bars.iter().map(|bar| bar.to_rect()));

        if config.show_bar_value_labels {
            for bar in &bars {
                let Some(interval) = raw_interval(columns, bar) else {
                    continue;
                };
                let text = format!(
                    "{}-{}",
                    config
                        .time_format
                        .format_seconds(interval.start.round() as i64, utc_offset),
                    config
                        .time_format
                        .format_seconds(interval.end.round() as i64, utc_offset),
                );
                let (x, y) = bar.center();
                frame.texts.push(
                    TextPrimitive::new(
                        text,
                        x,
                        y,
                        config.style.value_label_font_size_px,
                        config.style.value_label_color,
                        TextHAlign::Center,
                    )
                    .with_v_align(TextVAlign::Middle),
                );
            }
        }

        if config.show_column_labels {
            let plot = layout.plot_area;
            for (index, column) in columns.iter().enumerate() {
                if column.label.is_empty() {
                    continue;
                }
                let (left_x, right_x) = column_bar_span(plot, columns.len(), index, spacing);
                frame.texts.push(TextPrimitive::new(
                    column.label.clone(),
                    (left_x + right_x) * 0.5,
                    plot.bottom() + layout.label_margin,
                    config.style.marker_font_size_px,
                    config.style.font_color,
                    TextHAlign::Center,
                ));
            }
        }

        Ok(())
    }
}

fn raw_interval(columns: &[NormalizedColumn], bar: &TimelineBar) -> Option<Interval> {
    columns
        .get(bar.column_index)?
        .raw_intervals
        .as_ref()?
        .get(bar.interval_index)
        .copied()
        .flatten()
}
