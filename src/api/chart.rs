use chrono::FixedOffset;
use tracing::{debug, warn};

use crate::core::{
    AxisLabel, AxisLabelSpec, AxisRange, ColumnSet, Interval, MARKER_COUNT_WARN_THRESHOLD,
    NormalizationCache, NormalizedColumn, SpacingFactor, TimeFormat, TimelineBar, Viewport,
    coerce_time_units, generate_axis_labels, project_timeline_bars, utc_offset,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Renderer};

use super::{BaseChart, ChartLayout, TimelineChartConfig};

/// Vertical timeline chart: labeled columns of time-interval bars against a
/// shared time axis.
///
/// Every setter validates before mutating, so a rejected value leaves the
/// chart unchanged. Mutators that affect normalization mark the normalized
/// data stale; it is rebuilt on the next render.
pub struct TimelineChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: TimelineChartConfig,
    pub(super) range: AxisRange,
    pub(super) spacing: SpacingFactor,
    pub(super) utc_offset: FixedOffset,
    pub(super) columns: ColumnSet,
    pub(super) cache: NormalizationCache,
}

impl<R: Renderer> TimelineChart<R> {
    pub fn new(renderer: R, config: TimelineChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let range = config.axis_range()?;
        let spacing = config.spacing_factor()?;
        let utc_offset = utc_offset(config.utc_offset_seconds)?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            minimum = range.minimum(),
            maximum = range.maximum(),
            "init timeline chart"
        );
        warn_on_dense_markers(range);
        Ok(Self {
            renderer,
            config,
            range,
            spacing,
            utc_offset,
            columns: ColumnSet::new(),
            cache: NormalizationCache::new(),
        })
    }

    /// Current configuration, reflecting every setter applied so far.
    #[must_use]
    pub fn config(&self) -> &TimelineChartConfig {
        &self.config
    }

    #[must_use]
    pub fn axis_range(&self) -> AxisRange {
        self.range
    }

    #[must_use]
    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.column_count()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Appends one column. `intervals` may be empty; `None` entries draw nothing.
    pub fn add_series<I>(
        &mut self,
        label: impl Into<String>,
        intervals: I,
        color: Color,
    ) -> ChartResult<()>
    where
        I: IntoIterator<Item = Option<Interval>>,
    {
        self.columns.add_series(label, intervals, color)?;
        self.cache.invalidate();
        Ok(())
    }

    pub fn clear_series(&mut self) {
        self.columns.clear();
        self.cache.invalidate();
    }

    /// Sets the fraction of each column left as gap, `0.0..=1.0`.
    ///
    /// The chart stores the complement `1 - spacing_percent` as the bar
    /// occupancy read by geometry; see [`TimelineChart::spacing_factor`].
    pub fn set_spacing_percent(&mut self, spacing_percent: f64) -> ChartResult<()> {
        self.spacing = SpacingFactor::from_spacing_percent(spacing_percent)?;
        self.config.spacing_percent = spacing_percent;
        if self.spacing.value() == 0.0 {
            warn!("spacing percent 1.0 leaves zero-width bars");
        }
        Ok(())
    }

    /// Stored bar occupancy of a column slot.
    #[must_use]
    pub fn spacing_factor(&self) -> f64 {
        self.spacing.value()
    }

    /// Sets the axis minimum, truncated to whole time units.
    pub fn set_minimum_value(&mut self, value: f64) -> ChartResult<()> {
        let range = self.range.with_minimum(coerce_time_units(value))?;
        self.apply_range(range);
        Ok(())
    }

    /// Sets the axis maximum, truncated to whole time units.
    pub fn set_maximum_value(&mut self, value: f64) -> ChartResult<()> {
        let range = self.range.with_maximum(coerce_time_units(value))?;
        self.apply_range(range);
        Ok(())
    }

    /// Sets both axis bounds at once.
    ///
    /// Use this when moving a window whose new minimum equals the current
    /// maximum (or the reverse): the single-bound setters reject that
    /// intermediate state.
    pub fn set_value_range(&mut self, minimum: f64, maximum: f64) -> ChartResult<()> {
        let range = self
            .range
            .with_bounds(coerce_time_units(minimum), coerce_time_units(maximum))?;
        self.apply_range(range);
        Ok(())
    }

    /// Sets the value distance between axis markers, in seconds.
    pub fn set_axis_increment(&mut self, seconds: i64) -> ChartResult<()> {
        let range = self.range.with_axis_increment(seconds)?;
        self.apply_range(range);
        Ok(())
    }

    /// Fits the axis bounds to the smallest and largest interval endpoint.
    ///
    /// Bounds are widened outward to whole time units.
    pub fn fit_value_range_to_data(&mut self) -> ChartResult<()> {
        let (min, max) = self.columns.value_extent().ok_or(ChartError::EmptyData)?;
        let range = self
            .range
            .with_bounds(coerce_time_units(min.floor()), coerce_time_units(max.ceil()))?;
        self.apply_range(range);
        Ok(())
    }

    pub fn set_time_format(&mut self, pattern: &str) -> ChartResult<()> {
        self.config.time_format = TimeFormat::new(pattern)?;
        Ok(())
    }

    pub fn set_utc_offset_seconds(&mut self, seconds_east: i32) -> ChartResult<()> {
        self.utc_offset = utc_offset(seconds_east)?;
        self.config.utc_offset_seconds = seconds_east;
        Ok(())
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.config.margins.plot_area(viewport)?;
        self.config.viewport = viewport;
        Ok(())
    }

    pub fn set_show_guide_lines(&mut self, enabled: bool) {
        self.config.show_guide_lines = enabled;
    }

    pub fn set_show_column_labels(&mut self, enabled: bool) {
        self.config.show_column_labels = enabled;
    }

    /// Toggles per-bar `start-end` labels; source intervals are then kept
    /// alongside the normalized data.
    pub fn set_show_bar_value_labels(&mut self, enabled: bool) {
        if self.config.show_bar_value_labels != enabled {
            self.config.show_bar_value_labels = enabled;
            self.cache.invalidate();
        }
    }

    /// Normalized column data, rebuilt only when stale or `force` is set.
    pub fn normalize(&mut self, force: bool) -> ChartResult<&[NormalizedColumn]> {
        self.cache.get_or_rebuild(
            self.columns.columns(),
            self.range,
            self.config.show_bar_value_labels,
            force,
        )
    }

    /// Times the normalized data was recomputed.
    #[must_use]
    pub fn normalization_count(&self) -> u64 {
        self.cache.rebuild_count()
    }

    /// Pixel layout for the current viewport and axis range.
    pub fn layout(&self) -> ChartResult<ChartLayout> {
        ChartLayout::resolve(
            self.config.viewport,
            self.config.margins,
            self.range,
            self.config.label_margin,
        )
    }

    /// Visible bars for the current data and layout; empty without data.
    pub fn bars(&mut self) -> ChartResult<Vec<TimelineBar>> {
        if self.columns.is_empty() {
            return Ok(Vec::new());
        }
        let layout = self.layout()?;
        let spacing = self.spacing;
        let columns = self.normalize(false)?;
        project_timeline_bars(columns, layout.plot_area, spacing)
    }

    /// Time-axis labels for the current range and layout.
    pub fn axis_labels(&self) -> ChartResult<Vec<AxisLabel>> {
        let layout = self.layout()?;
        Ok(generate_axis_labels(AxisLabelSpec {
            range: self.range,
            plot_area: layout.plot_area,
            marker_count: layout.marker_count,
            increment_scaled: layout.increment_scaled,
            label_margin: layout.label_margin,
            time_format: &self.config.time_format,
            utc_offset: self.utc_offset,
        }))
    }

    /// Builds the frame and submits it to the renderer as one batch.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.draw()?;
        debug!(
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "submit timeline frame"
        );
        self.renderer.render(&frame)
    }

    fn apply_range(&mut self, range: AxisRange) {
        if range != self.range {
            debug!(
                minimum = range.minimum(),
                maximum = range.maximum(),
                increment = range.increment(),
                "set timeline axis range"
            );
            warn_on_dense_markers(range);
            self.range = range;
            self.config.minimum_value = range.minimum();
            self.config.maximum_value = range.maximum();
            self.config.axis_increment = range.increment();
            self.cache.invalidate();
        }
    }
}

fn warn_on_dense_markers(range: AxisRange) {
    let marker_count = range.marker_count();
    if marker_count > MARKER_COUNT_WARN_THRESHOLD {
        warn!(
            marker_count,
            increment = range.increment(),
            "axis range produces an unusually large number of markers"
        );
    }
}
