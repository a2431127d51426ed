use approx::assert_relative_eq;
use timeline_chart::core::{ChartMargins, Interval, Viewport};
use timeline_chart::render::{Color, NullRenderer, TextHAlign, TextVAlign};
use timeline_chart::{BaseChart, ChartError, TimelineChart, TimelineChartConfig};

const BLUE: Color = Color::rgb(0.1, 0.2, 0.8);
const GREEN: Color = Color::rgb(0.1, 0.7, 0.2);

fn zero_margins() -> ChartMargins {
    ChartMargins {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    }
}

fn reference_chart() -> TimelineChart<NullRenderer> {
    let config = TimelineChartConfig::new(Viewport::new(200, 100), 0, 100)
        .with_margins(zero_margins())
        .with_column_labels(false);
    TimelineChart::new(NullRenderer::default(), config).expect("chart init")
}

#[test]
fn reference_example_renders_expected_rectangle() {
    let mut chart = reference_chart();
    chart.set_spacing_percent(0.2).expect("spacing");
    chart
        .add_series("a", [Some(Interval::new(0.0, 100.0))], BLUE)
        .expect("add a");
    chart.add_series("b", std::iter::empty(), GREEN).expect("add b");

    let frame = chart.draw().expect("frame");
    assert_eq!(frame.rects.len(), 1);

    let rect = frame.rects[0];
    assert_relative_eq!(rect.left, 10.0, epsilon = 1e-9);
    assert_relative_eq!(rect.right, 90.0, epsilon = 1e-9);
    assert_relative_eq!(rect.top, 0.0, epsilon = 1e-9);
    assert_relative_eq!(rect.bottom, 100.0, epsilon = 1e-9);
    assert_eq!(rect.fill_color, BLUE);
    assert_eq!(rect.stroke_opacity, 0.0);
}

#[test]
fn spacing_percent_stores_complement() {
    let mut chart = reference_chart();
    assert_relative_eq!(chart.spacing_factor(), 0.9, epsilon = 1e-12);

    chart.set_spacing_percent(0.25).expect("spacing");
    assert_relative_eq!(chart.spacing_factor(), 0.75, epsilon = 1e-12);
    assert_relative_eq!(chart.config().spacing_percent, 0.25);

    chart.set_spacing_percent(0.0).expect("lower bound");
    chart.set_spacing_percent(1.0).expect("upper bound");
}

#[test]
fn out_of_range_spacing_percent_is_rejected_without_change() {
    let mut chart = reference_chart();
    chart.set_spacing_percent(0.3).expect("spacing");

    for bad in [-0.1, 1.5] {
        let result = chart.set_spacing_percent(bad);
        assert!(matches!(
            result,
            Err(ChartError::SpacingPercentOutOfRange { .. })
        ));
    }
    assert_relative_eq!(chart.spacing_factor(), 0.7, epsilon = 1e-12);
}

#[test]
fn empty_chart_renders_scaffolding_only() {
    let config = TimelineChartConfig::new(Viewport::new(400, 300), 0, 7_200);
    let mut chart = TimelineChart::new(NullRenderer::default(), config).expect("chart init");

    chart.render().expect("render");

    let renderer = chart.renderer();
    assert_eq!(renderer.frames_submitted, 1);
    assert_eq!(renderer.last_rect_count, 0);
    assert_eq!(renderer.last_line_count, 3);
    assert_eq!(renderer.last_text_count, 3);
    assert_eq!(chart.normalization_count(), 0);
    assert!(chart.bars().expect("bars").is_empty());
}

#[test]
fn repeated_frames_are_identical() {
    let mut chart = reference_chart();
    chart
        .add_series(
            "a",
            [Some(Interval::new(10.0, 30.0)), None, Some(Interval::new(50.0, 70.0))],
            BLUE,
        )
        .expect("add a");
    chart
        .add_series("b", [Some(Interval::new(-20.0, 40.0))], GREEN)
        .expect("add b");

    let first = chart.draw().expect("first frame");
    let second = chart.draw().expect("second frame");

    assert_eq!(first, second);
    assert_eq!(first.rects.len(), 3);
    assert_eq!(chart.normalization_count(), 1);
}

#[test]
fn mutators_invalidate_normalized_data() {
    let mut chart = reference_chart();
    chart
        .add_series("a", [Some(Interval::new(10.0, 30.0))], BLUE)
        .expect("add a");

    chart.render().expect("render");
    chart.render().expect("render");
    assert_eq!(chart.normalization_count(), 1);

    chart
        .add_series("b", [Some(Interval::new(20.0, 40.0))], GREEN)
        .expect("add b");
    chart.render().expect("render");
    assert_eq!(chart.normalization_count(), 2);

    chart.set_maximum_value(200.0).expect("max");
    chart.render().expect("render");
    assert_eq!(chart.normalization_count(), 3);

    chart.set_spacing_percent(0.5).expect("spacing");
    chart.render().expect("render");
    assert_eq!(chart.normalization_count(), 3);

    chart.normalize(true).expect("forced");
    assert_eq!(chart.normalization_count(), 4);
}

#[test]
fn range_change_moves_bars() {
    let mut chart = reference_chart();
    chart
        .add_series("a", [Some(Interval::new(25.0, 50.0))], BLUE)
        .expect("add a");

    let before = chart.bars().expect("bars");
    assert_relative_eq!(before[0].top_y, 25.0, epsilon = 1e-9);

    chart.set_maximum_value(200.0).expect("max");
    let after = chart.bars().expect("bars");
    assert_relative_eq!(after[0].top_y, 12.5, epsilon = 1e-9);
    assert_relative_eq!(after[0].bottom_y, 25.0, epsilon = 1e-9);
}

#[test]
fn range_setters_coerce_to_whole_units() {
    let mut chart = reference_chart();
    chart.set_minimum_value(12.9).expect("min");
    chart.set_maximum_value(99.99).expect("max");

    assert_eq!(chart.axis_range().minimum(), 12);
    assert_eq!(chart.axis_range().maximum(), 99);
    assert_eq!(chart.config().minimum_value, 12);
    assert_eq!(chart.config().maximum_value, 99);
}

#[test]
fn degenerate_range_is_rejected_at_assignment() {
    let mut chart = reference_chart();

    let result = chart.set_minimum_value(100.0);
    assert!(matches!(
        result,
        Err(ChartError::DegenerateAxisRange { value: 100 })
    ));
    assert_eq!(chart.axis_range().minimum(), 0);

    chart
        .set_value_range(100.0, 200.0)
        .expect("atomic range move");
    assert_eq!(chart.axis_range().minimum(), 100);
    assert_eq!(chart.axis_range().maximum(), 200);
}

#[test]
fn axis_increment_must_be_positive() {
    let mut chart = reference_chart();
    assert!(matches!(
        chart.set_axis_increment(0),
        Err(ChartError::InvalidAxisIncrement { value: 0 })
    ));
    chart.set_axis_increment(25).expect("increment");
    assert_eq!(chart.layout().expect("layout").marker_count, 4);
}

#[test]
fn invalid_time_format_is_rejected() {
    let mut chart = reference_chart();
    assert!(matches!(
        chart.set_time_format("%Q"),
        Err(ChartError::InvalidTimeFormat { .. })
    ));
    assert_eq!(chart.config().time_format.pattern(), "%H:%M");

    chart.set_time_format("%H:%M:%S").expect("format");
    let labels = chart.axis_labels().expect("labels");
    assert_eq!(labels[0].text, "00:01:40");
}

#[test]
fn fit_value_range_to_data_widens_to_whole_units() {
    let mut chart = reference_chart();
    assert!(matches!(
        chart.fit_value_range_to_data(),
        Err(ChartError::EmptyData)
    ));

    chart
        .add_series(
            "a",
            [Some(Interval::new(10.5, 20.2)), None, Some(Interval::new(5.0, 30.9))],
            BLUE,
        )
        .expect("add a");
    chart.fit_value_range_to_data().expect("fit");

    assert_eq!(chart.axis_range().minimum(), 5);
    assert_eq!(chart.axis_range().maximum(), 31);
}

#[test]
fn axis_labels_are_east_anchored_and_centered() {
    let config = TimelineChartConfig::new(Viewport::new(400, 320), 0, 7_200);
    let mut chart = TimelineChart::new(NullRenderer::default(), config).expect("chart init");
    chart
        .add_series("a", [Some(Interval::new(0.0, 3_600.0))], BLUE)
        .expect("add a");

    let frame = chart.draw().expect("frame");
    let axis_texts: Vec<_> = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Right)
        .collect();

    // default margins: left 80, top 20, bottom 40 -> plot height 260
    assert_eq!(axis_texts.len(), 3);
    let texts: Vec<&str> = axis_texts.iter().map(|text| text.text.as_str()).collect();
    assert_eq!(texts, vec!["02:00", "01:00", "00:00"]);
    for text in &axis_texts {
        assert_eq!(text.v_align, TextVAlign::Middle);
        assert_relative_eq!(text.x, 70.0);
    }
    assert_relative_eq!(axis_texts[0].y, 280.0);
    assert_relative_eq!(axis_texts[1].y, 150.0);
    assert_relative_eq!(axis_texts[2].y, 20.0);
}

#[test]
fn column_captions_sit_under_their_slot() {
    let config = TimelineChartConfig::new(Viewport::new(200, 100), 0, 100)
        .with_margins(zero_margins())
        .with_label_margin(6.0);
    let mut chart = TimelineChart::new(NullRenderer::default(), config).expect("chart init");
    chart
        .add_series("left", [Some(Interval::new(0.0, 10.0))], BLUE)
        .expect("add left");
    chart.add_series("", std::iter::empty(), BLUE).expect("add blank");
    chart
        .add_series("right", [Some(Interval::new(0.0, 10.0))], GREEN)
        .expect("add right");

    let frame = chart.draw().expect("frame");
    let captions: Vec<_> = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Center)
        .collect();

    assert_eq!(captions.len(), 2);
    assert_eq!(captions[0].text, "left");
    assert_relative_eq!(captions[0].x, 200.0 / 6.0, epsilon = 1e-9);
    assert_relative_eq!(captions[0].y, 106.0);
    assert_eq!(captions[1].text, "right");
    assert_relative_eq!(captions[1].x, 200.0 * 5.0 / 6.0, epsilon = 1e-9);
}

#[test]
fn bar_value_labels_use_raw_interval_times() {
    let config = TimelineChartConfig::new(Viewport::new(200, 100), 0, 86_400)
        .with_margins(zero_margins())
        .with_column_labels(false)
        .with_guide_lines(false)
        .with_bar_value_labels(true);
    let mut chart = TimelineChart::new(NullRenderer::default(), config).expect("chart init");
    chart
        .add_series(
            "a",
            [Some(Interval::new(3_600.0, 7_200.0)), Some(Interval::new(-7_200.0, -3_600.0))],
            BLUE,
        )
        .expect("add a");

    let normalized = chart.normalize(false).expect("normalize");
    assert!(normalized[0].raw_intervals.is_some());

    let frame = chart.draw().expect("frame");
    let values: Vec<_> = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Center)
        .collect();

    assert_eq!(frame.rects.len(), 1);
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].text, "01:00-02:00");
    assert!(frame.lines.is_empty());
}

#[test]
fn toggling_value_labels_drops_raw_intervals() {
    let mut chart = reference_chart();
    chart
        .add_series("a", [Some(Interval::new(0.0, 10.0))], BLUE)
        .expect("add a");
    chart.set_show_bar_value_labels(true);
    assert!(chart.normalize(false).expect("normalize")[0].raw_intervals.is_some());

    chart.set_show_bar_value_labels(false);
    assert!(chart.normalize(false).expect("normalize")[0].raw_intervals.is_none());
}

#[test]
fn non_finite_interval_is_rejected() {
    let mut chart = reference_chart();
    let result = chart.add_series("bad", [Some(Interval::new(0.0, f64::NAN))], BLUE);

    assert!(matches!(result, Err(ChartError::InvalidData(_))));
    assert_eq!(chart.column_count(), 0);
}

#[test]
fn viewport_too_small_for_margins_is_rejected() {
    let config = TimelineChartConfig::new(Viewport::new(60, 40), 0, 100);
    assert!(TimelineChart::new(NullRenderer::default(), config).is_err());

    let mut chart = reference_chart();
    assert!(chart.set_viewport(Viewport::new(0, 100)).is_err());
    chart.set_viewport(Viewport::new(400, 100)).expect("resize");
    chart
        .add_series("a", [Some(Interval::new(0.0, 100.0))], BLUE)
        .expect("add a");
    let bars = chart.bars().expect("bars");
    assert_relative_eq!(bars[0].right_x - bars[0].left_x, 360.0, epsilon = 1e-9);
}

#[test]
fn reversed_range_is_rejected() {
    let config = TimelineChartConfig::new(Viewport::new(400, 300), 7_200, 0);
    assert!(matches!(
        TimelineChart::new(NullRenderer::default(), config),
        Err(ChartError::InvertedAxisRange {
            minimum: 7_200,
            maximum: 0
        })
    ));

    let mut chart = reference_chart();
    assert!(matches!(
        chart.set_maximum_value(-10.0),
        Err(ChartError::InvertedAxisRange { .. })
    ));
    assert!(chart.set_value_range(100.0, 0.0).is_err());
    assert_eq!(chart.axis_range().minimum(), 0);
    assert_eq!(chart.axis_range().maximum(), 100);
}

#[test]
fn axis_labels_agree_with_bar_positions() {
    let config = TimelineChartConfig::new(Viewport::new(400, 300), 0, 7_200)
        .with_margins(zero_margins());
    let mut chart = TimelineChart::new(NullRenderer::default(), config).expect("chart init");
    chart
        .add_series("a", [Some(Interval::new(3_600.0, 7_200.0))], BLUE)
        .expect("add a");

    let bars = chart.bars().expect("bars");
    let labels = chart.axis_labels().expect("labels");
    let label_at = |value: i64| {
        labels
            .iter()
            .find(|label| label.value == value)
            .expect("label for value")
    };

    assert_relative_eq!(bars[0].top_y, label_at(3_600).y, epsilon = 1e-9);
    assert_relative_eq!(bars[0].bottom_y, label_at(7_200).y, epsilon = 1e-9);
}

#[test]
fn dense_marker_range_is_accepted() {
    let mut chart = reference_chart();
    chart.set_axis_increment(1).expect("increment");
    chart.set_maximum_value(50_000.0).expect("max");

    assert_eq!(chart.layout().expect("layout").marker_count, 50_000);
}

#[test]
fn cleared_chart_renders_without_bars() {
    let mut chart = reference_chart();
    chart
        .add_series("a", [Some(Interval::new(0.0, 50.0))], BLUE)
        .expect("add a");
    chart.render().expect("first render");

    chart.clear_series();
    assert_eq!(chart.column_count(), 0);
    chart.render().expect("second render");

    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_submitted, 2);
    assert_eq!(renderer.last_rect_count, 0);
}
