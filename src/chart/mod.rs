//! Chance-by-height chart rendering.
//!
//! The renderer maps a [`ProbabilityCurve`] onto the plot rectangle of a
//! [`PlotGeometry`], emits the line and label [`DrawCommand`]s for one frame,
//! and answers pointer queries for the hover tooltip. It keeps no state
//! between calls; every frame is computed from its arguments.

mod command;
mod geometry;

pub use command::DrawCommand;
pub use geometry::PlotGeometry;

use crate::config::LayoutConfig;
use crate::data::{ProbabilityCurve, WorldGenEntry};
use crate::host::{Canvas, Font, FontMetrics, Translator};
use crate::keys;
use crate::pointer::PointerState;
use crate::tooltip::coordinate_tooltip;
use crate::util::format_percent;

/// Horizontal gap between the chance labels and the plot.
const PERCENT_LABEL_GAP: i32 = 2;
/// Vertical lift of the chance labels relative to the line they mark.
const PERCENT_LABEL_LIFT: i32 = 7;

/// Map every sample to its pixel position.
///
/// Samples are spread evenly so the first sits on the left edge and the last
/// on the right edge. Heights are normalised to the largest sample; an
/// all-zero curve lies flat on the bottom edge.
pub fn plot_points(curve: &ProbabilityCurve, geometry: &PlotGeometry) -> Vec<(f64, f64)> {
    let n = curve.len();
    let max = curve.max();
    // Multiply before dividing so the last sample lands exactly on the edge.
    let steps = n.saturating_sub(1).max(1) as f64;

    curve
        .samples()
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let ratio = if max > 0.0 { f64::from(value) / max } else { 0.0 };
            let x = f64::from(geometry.origin_x) + f64::from(geometry.axis_width) * i as f64 / steps;
            let y = f64::from(geometry.origin_y) - ratio * f64::from(geometry.axis_height);
            (x, y)
        })
        .collect()
}

/// Line segments joining consecutive samples, in sample order.
pub fn line_segments(
    curve: &ProbabilityCurve,
    geometry: &PlotGeometry,
    colour: u32,
) -> Vec<DrawCommand> {
    if curve.len() < 2 {
        tracing::debug!("Curve has {} samples, no line to draw", curve.len());
        return Vec::new();
    }

    plot_points(curve, geometry)
        .windows(2)
        .map(|pair| DrawCommand::Line {
            x0: pair[0].0,
            y0: pair[0].1,
            x1: pair[1].0,
            y1: pair[1].1,
            colour,
        })
        .collect()
}

/// Chance labels on the left and Y-level labels under the plot.
pub fn axis_labels(
    curve: &ProbabilityCurve,
    min_y: i32,
    max_y: i32,
    geometry: &PlotGeometry,
    font: &dyn FontMetrics,
) -> Vec<DrawCommand> {
    let x_percents = geometry.origin_x - PERCENT_LABEL_GAP;
    let y_percents = geometry.origin_y - PERCENT_LABEL_LIFT;

    let min_percent = "0%".to_string();
    let max_percent = format_percent(curve.max());

    let mut labels = Vec::with_capacity(5);
    for (text, y) in [
        (min_percent, y_percents),
        (max_percent, y_percents - geometry.axis_height),
    ] {
        let width = font.string_width(Font::Small, &text);
        labels.push(DrawCommand::text(Font::Small, text, x_percents - width, y));
    }

    let mid_y = ((i64::from(min_y) + i64::from(max_y)) / 2) as i32;
    for (value, anchor) in [
        (min_y, geometry.origin_x),
        (max_y, geometry.origin_x + geometry.axis_width),
        (mid_y, geometry.origin_x + geometry.axis_width / 2),
    ] {
        let text = value.to_string();
        let width = font.string_width(Font::Small, &text);
        labels.push(DrawCommand::text(
            Font::Small,
            text,
            anchor - width / 2,
            geometry.origin_y,
        ));
    }

    labels
}

/// Renders world generation entries into draw commands.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    layout: LayoutConfig,
}

impl ChartRenderer {
    /// Create a renderer for the given layout.
    pub fn new(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Layout in use.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Plot rectangle in use.
    pub fn geometry(&self) -> &PlotGeometry {
        &self.layout.plot
    }

    /// All draw commands for one frame: the curve, axis labels, the drops
    /// caption and the dimension title.
    pub fn render<I>(
        &self,
        entry: &WorldGenEntry<I>,
        font: &dyn FontMetrics,
        translator: &dyn Translator,
    ) -> Vec<DrawCommand> {
        let geometry = &self.layout.plot;
        tracing::trace!(
            "Rendering {} samples for Y {}..={}",
            entry.curve().len(),
            entry.min_y(),
            entry.max_y()
        );

        let mut commands = line_segments(entry.curve(), geometry, entry.colour());
        commands.extend(axis_labels(
            entry.curve(),
            entry.min_y(),
            entry.max_y(),
            geometry,
            font,
        ));

        commands.push(DrawCommand::text(
            Font::Small,
            translator.translate(keys::DROPS),
            self.layout.drops_caption_x,
            self.layout.drops_caption_y,
        ));

        let dimension = translator.translate_dimension(entry.dimension());
        let x = (self.layout.recipe_width - font.string_width(Font::Normal, &dimension)) / 2;
        commands.push(DrawCommand::text(Font::Normal, dimension, x, 0));

        commands
    }

    /// Render straight onto a canvas.
    pub fn draw<I>(
        &self,
        entry: &WorldGenEntry<I>,
        font: &dyn FontMetrics,
        translator: &dyn Translator,
        canvas: &mut dyn Canvas,
    ) {
        for command in self.render(entry, font, translator) {
            command.apply(canvas);
        }
    }

    /// Check if the pointer is over the plot.
    pub fn is_over_plot(&self, pointer: &PointerState) -> bool {
        self.layout.plot.contains(pointer.x, pointer.y)
    }

    /// Hover tooltip lines for the chart itself; empty off the plot.
    pub fn tooltip_strings<I>(
        &self,
        entry: &WorldGenEntry<I>,
        pointer: &PointerState,
    ) -> Vec<String> {
        if !self.is_over_plot(pointer) {
            return Vec::new();
        }
        coordinate_tooltip(entry.curve(), &self.layout.plot, entry.min_y(), pointer)
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::KeyTranslator;

    /// Every character is 4 pixels wide in the small font, 6 in the normal one.
    struct FixedWidth;

    impl FontMetrics for FixedWidth {
        fn string_width(&self, font: Font, text: &str) -> i32 {
            let per_char = match font {
                Font::Small => 4,
                Font::Normal => 6,
            };
            per_char * text.chars().count() as i32
        }
    }

    fn curve(samples: &[f32]) -> ProbabilityCurve {
        ProbabilityCurve::new(samples.to_vec()).unwrap()
    }

    fn entry(samples: &[f32], min_y: i32) -> WorldGenEntry<&'static str> {
        let max_y = min_y + samples.len() as i32 - 1;
        WorldGenEntry::new("iron_ore", curve(samples), min_y, max_y, "overworld").unwrap()
    }

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands.iter().filter_map(DrawCommand::as_text).collect()
    }

    #[test]
    fn test_segment_count() {
        let g = PlotGeometry::default();
        for n in 2..20 {
            let c = curve(&vec![0.25; n]);
            assert_eq!(line_segments(&c, &g, 0).len(), n - 1);
            assert_eq!(plot_points(&c, &g).len(), n);
        }
    }

    #[test]
    fn test_points_span_axis() {
        let g = PlotGeometry::default();
        let c = curve(&[0.3, 0.1, 0.7, 0.2, 0.0, 0.4, 0.9]);
        let points = plot_points(&c, &g);
        assert_eq!(points[0].0, 29.0);
        assert_eq!(points[6].0, 157.0);
        for pair in points.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn test_heights_normalised_to_max() {
        let g = PlotGeometry::default();
        let points = plot_points(&curve(&[0.1, 0.5, 0.2]), &g);
        assert!((points[1].1 - 12.0).abs() < 1e-9);
        assert!((points[0].1 - 44.0).abs() < 1e-6);
        assert!((points[2].1 - 36.0).abs() < 1e-6);
    }

    #[test]
    fn test_segments_in_order_and_coloured() {
        let g = PlotGeometry::default();
        let segments = line_segments(&curve(&[0.1, 0.5, 0.2]), &g, 0xFF12_3456);
        let points = plot_points(&curve(&[0.1, 0.5, 0.2]), &g);
        for (i, segment) in segments.iter().enumerate() {
            match segment {
                DrawCommand::Line {
                    x0,
                    y0,
                    x1,
                    y1,
                    colour,
                } => {
                    assert_eq!((*x0, *y0), points[i]);
                    assert_eq!((*x1, *y1), points[i + 1]);
                    assert_eq!(*colour, 0xFF12_3456);
                },
                other => panic!("expected line, got {}", other),
            }
        }
    }

    #[test]
    fn test_all_zero_curve_is_flat() {
        let g = PlotGeometry::default();
        let c = curve(&[0.0, 0.0, 0.0]);
        for (x, y) in plot_points(&c, &g) {
            assert!(x.is_finite());
            assert_eq!(y, 52.0);
        }
        let labels = axis_labels(&c, 0, 2, &g, &FixedWidth);
        assert_eq!(labels[1].as_text(), Some("0.00%"));
    }

    #[test]
    fn test_single_sample_draws_no_line() {
        let g = PlotGeometry::default();
        let c = curve(&[0.4]);
        assert!(line_segments(&c, &g, 0).is_empty());
        let points = plot_points(&c, &g);
        assert_eq!(points, vec![(29.0, 12.0)]);
    }

    #[test]
    fn test_empty_curve_draws_no_line() {
        let g = PlotGeometry::default();
        let c = curve(&[]);
        assert!(line_segments(&c, &g, 0).is_empty());
        assert!(plot_points(&c, &g).is_empty());
    }

    #[test]
    fn test_scenario_three_samples() {
        let renderer = ChartRenderer::default();
        let commands = renderer.render(&entry(&[0.1, 0.5, 0.2], 0), &FixedWidth, &KeyTranslator);

        assert_eq!(commands.iter().filter(|c| c.is_line()).count(), 2);
        assert_eq!(
            texts(&commands),
            vec!["0%", "50.00%", "0", "2", "1", "jer.worldgen.drops", "overworld"]
        );
    }

    #[test]
    fn test_max_label_matches_max_sample() {
        let g = PlotGeometry::default();
        for samples in [[0.123, 0.05], [0.0004, 0.0001], [1.0, 0.5]] {
            let c = curve(&samples);
            let expected = format!("{:.2}%", c.max() * 100.0);
            let labels = axis_labels(&c, 0, 1, &g, &FixedWidth);
            assert_eq!(labels[1].as_text(), Some(expected.as_str()));
        }
    }

    #[test]
    fn test_label_positions() {
        let g = PlotGeometry::default();
        let labels = axis_labels(&curve(&[0.1, 0.5, 0.2]), 0, 2, &g, &FixedWidth);
        let positions: Vec<(i32, i32)> = labels
            .iter()
            .map(|c| match c {
                DrawCommand::Text { x, y, .. } => (*x, *y),
                other => panic!("expected text, got {}", other),
            })
            .collect();
        assert_eq!(
            positions,
            vec![
                (27 - 8, 45),   // "0%" right-aligned
                (27 - 24, 5),   // "50.00%" right-aligned, one axis higher
                (29 - 2, 52),   // "0" centred on the left edge
                (157 - 2, 52),  // "2" centred on the right edge
                (93 - 2, 52),   // "1" centred on the middle
            ]
        );
    }

    #[test]
    fn test_negative_midpoint_truncates_toward_zero() {
        let g = PlotGeometry::default();
        let c = curve(&vec![0.1; 4]);
        let labels = axis_labels(&c, -3, 0, &g, &FixedWidth);
        assert_eq!(labels[4].as_text(), Some("-1"));
    }

    #[test]
    fn test_dimension_title_centred_on_recipe_width() {
        let renderer = ChartRenderer::default();
        let commands = renderer.render(&entry(&[0.1, 0.2], 10), &FixedWidth, &KeyTranslator);
        let title = commands.last().unwrap();
        assert_eq!(title, &DrawCommand::text(Font::Normal, "overworld", (168 - 54) / 2, 0));
    }

    #[test]
    fn test_drops_caption_position() {
        let renderer = ChartRenderer::default();
        let commands = renderer.render(&entry(&[0.1, 0.2], 10), &FixedWidth, &KeyTranslator);
        assert!(commands.contains(&DrawCommand::text(Font::Small, "jer.worldgen.drops", 6, 58)));
    }

    #[test]
    fn test_draw_replays_render() {
        #[derive(Default)]
        struct Count(usize, usize);
        impl Canvas for Count {
            fn draw_line(&mut self, _: f64, _: f64, _: f64, _: f64, _: u32) {
                self.0 += 1;
            }
            fn draw_text(&mut self, _: Font, _: &str, _: i32, _: i32) {
                self.1 += 1;
            }
        }

        let mut canvas = Count::default();
        ChartRenderer::default().draw(
            &entry(&[0.1, 0.5, 0.2, 0.3], 0),
            &FixedWidth,
            &KeyTranslator,
            &mut canvas,
        );
        assert_eq!(canvas.0, 3);
        assert_eq!(canvas.1, 7);
    }

    #[test]
    fn test_tooltip_strings_only_over_plot() {
        let renderer = ChartRenderer::default();
        let e = entry(&[0.1, 0.5, 0.2], 0);
        assert_eq!(
            renderer.tooltip_strings(&e, &PointerState::at(93, 30)),
            vec!["Y: 1 (50.00%)".to_string()]
        );
        assert!(renderer.tooltip_strings(&e, &PointerState::at(93, 52)).is_empty());
        assert!(renderer.tooltip_strings(&e, &PointerState::at(27, 30)).is_empty());
    }
}
