// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Issues draw calls for a laid-out [`Chart`].

use scorechart_core::chart::Chart;

use crate::surface::{DrawingSurface, StrokeStyles};

/// Draws `chart` onto `surface`.
///
/// Order: depth axis, time axis with ticks, then events in input order
/// (each event's fill before its label).
pub fn draw_chart<S: DrawingSurface + ?Sized>(
    chart: &Chart,
    styles: &StrokeStyles,
    surface: &mut S,
) {
    let font_size = chart.options.font_size;

    surface.line(chart.depth_axis.line, &styles.axis);
    for row in &chart.depth_axis.rows {
        surface.text(row.anchor, &row.text, font_size);
    }

    surface.line(chart.time_axis.line, &styles.axis);
    for tick in &chart.time_axis.ticks {
        surface.line(tick.mark, &styles.tick);
        surface.text(tick.label_anchor, &tick.label, font_size);
    }

    for event in &chart.events {
        surface.fill_rect(event.rect, event.fill);
        surface.text(event.label_anchor, &event.label, font_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Line, Point, Rect};
    use scorechart_core::color::Color;
    use scorechart_core::options::{CanvasSize, LayoutOptions};
    use scorechart_core::score::Score;

    use crate::surface::{EncodedImage, Stroke};

    #[derive(Debug, PartialEq)]
    enum Call {
        Line,
        Rect(Rect, Color),
        Text(String),
    }

    #[derive(Default)]
    struct Recording(Vec<Call>);

    impl DrawingSurface for Recording {
        fn line(&mut self, _line: Line, _stroke: &Stroke) {
            self.0.push(Call::Line);
        }

        fn fill_rect(&mut self, rect: Rect, fill: Color) {
            self.0.push(Call::Rect(rect, fill));
        }

        fn text(&mut self, _anchor: Point, text: &str, _font_size: f64) {
            self.0.push(Call::Text(text.into()));
        }

        fn finish(self) -> EncodedImage {
            EncodedImage {
                mime: "test/recording",
                bytes: Vec::new(),
            }
        }
    }

    #[test]
    fn draws_axes_then_events() {
        let scores = [Score::new("a", 0.0, 100.0, 0), Score::new("b", 10.0, 0.0, 1)];
        let chart =
            Chart::layout(&scores, CanvasSize::new(500, 300), LayoutOptions::default()).unwrap();
        let mut rec = Recording::default();
        draw_chart(&chart, &StrokeStyles::default(), &mut rec);

        // depth axis line + 2 row labels, time axis line + 10 * (mark + label),
        // 2 * (rect + label).
        assert_eq!(rec.0.len(), 1 + 2 + 1 + 20 + 4);
        assert_eq!(rec.0[0], Call::Line);
        assert_eq!(rec.0[1], Call::Text("0".into()));
        assert_eq!(rec.0[3], Call::Line);
        assert_eq!(rec.0[5], Call::Text("10.00ms".into()));

        let tail = &rec.0[rec.0.len() - 4..];
        assert!(matches!(tail[0], Call::Rect(_, Color::RED)));
        assert_eq!(tail[1], Call::Text("a 100ms".into()));
        let Call::Rect(zero, fill) = &tail[2] else {
            panic!("expected rect, got {:?}", tail[2]);
        };
        assert_eq!(zero.width(), 0.0);
        assert_eq!(*fill, Color::GREEN);
        assert_eq!(tail[3], Call::Text("b 0ms".into()));
    }
}
