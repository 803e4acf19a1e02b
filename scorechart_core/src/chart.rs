// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One complete chart layout.

use log::{debug, warn};

use crate::axis::{DepthAxis, TimeAxis};
use crate::color::{ColorScheme, DepthCycle};
use crate::error::LayoutError;
use crate::event::{EventBox, layout_events};
use crate::options::{CanvasSize, LayoutOptions};
use crate::scale::ScaleModel;
use crate::score::{Score, resolve_scores};

/// All geometry for one chart, in absolute canvas pixels.
///
/// Built in one pass by [`Chart::layout`] and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    /// Target canvas.
    pub canvas: CanvasSize,
    /// Options the chart was laid out with.
    pub options: LayoutOptions,
    /// Scale shared by both axes and every event.
    pub scale: ScaleModel,
    /// Vertical axis.
    pub depth_axis: DepthAxis,
    /// Horizontal axis.
    pub time_axis: TimeAxis,
    /// One box per score, in input order.
    pub events: Vec<EventBox>,
}

impl Chart {
    /// Lays out `scores` with the default [`DepthCycle`] colors.
    pub fn layout(
        scores: &[Score],
        canvas: CanvasSize,
        options: LayoutOptions,
    ) -> Result<Self, LayoutError> {
        Self::layout_with(scores, canvas, options, &DepthCycle::default())
    }

    /// Lays out `scores`, coloring events with `scheme`.
    ///
    /// Configuration is validated first, then every score is resolved; the
    /// first failure aborts the layout. The scale is computed once and shared
    /// by the axes and the events.
    pub fn layout_with<C: ColorScheme + ?Sized>(
        scores: &[Score],
        canvas: CanvasSize,
        options: LayoutOptions,
        scheme: &C,
    ) -> Result<Self, LayoutError> {
        options.validate(canvas)?;
        let resolved = resolve_scores(scores)?;
        let scale = ScaleModel::compute(&resolved, canvas, options.origin);
        debug!(
            "scale: {} scores, epoch={:?} max_duration={}ms ratio={}px/ms max_depth={}",
            resolved.len(),
            scale.epoch,
            scale.max_duration,
            scale.ratio,
            scale.max_depth,
        );
        if scale.is_degenerate() {
            warn!(
                "no score has a positive duration ({} scores); time axis collapses onto the origin",
                resolved.len()
            );
        }

        Ok(Self {
            canvas,
            options,
            scale,
            depth_axis: DepthAxis::layout(&scale, &options),
            time_axis: TimeAxis::layout(&scale, &options),
            events: layout_events(&resolved, &scale, &options, scheme),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::error::{ConfigError, MalformedReason};
    use crate::time::{StartTime, Timestamp};

    const T: &str = "2024-01-01T00:00:00.000Z";
    const T_PLUS_10: &str = "2024-01-01T00:00:00.010Z";

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn two_scores() -> [Score; 2] {
        [Score::new("a", T, 100.0, 0), Score::new("b", T_PLUS_10, 50.0, 1)]
    }

    #[test]
    fn end_to_end_geometry() {
        let chart = Chart::layout(
            &two_scores(),
            CanvasSize::new(500, 300),
            LayoutOptions::default(),
        )
        .unwrap();

        assert_eq!(chart.scale.epoch, Some(Timestamp::parse(T).unwrap()));
        assert_eq!(chart.scale.max_duration, 100.0);
        assert!(close(chart.scale.ratio, 4.7));

        let a = &chart.events[0].rect;
        assert!(close(a.x0, 30.0));
        assert!(close(a.y0, 50.0));
        assert!(close(a.width(), 470.0));

        let b = &chart.events[1].rect;
        assert!(close(b.x0, 77.0), "b.left = {}", b.x0);
        assert!(close(b.y0, 80.0));
        assert!(close(b.width(), 235.0), "b.width = {}", b.width());

        assert_eq!(chart.events[0].label, "a 100ms");
        assert_eq!(chart.events[1].fill, Color::GREEN);
    }

    #[test]
    fn layout_is_idempotent() {
        let scores = two_scores();
        let canvas = CanvasSize::new(800, 400);
        let first = Chart::layout(&scores, canvas, LayoutOptions::default()).unwrap();
        let second = Chart::layout(&scores, canvas, LayoutOptions::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn scale_consistency_between_any_two_scores() {
        let scores = [
            Score::new("a", 1_000.0, 30.0, 0),
            Score::new("b", 1_007.25, 80.0, 1),
            Score::new("c", 1_150.0, 12.0, 2),
            Score::new("d", 990.5, 3.0, 0),
        ];
        let chart =
            Chart::layout(&scores, CanvasSize::new(640, 200), LayoutOptions::default()).unwrap();
        let ratio = chart.scale.ratio;
        for (i, a) in scores.iter().enumerate() {
            for (j, b) in scores.iter().enumerate() {
                let (StartTime::Millis(sa), StartTime::Millis(sb)) = (&a.start, &b.start) else {
                    unreachable!();
                };
                let dx = chart.events[j].rect.x0 - chart.events[i].rect.x0;
                assert!(close(dx, (sb - sa) * ratio), "pair ({i}, {j})");
            }
        }
    }

    #[test]
    fn rectangles_start_within_extended_canvas() {
        let scores = [
            Score::new("root", 0.0, 200.0, 0),
            Score::new("child", 20.0, 120.0, 1),
            Score::new("leaf", 60.0, 40.0, 2),
        ];
        let canvas = CanvasSize::new(500, 300);
        let opts = LayoutOptions::default();
        let chart = Chart::layout(&scores, canvas, opts).unwrap();
        for event in &chart.events {
            assert!(event.rect.x0 >= 0.0 && event.rect.x0 <= f64::from(canvas.width));
            assert!(event.rect.y0 >= 0.0);
            assert!(event.rect.y0 <= f64::from(canvas.height) + opts.origin.top);
        }
    }

    #[test]
    fn last_tick_coincides_with_longest_box_end() {
        let chart = Chart::layout(
            &two_scores(),
            CanvasSize::new(500, 300),
            LayoutOptions::default(),
        )
        .unwrap();
        let last = chart.time_axis.ticks.last().unwrap();
        assert_eq!(last.x(), chart.time_axis.line.p1.x);
        assert!(close(last.x(), chart.events[0].rect.x1));
    }

    #[test]
    fn empty_input_renders_degenerate_chart() {
        let chart = Chart::layout(&[], CanvasSize::new(500, 300), LayoutOptions::default()).unwrap();
        assert!(chart.events.is_empty());
        assert_eq!(chart.scale.max_duration, 0.0);
        assert_eq!(chart.scale.max_depth, 0);
        assert_eq!(chart.depth_axis.rows.len(), 1);
        for tick in &chart.time_axis.ticks {
            assert!(tick.x().is_finite());
            assert!(tick.mark.p1.y.is_finite());
        }
    }

    #[test]
    fn configuration_is_checked_before_inputs() {
        let scores = [Score::new("bad", "never", 1.0, 0)];
        let err = Chart::layout(&scores, CanvasSize::new(0, 300), LayoutOptions::default())
            .unwrap_err();
        assert_eq!(err, LayoutError::InvalidConfiguration(ConfigError::ZeroWidth));

        let err = Chart::layout(&scores, CanvasSize::new(500, 300), LayoutOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::MalformedInput {
                index: 0,
                reason: MalformedReason::UnparseableStart(_),
                ..
            }
        ));
    }

    #[test]
    fn custom_scheme_is_used() {
        let scheme = |_: &Score| Color::rgb(1, 2, 3);
        let chart = Chart::layout_with(
            &two_scores(),
            CanvasSize::new(500, 300),
            LayoutOptions::default(),
            &scheme,
        )
        .unwrap();
        assert!(chart.events.iter().all(|e| e.fill == Color::rgb(1, 2, 3)));
    }
}
