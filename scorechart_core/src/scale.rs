// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared time-to-pixel scale.
//!
//! A [`ScaleModel`] is computed once per layout call from the complete score
//! set and handed unchanged to both axis and event layout. Every horizontal
//! pixel position in a chart goes through [`ScaleModel::x_at`], so axis ticks
//! and event rectangles cannot disagree about where a millisecond lands.

use crate::options::{CanvasSize, Origin};
use crate::score::ResolvedScore;
use crate::time::Timestamp;

/// Epoch, extent, and pixel ratio derived from one score set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleModel {
    /// Earliest start across all scores; `None` when there are none.
    pub epoch: Option<Timestamp>,
    /// Longest duration across all scores, in milliseconds; `0.0` when empty.
    pub max_duration: f64,
    /// Pixels per millisecond.
    ///
    /// `0.0` when `max_duration` is zero, collapsing every horizontal extent
    /// onto the origin instead of producing non-finite coordinates.
    pub ratio: f64,
    /// Deepest nesting level across all scores; `0` when empty.
    pub max_depth: u32,
}

impl ScaleModel {
    /// Derives the scale for `scores` drawn on `canvas` with the given origin.
    ///
    /// The time axis spans `canvas.width - origin.left` pixels; the longest
    /// score fills it exactly.
    #[must_use]
    pub fn compute(scores: &[ResolvedScore<'_>], canvas: CanvasSize, origin: Origin) -> Self {
        let epoch = scores.iter().map(|r| r.start).min();
        let max_duration = scores
            .iter()
            .map(|r| r.score.duration)
            .fold(0.0, f64::max);
        let max_depth = scores.iter().map(|r| r.score.depth).max().unwrap_or(0);
        let ratio = if max_duration > 0.0 {
            (f64::from(canvas.width) - origin.left) / max_duration
        } else {
            0.0
        };
        Self {
            epoch,
            max_duration,
            ratio,
            max_depth,
        }
    }

    /// Returns `true` when no score has a positive duration.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.max_duration <= 0.0
    }

    /// Milliseconds from the epoch to `start`. Zero when there is no epoch.
    #[inline]
    #[must_use]
    pub fn offset_of(&self, start: Timestamp) -> f64 {
        self.epoch.map_or(0.0, |epoch| start.millis_since(epoch))
    }

    /// Horizontal pixel position of a time offset (milliseconds from the
    /// epoch).
    #[inline]
    #[must_use]
    pub fn x_at(&self, offset_ms: f64, origin: Origin) -> f64 {
        offset_ms * self.ratio + origin.left
    }

    /// Pixel length of a span of `millis` milliseconds.
    #[inline]
    #[must_use]
    pub fn width_of(&self, millis: f64) -> f64 {
        millis * self.ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{Score, resolve_scores};

    const CANVAS: CanvasSize = CanvasSize::new(500, 300);

    fn origin() -> Origin {
        Origin::default()
    }

    #[test]
    fn derives_epoch_extent_and_ratio() {
        let scores = [
            Score::new("b", "2024-01-01T00:00:00.010Z", 50.0, 1),
            Score::new("a", "2024-01-01T00:00:00.000Z", 100.0, 0),
            Score::new("c", "2024-01-01T00:00:00.020Z", 10.0, 4),
        ];
        let resolved = resolve_scores(&scores).unwrap();
        let scale = ScaleModel::compute(&resolved, CANVAS, origin());
        assert_eq!(scale.epoch, Some(resolved[1].start));
        assert_eq!(scale.max_duration, 100.0);
        assert_eq!(scale.max_depth, 4);
        assert!((scale.ratio - 4.7).abs() < 1e-12, "ratio = {}", scale.ratio);
        assert!(!scale.is_degenerate());
    }

    #[test]
    fn empty_set_is_degenerate_but_finite() {
        let scale = ScaleModel::compute(&[], CANVAS, origin());
        assert_eq!(scale.epoch, None);
        assert_eq!(scale.max_duration, 0.0);
        assert_eq!(scale.max_depth, 0);
        assert_eq!(scale.ratio, 0.0);
        assert!(scale.is_degenerate());
        assert_eq!(scale.x_at(123.0, origin()), 30.0);
    }

    #[test]
    fn all_zero_durations_collapse_to_origin() {
        let scores = [
            Score::new("p", 0.0, 0.0, 0),
            Score::new("q", 40.0, 0.0, 2),
        ];
        let resolved = resolve_scores(&scores).unwrap();
        let scale = ScaleModel::compute(&resolved, CANVAS, origin());
        assert_eq!(scale.ratio, 0.0);
        assert_eq!(scale.max_depth, 2);
        let x = scale.x_at(scale.offset_of(resolved[1].start), origin());
        assert!(x.is_finite());
        assert_eq!(x, 30.0);
    }

    #[test]
    fn offsets_are_relative_to_epoch() {
        let scores = [Score::new("a", 1_000.0, 5.0, 0), Score::new("b", 1_250.5, 5.0, 0)];
        let resolved = resolve_scores(&scores).unwrap();
        let scale = ScaleModel::compute(&resolved, CANVAS, origin());
        assert_eq!(scale.offset_of(resolved[0].start), 0.0);
        assert_eq!(scale.offset_of(resolved[1].start), 250.5);
    }
}
