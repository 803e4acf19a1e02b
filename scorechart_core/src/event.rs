// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Score rectangles.

use kurbo::{Point, Rect};

use crate::TIME_UNIT;
use crate::color::{Color, ColorScheme};
use crate::options::LayoutOptions;
use crate::scale::ScaleModel;
use crate::score::ResolvedScore;

/// The drawable form of one score.
#[derive(Clone, Debug, PartialEq)]
pub struct EventBox {
    /// Position of the source score in the input sequence.
    pub index: usize,
    /// Depth of the source score.
    pub depth: u32,
    /// Filled area. Zero-width for zero-duration scores.
    pub rect: Rect,
    /// Fill color chosen by the scheme.
    pub fill: Color,
    /// Label text: name, duration, and unit.
    pub label: String,
    /// Baseline-left text anchor, vertically centered in the row.
    pub label_anchor: Point,
}

/// Maps every score to exactly one [`EventBox`], in input order.
///
/// Overlapping scores at the same depth are not resolved; later boxes draw
/// over earlier ones.
#[must_use]
pub fn layout_events<C: ColorScheme + ?Sized>(
    scores: &[ResolvedScore<'_>],
    scale: &ScaleModel,
    options: &LayoutOptions,
    scheme: &C,
) -> Vec<EventBox> {
    scores
        .iter()
        .enumerate()
        .map(|(index, resolved)| {
            let score = resolved.score;
            let left = scale.x_at(scale.offset_of(resolved.start), options.origin);
            let top = options.row_top(score.depth);
            let rect = Rect::from_origin_size(
                (left, top),
                (scale.width_of(score.duration), options.line_height),
            );
            EventBox {
                index,
                depth: score.depth,
                rect,
                fill: scheme.color_for(score),
                label: format!("{} {}{TIME_UNIT}", score.name, score.duration),
                label_anchor: Point::new(left, top + options.line_height / 2.0),
            }
        })
        .collect()
}
