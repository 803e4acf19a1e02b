// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Depth and time axis geometry.
//!
//! Both axes anchor at the layout origin. The depth axis runs down from it
//! with one label per row band; the time axis runs right from it with
//! [`TICK_COUNT`] evenly spaced ticks placed through the shared
//! [`ScaleModel`].

use kurbo::{Line, Point};

use crate::TIME_UNIT;
use crate::options::LayoutOptions;
use crate::scale::ScaleModel;

/// Number of interior ticks on the time axis.
pub const TICK_COUNT: u32 = 10;

/// Height of a tick mark above the time axis, in pixels.
pub const TICK_HEIGHT: f64 = 10.0;

/// Horizontal (and, for ticks, vertical) inset of axis labels from their
/// anchor, in pixels.
pub const LABEL_INSET: f64 = 20.0;

/// The label for one depth row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowLabel {
    /// Depth this label names.
    pub depth: u32,
    /// Baseline-left text anchor.
    pub anchor: Point,
    /// Label text.
    pub text: String,
}

/// Vertical axis: one line plus a label per depth `0..=max_depth`.
#[derive(Clone, Debug, PartialEq)]
pub struct DepthAxis {
    /// Axis line, top to bottom.
    pub line: Line,
    /// Row labels, shallowest first.
    pub rows: Vec<RowLabel>,
}

impl DepthAxis {
    /// Lays out the depth axis.
    ///
    /// The line spans `(max_depth + 1) * line_height` pixels. Each label is
    /// inset left of the axis and vertically centered in its row band.
    #[must_use]
    pub fn layout(scale: &ScaleModel, options: &LayoutOptions) -> Self {
        let origin = options.origin;
        let bands = f64::from(scale.max_depth) + 1.0;
        let line = Line::new(
            (origin.left, origin.top),
            (origin.left, origin.top + bands * options.line_height),
        );
        let rows = (0..=scale.max_depth)
            .map(|depth| RowLabel {
                depth,
                anchor: Point::new(
                    origin.left - LABEL_INSET,
                    options.row_top(depth) + options.line_height / 2.0 + options.font_size / 2.0,
                ),
                text: depth.to_string(),
            })
            .collect();
        Self { line, rows }
    }
}

/// One tick on the time axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    /// 1-based tick index; index [`TICK_COUNT`] sits at the axis end.
    pub index: u32,
    /// Time offset from the epoch, in milliseconds.
    pub value: f64,
    /// Tick mark, rising from the axis.
    pub mark: Line,
    /// Baseline-left text anchor.
    pub label_anchor: Point,
    /// Label text, e.g. `"47.00ms"`.
    pub label: String,
}

impl Tick {
    /// Horizontal pixel position of this tick.
    #[inline]
    #[must_use]
    pub fn x(&self) -> f64 {
        self.mark.p0.x
    }
}

/// Horizontal axis: one line plus [`TICK_COUNT`] ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeAxis {
    /// Axis line, left to right.
    pub line: Line,
    /// Ticks in increasing time order.
    pub ticks: Vec<Tick>,
}

impl TimeAxis {
    /// Lays out the time axis.
    ///
    /// The line spans `max_duration * ratio` pixels. Tick `i` sits at
    /// `max_duration * i / TICK_COUNT` milliseconds, mapped through the same
    /// scale as the line end, so the last tick coincides with it. With a
    /// degenerate scale every tick collapses onto the origin.
    #[must_use]
    pub fn layout(scale: &ScaleModel, options: &LayoutOptions) -> Self {
        let origin = options.origin;
        let line = Line::new(
            (origin.left, origin.top),
            (scale.x_at(scale.max_duration, origin), origin.top),
        );
        let ticks = (1..=TICK_COUNT)
            .map(|index| {
                let value = scale.max_duration * (f64::from(index) / f64::from(TICK_COUNT));
                let x = scale.x_at(value, origin);
                Tick {
                    index,
                    value,
                    mark: Line::new((x, origin.top), (x, origin.top - TICK_HEIGHT)),
                    label_anchor: Point::new(x - LABEL_INSET, origin.top - LABEL_INSET),
                    label: tick_label(value),
                }
            })
            .collect();
        Self { line, ticks }
    }
}

/// Formats a tick value with two decimals, rounding exact halves away from
/// zero (`0.125` reads `0.13`), not to the even digit.
fn tick_label(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded:.2}{TIME_UNIT}")
}
