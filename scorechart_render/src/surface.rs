// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-surface capability.
//!
//! A [`DrawingSurface`] accepts primitive draw calls and, once drawing is
//! done, serializes everything it accumulated into an [`EncodedImage`]. The
//! surface is consumed by [`finish`](DrawingSurface::finish), so one surface
//! serves exactly one render call.

use kurbo::{Line, Point, Rect};
use scorechart_core::color::Color;

/// Stroke parameters for a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Strokes used for chart furniture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StrokeStyles {
    /// Both axis lines.
    pub axis: Stroke,
    /// Time-axis tick marks.
    pub tick: Stroke,
}

/// A serialized image and its media type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedImage {
    /// Media type, e.g. `image/svg+xml`.
    pub mime: &'static str,
    /// Encoded image bytes.
    pub bytes: Vec<u8>,
}

/// Accepts primitive draw calls and serializes the result.
///
/// Calls are applied in order; later draws cover earlier ones.
pub trait DrawingSurface {
    /// Strokes a straight line.
    fn line(&mut self, line: Line, stroke: &Stroke);

    /// Fills an axis-aligned rectangle. Zero-area rectangles are valid.
    fn fill_rect(&mut self, rect: Rect, fill: Color);

    /// Draws `text` with its baseline-left corner at `anchor`.
    fn text(&mut self, anchor: Point, text: &str, font_size: f64);

    /// Serializes everything drawn so far.
    fn finish(self) -> EncodedImage
    where
        Self: Sized;
}
