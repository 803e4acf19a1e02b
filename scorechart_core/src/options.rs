// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas size and layout options.

use crate::error::ConfigError;

/// Pixel dimensions of the target canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CanvasSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl CanvasSize {
    /// Creates a canvas size.
    #[inline]
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Pixel offset where both axes anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Origin {
    /// Offset from the top edge of the canvas.
    pub top: f64,
    /// Offset from the left edge of the canvas. Also the left margin that is
    /// excluded from the time axis span.
    pub left: f64,
}

impl Default for Origin {
    fn default() -> Self {
        Self {
            top: 50.0,
            left: 30.0,
        }
    }
}

/// Immutable options shared by every layout step of one call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutOptions {
    /// Axis anchor.
    pub origin: Origin,
    /// Height of one depth row band, in pixels.
    pub line_height: f64,
    /// Label font size, in pixels.
    pub font_size: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            origin: Origin::default(),
            line_height: 30.0,
            font_size: 20.0,
        }
    }
}

impl LayoutOptions {
    /// Checks these options against `canvas`.
    ///
    /// Zero margins are accepted; negative or non-finite ones are not.
    pub fn validate(&self, canvas: CanvasSize) -> Result<(), ConfigError> {
        if canvas.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if canvas.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        let Origin { top, left } = self.origin;
        if !(top.is_finite() && left.is_finite() && top >= 0.0 && left >= 0.0) {
            return Err(ConfigError::InvalidOrigin { top, left });
        }
        if left >= f64::from(canvas.width) {
            return Err(ConfigError::MarginOutsideCanvas {
                left,
                width: canvas.width,
            });
        }
        if !(self.line_height.is_finite() && self.line_height > 0.0) {
            return Err(ConfigError::InvalidLineHeight(self.line_height));
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(ConfigError::InvalidFontSize(self.font_size));
        }
        Ok(())
    }

    /// Top edge of the row band for `depth`.
    ///
    /// Rows are fixed-height bands indexed directly by depth.
    #[inline]
    #[must_use]
    pub fn row_top(&self, depth: u32) -> f64 {
        f64::from(depth) * self.line_height + self.origin.top
    }
}
