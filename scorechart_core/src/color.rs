// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill colors and the pluggable score-to-color scheme.

use core::fmt;

use crate::score::Score;

/// An opaque RGB color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// `#000000`
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// `#ffffff`
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    /// `#ff0000`
    pub const RED: Self = Self::rgb(0xff, 0, 0);
    /// `#00ff00`
    pub const GREEN: Self = Self::rgb(0, 0xff, 0);
    /// `#0000ff`
    pub const BLUE: Self = Self::rgb(0, 0, 0xff);

    /// Creates a color from its channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Formats as a lowercase `#rrggbb` hex string.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self})")
    }
}

/// Picks the fill color for a score.
///
/// Implemented for any `Fn(&Score) -> Color`, so a closure works wherever a
/// scheme is expected. Layout takes schemes as a generic parameter.
pub trait ColorScheme {
    /// Returns the fill color for `score`.
    fn color_for(&self, score: &Score) -> Color;
}

impl<F> ColorScheme for F
where
    F: Fn(&Score) -> Color,
{
    fn color_for(&self, score: &Score) -> Color {
        self(score)
    }
}

/// Cycles through a fixed three-color palette by `depth % 3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthCycle {
    /// Colors for depth buckets 0, 1, and 2.
    pub palette: [Color; 3],
}

impl Default for DepthCycle {
    fn default() -> Self {
        Self {
            palette: [Color::RED, Color::GREEN, Color::BLUE],
        }
    }
}

impl ColorScheme for DepthCycle {
    fn color_for(&self, score: &Score) -> Color {
        self.palette[score.depth as usize % self.palette.len()]
    }
}
