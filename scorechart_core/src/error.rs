// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout error taxonomy.
//!
//! Every layout error is fatal to the call that produced it. Nothing here is
//! retried internally.

use thiserror::Error;

/// Errors surfaced by [`Chart::layout`](crate::chart::Chart::layout) and the
/// steps it is built from.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LayoutError {
    /// A score's fields cannot be turned into layout input.
    #[error("score #{index} ({name:?}) is malformed: {reason}")]
    MalformedInput {
        /// Position of the offending score in the input sequence.
        index: usize,
        /// The offending score's name, for identification.
        name: String,
        /// What was wrong with it.
        reason: MalformedReason,
    },
    /// Canvas or layout options are unusable. Checked before any layout work.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

/// Why a single score was rejected.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MalformedReason {
    /// The textual start is not a recognized date/time.
    #[error("start {0:?} is not a recognized timestamp")]
    UnparseableStart(String),
    /// The numeric start is NaN, infinite, or out of range.
    #[error("start {0} is not a representable millisecond value")]
    NonFiniteStart(f64),
    /// The duration is negative or not finite.
    #[error("duration {0} is not a finite, non-negative number")]
    InvalidDuration(f64),
}

/// Why a canvas/options pair was rejected.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Canvas width is zero.
    #[error("canvas width must be positive")]
    ZeroWidth,
    /// Canvas height is zero.
    #[error("canvas height must be positive")]
    ZeroHeight,
    /// The left margin leaves no room for the time axis.
    #[error("left margin {left} must be less than canvas width {width}")]
    MarginOutsideCanvas {
        /// Requested left margin.
        left: f64,
        /// Canvas width.
        width: u32,
    },
    /// An origin offset is negative or not finite.
    #[error("origin (top {top}, left {left}) must be finite and non-negative")]
    InvalidOrigin {
        /// Requested top offset.
        top: f64,
        /// Requested left offset.
        left: f64,
    },
    /// Row height is zero, negative, or not finite.
    #[error("line height {0} must be finite and positive")]
    InvalidLineHeight(f64),
    /// Font size is zero, negative, or not finite.
    #[error("font size {0} must be finite and positive")]
    InvalidFontSize(f64),
}
