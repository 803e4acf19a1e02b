// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Score input records and their resolution into layout input.

use crate::error::{LayoutError, MalformedReason};
use crate::time::{StartTime, Timestamp};

/// One named, timed interval at a nesting depth.
///
/// Scores are supplied by the caller and never mutated. `depth` is a free
/// field; nothing checks it against interval containment.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Score {
    /// Display label. May be empty and need not be unique.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Absolute start of the interval.
    pub start: StartTime,
    /// Length in milliseconds. Zero is valid.
    pub duration: f64,
    /// Nesting level, selecting the score's row band.
    pub depth: u32,
}

impl Score {
    /// Creates a score.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        start: impl Into<StartTime>,
        duration: f64,
        depth: u32,
    ) -> Self {
        Self {
            name: name.into(),
            start: start.into(),
            duration,
            depth,
        }
    }
}

/// A score paired with its resolved absolute start.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedScore<'a> {
    /// The original input record.
    pub score: &'a Score,
    /// `score.start` as an absolute instant.
    pub start: Timestamp,
}

/// Resolves every score's start and checks its duration.
///
/// Fails on the first malformed score, identifying it by index and name.
/// Output order matches input order.
pub fn resolve_scores(scores: &[Score]) -> Result<Vec<ResolvedScore<'_>>, LayoutError> {
    scores
        .iter()
        .enumerate()
        .map(|(index, score)| {
            let malformed = |reason| LayoutError::MalformedInput {
                index,
                name: score.name.clone(),
                reason,
            };
            if !score.duration.is_finite() || score.duration < 0.0 {
                return Err(malformed(MalformedReason::InvalidDuration(score.duration)));
            }
            let start = score.start.resolve().map_err(malformed)?;
            Ok(ResolvedScore { score, start })
        })
        .collect()
}
