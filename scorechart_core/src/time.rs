// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Absolute instants and start-time resolution.
//!
//! [`Timestamp`] is an absolute instant stored as whole microseconds since the
//! Unix epoch, so instants compare exactly and subtract without drift.
//!
//! [`StartTime`] is the raw, caller-supplied form of a score's start: either a
//! textual date/time or a millisecond count. [`StartTime::resolve`] turns it
//! into a [`Timestamp`] or reports why it could not.

use core::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::MalformedReason;

/// Naive (offset-less) layouts accepted after RFC 3339. Interpreted as UTC.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// An absolute instant in microseconds since the Unix epoch.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a timestamp from microseconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    /// Returns the raw microsecond value.
    #[inline]
    #[must_use]
    pub const fn as_micros(self) -> i64 {
        self.0
    }

    /// Creates a timestamp from (possibly fractional) milliseconds since the
    /// Unix epoch, rounded to the nearest microsecond.
    ///
    /// Returns `None` for non-finite input or values outside the `i64`
    /// microsecond range.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "range is checked before the cast"
    )]
    pub fn from_millis(millis: f64) -> Option<Self> {
        let micros = (millis * 1000.0).round();
        if !micros.is_finite() || micros < i64::MIN as f64 || micros >= i64::MAX as f64 {
            return None;
        }
        Some(Self(micros as i64))
    }

    /// Returns this instant as milliseconds since the Unix epoch.
    #[inline]
    #[must_use]
    pub fn as_millis(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Returns the signed number of milliseconds from `earlier` to `self`.
    ///
    /// Uses an `i128` intermediate so opposite-extreme instants cannot
    /// overflow.
    #[inline]
    #[must_use]
    pub fn millis_since(self, earlier: Self) -> f64 {
        (i128::from(self.0) - i128::from(earlier.0)) as f64 / 1000.0
    }

    /// Parses a textual timestamp.
    ///
    /// Accepts, in order: RFC 3339 (with `Z` or a numeric offset), a naive
    /// `YYYY-MM-DD[T ]HH:MM:SS[.fff]` date-time taken as UTC, and a bare
    /// `YYYY-MM-DD` date taken as midnight UTC.
    pub fn parse(text: &str) -> Result<Self, MalformedReason> {
        let trimmed = text.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(dt.timestamp_micros()));
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self(naive.and_utc().timestamp_micros()));
            }
        }
        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| Self(midnight.and_utc().timestamp_micros()))
            .ok_or_else(|| MalformedReason::UnparseableStart(text.into()))
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({}us)", self.0)
    }
}

/// The caller-supplied start of a score, before resolution.
///
/// With the `serde` feature this deserializes untagged: a JSON number is
/// [`Millis`](Self::Millis), a JSON string is [`Text`](Self::Text).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StartTime {
    /// Milliseconds since the Unix epoch.
    Millis(f64),
    /// A textual date/time, see [`Timestamp::parse`].
    Text(String),
}

impl StartTime {
    /// Resolves this start to an absolute [`Timestamp`].
    pub fn resolve(&self) -> Result<Timestamp, MalformedReason> {
        match self {
            Self::Millis(ms) => {
                Timestamp::from_millis(*ms).ok_or(MalformedReason::NonFiniteStart(*ms))
            }
            Self::Text(text) => Timestamp::parse(text),
        }
    }
}

impl From<&str> for StartTime {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for StartTime {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for StartTime {
    fn from(millis: f64) -> Self {
        Self::Millis(millis)
    }
}

impl From<Timestamp> for StartTime {
    fn from(ts: Timestamp) -> Self {
        Self::Millis(ts.as_millis())
    }
}
