// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale model and geometry layout for timed, nested score charts.
//!
//! A *score* is a named interval with an absolute start, a duration in
//! milliseconds, and a nesting depth. `scorechart_core` turns a set of scores
//! into flame-graph style geometry: rows indexed by depth, time running left
//! to right, one rectangle per score.
//!
//! # Architecture
//!
//! Layout is a single pure pass with no state carried between calls:
//!
//! ```text
//!   &[Score] ──► resolve_scores() ──► ScaleModel::compute()
//!                                           │  (epoch, max_duration,
//!                                           │   ratio, max_depth)
//!                 ┌─────────────────────────┼──────────────────────┐
//!                 ▼                         ▼                      ▼
//!   DepthAxis::layout()        TimeAxis::layout()        layout_events()
//!                 └─────────────────────────┴──────────────────────┘
//!                                           ▼
//!                                         Chart
//! ```
//!
//! **[`time`]**: Absolute [`Timestamp`](time::Timestamp)s and resolution of
//! textual or numeric start times.
//!
//! **[`score`]**: The [`Score`](score::Score) input record.
//!
//! **[`options`]**: Canvas size, origin, row height, and font size, with
//! up-front validation.
//!
//! **[`scale`]**: The [`ScaleModel`](scale::ScaleModel) shared by every
//! horizontal coordinate.
//!
//! **[`axis`]**: Depth and time axis geometry.
//!
//! **[`event`]**: One [`EventBox`](event::EventBox) per score.
//!
//! **[`color`]**: The [`ColorScheme`](color::ColorScheme) capability and the
//! default depth-cycling palette.
//!
//! **[`chart`]**: [`Chart::layout`](chart::Chart::layout), which runs the
//! whole pass.
//!
//! # Crate features
//!
//! - `serde` (disabled by default): `Deserialize`/`Serialize` for
//!   [`Score`](score::Score) and [`StartTime`](time::StartTime).

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod axis;
pub mod chart;
pub mod color;
pub mod error;
pub mod event;
pub mod options;
pub mod scale;
pub mod score;
pub mod time;

/// Unit suffix for every time label. Durations are always milliseconds.
pub const TIME_UNIT: &str = "ms";
