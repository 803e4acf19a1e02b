// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable dumps of scorechart layouts.
//!
//! - [`pretty::PrettyPrinter`]: one line per geometry element of a
//!   [`Chart`](scorechart_core::chart::Chart).

pub mod pretty;
