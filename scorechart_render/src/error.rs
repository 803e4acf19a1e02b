// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render error taxonomy.

use std::io;
use std::path::PathBuf;

use scorechart_core::error::LayoutError;
use thiserror::Error;

/// Errors surfaced by [`render`](crate::render) and its variants.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Input or configuration was rejected before anything was drawn.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// The finished artifact could not be persisted. It is not retried.
    #[error("failed to write {}: {source}", .path.display())]
    SinkWrite {
        /// Destination that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}
