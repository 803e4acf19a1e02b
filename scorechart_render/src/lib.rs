// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing-surface boundary and artifact output for scorechart.
//!
//! This crate takes the geometry produced by [`scorechart_core`] and turns it
//! into a persisted image. It defines:
//!
//! - [`DrawingSurface`]: the capability that accepts lines, filled
//!   rectangles, and text, then serializes the result
//! - [`SvgSurface`]: a [`DrawingSurface`] that produces SVG
//! - [`OutputSink`]: the capability that persists bytes at a destination,
//!   with [`FileSink`] as the filesystem implementation
//! - [`render`]: the entry contract: layout, draw, serialize, persist
//!
//! A render call owns its surface and sink for its whole duration and keeps
//! nothing afterwards.

mod artifact;
mod draw;
mod error;
mod sink;
mod surface;
mod svg;

use std::path::Path;

use log::info;
use scorechart_core::chart::Chart;
use scorechart_core::color::{ColorScheme, DepthCycle};
use scorechart_core::options::{CanvasSize, LayoutOptions};
use scorechart_core::score::Score;

pub use artifact::html_artifact;
pub use draw::draw_chart;
pub use error::RenderError;
pub use sink::{FileSink, OutputSink};
pub use surface::{DrawingSurface, EncodedImage, Stroke, StrokeStyles};
pub use svg::{SVG_MIME, SvgSurface};

/// Everything one render call needs.
#[derive(Clone, Copy, Debug)]
pub struct RenderRequest<'a> {
    /// Scores to chart, in draw order.
    pub scores: &'a [Score],
    /// Target canvas.
    pub canvas: CanvasSize,
    /// Layout options.
    pub options: LayoutOptions,
    /// Where the artifact is written.
    pub destination: &'a Path,
}

impl<'a> RenderRequest<'a> {
    /// Creates a request with default [`LayoutOptions`].
    #[must_use]
    pub fn new(scores: &'a [Score], width: u32, height: u32, destination: &'a Path) -> Self {
        Self {
            scores,
            canvas: CanvasSize::new(width, height),
            options: LayoutOptions::default(),
            destination,
        }
    }

    /// Replaces the layout options.
    #[must_use]
    pub fn with_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }
}

/// Lays out, draws, and persists `request` with the default colors.
///
/// Stages run in order: scale, depth axis, time axis, events, serialize,
/// persist. Layout failures return before `sink` is touched.
pub fn render<S, K>(
    request: &RenderRequest<'_>,
    surface: S,
    sink: &mut K,
) -> Result<(), RenderError>
where
    S: DrawingSurface,
    K: OutputSink + ?Sized,
{
    render_with_scheme(request, &DepthCycle::default(), surface, sink)
}

/// Like [`render`], coloring events with `scheme`.
pub fn render_with_scheme<C, S, K>(
    request: &RenderRequest<'_>,
    scheme: &C,
    surface: S,
    sink: &mut K,
) -> Result<(), RenderError>
where
    C: ColorScheme + ?Sized,
    S: DrawingSurface,
    K: OutputSink + ?Sized,
{
    let chart = Chart::layout_with(request.scores, request.canvas, request.options, scheme)?;
    render_chart(&chart, &StrokeStyles::default(), surface, sink, request.destination)
}

/// Draws an already laid-out `chart` and persists it at `destination`.
pub fn render_chart<S, K>(
    chart: &Chart,
    styles: &StrokeStyles,
    mut surface: S,
    sink: &mut K,
    destination: &Path,
) -> Result<(), RenderError>
where
    S: DrawingSurface,
    K: OutputSink + ?Sized,
{
    draw_chart(chart, styles, &mut surface);
    let image = surface.finish();
    let html = html_artifact(&image);
    sink.write(destination, html.as_bytes())
        .map_err(|source| RenderError::SinkWrite {
            path: destination.to_path_buf(),
            source,
        })?;
    info!(
        "wrote {} ({} events, {} bytes)",
        destination.display(),
        chart.events.len(),
        html.len()
    );
    Ok(())
}

/// Renders `request` to an SVG-backed HTML file at its destination.
pub fn render_to_file(request: &RenderRequest<'_>) -> Result<(), RenderError> {
    render(request, SvgSurface::new(request.canvas), &mut FileSink)
}
