// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG drawing surface.

use core::fmt::Write as _;

use kurbo::{Line, Point, Rect};
use scorechart_core::color::Color;
use scorechart_core::options::CanvasSize;

use crate::surface::{DrawingSurface, EncodedImage, Stroke};

/// Media type of [`SvgSurface`] output.
pub const SVG_MIME: &str = "image/svg+xml";

/// A [`DrawingSurface`] that accumulates SVG elements.
///
/// The document is sized to the canvas and painted with a background before
/// any drawn element. Text is black.
#[derive(Clone, Debug)]
pub struct SvgSurface {
    canvas: CanvasSize,
    background: Option<Color>,
    font_family: String,
    body: String,
}

impl SvgSurface {
    /// Creates a surface for `canvas` with a white background and a serif
    /// font.
    #[must_use]
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            background: Some(Color::WHITE),
            font_family: "serif".into(),
            body: String::new(),
        }
    }

    /// Sets the background fill. `None` leaves the document transparent.
    #[must_use]
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Sets the font family used for all text.
    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Renders the complete SVG document.
    #[must_use]
    pub fn to_document(&self) -> String {
        let CanvasSize { width, height } = self.canvas;
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
        );
        if let Some(bg) = self.background {
            let _ = write!(svg, "<rect width=\"100%\" height=\"100%\" fill=\"{bg}\"/>");
        }
        svg.push_str(&self.body);
        svg.push_str("</svg>");
        svg
    }
}

impl DrawingSurface for SvgSurface {
    fn line(&mut self, line: Line, stroke: &Stroke) {
        let _ = write!(
            self.body,
            "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            line.p0.x, line.p0.y, line.p1.x, line.p1.y, stroke.color, stroke.width,
        );
    }

    fn fill_rect(&mut self, rect: Rect, fill: Color) {
        let _ = write!(
            self.body,
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{fill}\"/>",
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
        );
    }

    fn text(&mut self, anchor: Point, text: &str, font_size: f64) {
        let _ = write!(
            self.body,
            "<text x=\"{:.2}\" y=\"{:.2}\" font-family=\"{}\" font-size=\"{font_size}\" fill=\"{}\">{}</text>",
            anchor.x,
            anchor.y,
            escape_xml(&self.font_family),
            Color::BLACK,
            escape_xml(text),
        );
    }

    fn finish(self) -> EncodedImage {
        EncodedImage {
            mime: SVG_MIME,
            bytes: self.to_document().into_bytes(),
        }
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
