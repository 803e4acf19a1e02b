// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable layout output.
//!
//! [`PrettyPrinter`] writes one line per geometry element of a [`Chart`] to a
//! [`Write`](std::io::Write) destination (default: stderr). Coordinates are in
//! canvas pixels.

use std::io::{self, Write};

use scorechart_core::chart::Chart;

/// Writes human-readable layout lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrinter<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrinter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrinter").finish_non_exhaustive()
    }
}

impl PrettyPrinter {
    /// Creates a printer that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(io::stderr()),
        }
    }

    /// Creates a printer that writes to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout()),
        }
    }

    /// Creates a printer that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrinter<W> {
    /// Creates a printer that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the printer, returning its destination.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes every element of `chart`, axes first, then events in input
    /// order.
    pub fn print_chart(&mut self, chart: &Chart) -> io::Result<()> {
        let scale = &chart.scale;
        let epoch = scale
            .epoch
            .map_or_else(|| "none".to_owned(), |e| format!("{}us", e.as_micros()));
        writeln!(
            self.writer,
            "[scale] canvas={}x{} epoch={epoch} max_duration={}ms ratio={:.4}px/ms max_depth={}",
            chart.canvas.width, chart.canvas.height, scale.max_duration, scale.ratio, scale.max_depth,
        )?;

        let depth = &chart.depth_axis;
        writeln!(
            self.writer,
            "[depth-axis] ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            depth.line.p0.x, depth.line.p0.y, depth.line.p1.x, depth.line.p1.y,
        )?;
        for row in &depth.rows {
            writeln!(
                self.writer,
                "[row] depth={} label={:?} at ({:.1}, {:.1})",
                row.depth, row.text, row.anchor.x, row.anchor.y,
            )?;
        }

        let time = &chart.time_axis;
        writeln!(
            self.writer,
            "[time-axis] ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            time.line.p0.x, time.line.p0.y, time.line.p1.x, time.line.p1.y,
        )?;
        for tick in &time.ticks {
            writeln!(
                self.writer,
                "[tick] #{} value={:.2}ms x={:.1} label={:?}",
                tick.index,
                tick.value,
                tick.x(),
                tick.label,
            )?;
        }

        for event in &chart.events {
            let r = event.rect;
            writeln!(
                self.writer,
                "[event] #{} depth={} rect=({:.1}, {:.1}, {:.1}x{:.1}) fill={} label={:?}",
                event.index,
                event.depth,
                r.x0,
                r.y0,
                r.width(),
                r.height(),
                event.fill,
                event.label,
            )?;
        }
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorechart_core::options::{CanvasSize, LayoutOptions};
    use scorechart_core::score::Score;

    fn print(scores: &[Score]) -> String {
        let chart =
            Chart::layout(scores, CanvasSize::new(500, 300), LayoutOptions::default()).unwrap();
        let mut printer = PrettyPrinter::with_writer(Vec::<u8>::new());
        printer.print_chart(&chart).unwrap();
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn one_line_per_element() {
        let output = print(&[Score::new("a", 0.0, 100.0, 0), Score::new("b", 10.0, 50.0, 1)]);
        let lines: Vec<_> = output.lines().collect();
        // scale + depth axis + 2 rows + time axis + 10 ticks + 2 events
        assert_eq!(lines.len(), 17, "got: {output}");
        assert!(lines[0].starts_with("[scale] canvas=500x300 epoch=0us"), "got: {output}");
        assert!(lines[0].contains("ratio=4.7000px/ms"), "got: {output}");
        assert_eq!(
            lines[16],
            "[event] #1 depth=1 rect=(77.0, 80.0, 235.0x30.0) fill=#00ff00 label=\"b 50ms\""
        );
    }

    #[test]
    fn empty_chart_has_no_epoch() {
        let output = print(&[]);
        assert!(output.contains("epoch=none"), "got: {output}");
        assert!(!output.contains("[event]"), "got: {output}");
    }
}
