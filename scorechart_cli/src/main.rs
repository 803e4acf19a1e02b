// Copyright 2026 the Scorechart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a JSON score file as a flame-graph style HTML timeline.
//!
//! The input is a JSON array of `{"name", "start", "duration", "depth"}`
//! objects. The output is an HTML fragment embedding the chart as an inline
//! SVG image. Set `RUST_LOG=debug` to see the computed scale.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use scorechart_core::chart::Chart;
use scorechart_core::options::{CanvasSize, LayoutOptions, Origin};
use scorechart_core::score::Score;
use scorechart_debug::pretty::PrettyPrinter;
use scorechart_render::{FileSink, StrokeStyles, SvgSurface, render_chart};

#[derive(Debug, Parser)]
#[command(name = "scorechart", version, about)]
struct Args {
    /// JSON file holding an array of scores.
    input: PathBuf,

    /// Destination of the HTML artifact. Overwritten if it exists.
    #[arg(short, long, default_value = "scorechart.html")]
    output: PathBuf,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = 1200)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Height of one depth row in pixels.
    #[arg(long)]
    line_height: Option<f64>,

    /// Label font size in pixels.
    #[arg(long)]
    font_size: Option<f64>,

    /// Left margin (time-axis origin) in pixels.
    #[arg(long)]
    left: Option<f64>,

    /// Top margin (depth-axis origin) in pixels.
    #[arg(long)]
    top: Option<f64>,

    /// Print the computed layout to stdout before writing.
    #[arg(long)]
    dump_layout: bool,
}

impl Args {
    fn layout_options(&self) -> LayoutOptions {
        let defaults = LayoutOptions::default();
        LayoutOptions {
            origin: Origin {
                top: self.top.unwrap_or(defaults.origin.top),
                left: self.left.unwrap_or(defaults.origin.left),
            },
            line_height: self.line_height.unwrap_or(defaults.line_height),
            font_size: self.font_size.unwrap_or(defaults.font_size),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    let scores: Vec<Score> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse scores from {}", args.input.display()))?;
    debug!("loaded {} scores from {}", scores.len(), args.input.display());

    let canvas = CanvasSize::new(args.width, args.height);
    let chart = Chart::layout(&scores, canvas, args.layout_options())?;

    if args.dump_layout {
        PrettyPrinter::stdout().print_chart(&chart)?;
    }

    render_chart(
        &chart,
        &StrokeStyles::default(),
        SvgSurface::new(canvas),
        &mut FileSink,
        &args.output,
    )?;

    println!(
        "Wrote {} ({} scores)",
        args.output.display(),
        chart.events.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "scorechart",
            "scores.json",
            "--left",
            "40",
            "--font-size",
            "12",
        ]);
        let opts = args.layout_options();
        assert_eq!(opts.origin.left, 40.0);
        assert_eq!(opts.origin.top, 50.0);
        assert_eq!(opts.font_size, 12.0);
        assert_eq!(opts.line_height, 30.0);
        assert_eq!(args.output, PathBuf::from("scorechart.html"));
        assert_eq!((args.width, args.height), (1200, 600));
    }
}
