// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Command-line drivers for the extent interval primitives.
//!
//! `extent sort` prints a set of intervals under each of the three orderings.
//! `extent hits` probes a box with uniform random points and reports how many
//! landed inside.

mod canvas;
mod config;
mod demo;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use extent_core::math::{interval::Interval1D, rect::Interval2D};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::canvas::CharCanvas;
use crate::config::{DemoConfig, RegionConfig};
use crate::demo::{DEFAULT_INTERVALS, DEFAULT_TRIALS, DEFAULT_X, DEFAULT_Y};

#[derive(Debug, Parser)]
#[command(name = "extent", version, about)]
struct Opt {
    /// Log filter, e.g. `warn`, `debug` or `extent_cli=trace`.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// TOML file supplying intervals and box settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sort intervals by min endpoint, max endpoint and length.
    Sort,
    /// Count uniform random points in [0, 1)² that fall inside a box.
    #[command(allow_negative_numbers = true)]
    Hits(HitsArgs),
}

#[derive(Debug, Clone, Default, Args)]
struct HitsArgs {
    xmin: Option<f64>,
    xmax: Option<f64>,
    ymin: Option<f64>,
    ymax: Option<f64>,
    trials: Option<u64>,

    /// Seed for the random generator; drawn from the OS when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the box and the missed points as a character grid.
    #[arg(long)]
    plot: bool,

    #[arg(long, default_value_t = 64)]
    width: usize,

    #[arg(long, default_value_t = 24)]
    height: usize,
}

/// Fully resolved inputs of the hit demo.
#[derive(Debug, Clone, PartialEq)]
struct HitsPlan {
    region: Interval2D,
    trials: u64,
    seed: Option<u64>,
}

/// Merges command-line values over configuration values over defaults.
fn resolve_hits(args: &HitsArgs, cfg: Option<&RegionConfig>) -> Result<HitsPlan> {
    let cfg = cfg.cloned().unwrap_or_default();

    let (x, y) = match (args.xmin, args.xmax, args.ymin, args.ymax) {
        (Some(x0), Some(x1), Some(y0), Some(y1)) => ([x0, x1], [y0, y1]),
        (None, None, None, None) => (cfg.x.unwrap_or(DEFAULT_X), cfg.y.unwrap_or(DEFAULT_Y)),
        _ => bail!("expected all four of <XMIN> <XMAX> <YMIN> <YMAX> or none"),
    };

    Ok(HitsPlan {
        region: config::region(x, y)?,
        trials: args.trials.or(cfg.trials).unwrap_or(DEFAULT_TRIALS),
        seed: args.seed.or(cfg.seed),
    })
}

fn run_sort(cfg: &DemoConfig) -> Result<()> {
    let intervals = match cfg.intervals()? {
        Some(intervals) => intervals,
        None => DEFAULT_INTERVALS
            .iter()
            .map(|&pair| config::axis("interval", pair))
            .collect::<Result<Vec<Interval1D>>>()?,
    };
    info!(count = intervals.len(), "running sort demo");

    for section in demo::sort_demo(&intervals) {
        println!("{}", section);
    }
    Ok(())
}

fn run_hits(args: &HitsArgs, cfg: &DemoConfig) -> Result<()> {
    let plan = resolve_hits(args, cfg.region.as_ref())?;
    let seed = plan.seed.unwrap_or_else(|| rand::rng().random());
    info!(region = %plan.region, trials = plan.trials, seed, "running hit demo");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let unit = Interval1D::new(0.0, 1.0).context("unit interval")?;
    let mut canvas = CharCanvas::new(
        args.width.max(2),
        args.height.max(2),
        Interval2D::new(unit, unit),
    );

    debug!(width = canvas.width(), height = canvas.height(), "canvas ready");

    let report = demo::hit_demo(&plan.region, plan.trials, &mut rng, &mut canvas);
    debug!(ratio = report.hit_ratio(), "hit demo finished");

    if args.plot {
        println!("{}", canvas.render());
    }
    println!("{}", report.hits);
    println!("box area = {:.2}", report.area);
    Ok(())
}

fn init_tracing(level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(level).with_context(|| format!("invalid log level '{}'", level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    init_tracing(&opt.log_level)?;

    let cfg = match &opt.config {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            DemoConfig::load(path)?
        }
        None => DemoConfig::default(),
    };

    match &opt.command {
        Command::Sort => run_sort(&cfg),
        Command::Hits(args) => run_hits(args, &cfg),
    }
}
