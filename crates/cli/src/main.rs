use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gearshape::prelude::*;
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{current_git_rev, Provenance};

#[derive(Parser)]
#[command(name = "gearshape-cli")]
#[command(about = "Rate shape differences between closed contours (TAR + DTW)")]
struct Cmd {
    /// Log debug events from the rating pipeline
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Rate two reference shapes against each other
    Compare {
        /// circular | ellipse | focal_ellipse
        #[arg(long)]
        a: StdShape,
        /// circular | ellipse | focal_ellipse
        #[arg(long)]
        b: StdShape,
        /// Points generated per reference shape
        #[arg(long, default_value_t = 256)]
        points: usize,
        /// Common resample rate (default: the larger input length)
        #[arg(long)]
        samples: Option<usize>,
        #[arg(long, value_enum, default_value_t = Strategy::Warped)]
        strategy: Strategy,
    },
    /// Rate a 10×10 square against 10×h rectangles for h on a linear grid
    Sweep {
        #[arg(long, default_value_t = 64)]
        samples: usize,
        #[arg(long, default_value_t = 21)]
        steps: usize,
        #[arg(long, default_value_t = 1.0)]
        h_min: f64,
        #[arg(long, default_value_t = 21.0)]
        h_max: f64,
        #[arg(long, value_enum, default_value_t = Strategy::Warped)]
        strategy: Strategy,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Strategy {
    /// Dynamic time warping per offset
    Warped,
    /// Rigid diagonal correspondence per offset
    Direct,
}

impl From<Strategy> for AlignmentStrategy {
    fn from(s: Strategy) -> Self {
        match s {
            Strategy::Warped => AlignmentStrategy::Warped,
            Strategy::Direct => AlignmentStrategy::Direct,
        }
    }
}

#[derive(Serialize)]
struct CompareOut {
    provenance: Provenance,
    a: String,
    b: String,
    points: usize,
    samples: usize,
    strategy: &'static str,
    offset: usize,
    rating: f64,
}

#[derive(Debug, Serialize)]
struct SweepRow {
    height: f64,
    rating: f64,
}

#[derive(Serialize)]
struct SweepOut {
    provenance: Provenance,
    samples: usize,
    strategy: &'static str,
    best_height: f64,
    rows: Vec<SweepRow>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Compare {
            a,
            b,
            points,
            samples,
            strategy,
        } => compare(a, b, points, samples, strategy.into()),
        Action::Sweep {
            samples,
            steps,
            h_min,
            h_max,
            strategy,
        } => sweep(samples, steps, h_min, h_max, strategy.into()),
        Action::Report => report(),
    }
}

fn compare(
    a: StdShape,
    b: StdShape,
    points: usize,
    samples: Option<usize>,
    strategy: AlignmentStrategy,
) -> Result<()> {
    tracing::info!(%a, %b, points, samples = ?samples, %strategy, "compare");
    let center = Vec2::zeros();
    let ca = a.contour(points, center).with_context(|| format!("building {a}"))?;
    let cb = b.contour(points, center).with_context(|| format!("building {b}"))?;
    let opts = RatingOptions {
        sample_rate: samples,
        strategy,
        ..RatingOptions::default()
    };
    let best = rate(&ca, &cb, &opts).context("rating contours")?;
    let out = CompareOut {
        provenance: Provenance::new("compare"),
        a: a.to_string(),
        b: b.to_string(),
        points,
        samples: samples.unwrap_or(points),
        strategy: strategy.name(),
        offset: best.offset,
        rating: best.cost,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn sweep(
    samples: usize,
    steps: usize,
    h_min: f64,
    h_max: f64,
    strategy: AlignmentStrategy,
) -> Result<()> {
    ensure!(steps >= 1, "--steps must be at least 1");
    ensure!(
        h_min > 0.0 && h_max >= h_min,
        "need 0 < h_min <= h_max, got {h_min}..{h_max}"
    );
    tracing::info!(samples, steps, h_min, h_max, %strategy, "sweep");
    let rows = sweep_rows(samples, &linspace(h_min, h_max, steps), strategy)?;
    let best_height = rows
        .iter()
        .min_by(|x, y| x.rating.total_cmp(&y.rating))
        .map(|r| r.height)
        .unwrap_or(h_min);
    let out = SweepOut {
        provenance: Provenance::new("sweep"),
        samples,
        strategy: strategy.name(),
        best_height,
        rows,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

/// Rate a 10×10 square against each 10×h rectangle.
fn sweep_rows(
    samples: usize,
    heights: &[f64],
    strategy: AlignmentStrategy,
) -> Result<Vec<SweepRow>> {
    let square = rectangle(10.0, 10.0)?;
    heights
        .iter()
        .map(|&height| -> Result<SweepRow> {
            let rect = rectangle(10.0, height)?;
            let rating = shape_difference_rating(&square, &rect, Some(samples), strategy)
                .with_context(|| format!("rating height {height}"))?;
            tracing::debug!(height, rating, "sweep_row");
            Ok(SweepRow { height, rating })
        })
        .collect()
}

/// `steps` evenly spaced values from `lo` to `hi`, both included.
fn linspace(lo: f64, hi: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![lo],
        _ => (0..steps)
            .map(|k| lo + (hi - lo) * k as f64 / (steps - 1) as f64)
            .collect(),
    }
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": current_git_rev(),
        "version": gearshape::VERSION,
        "strategies": AlignmentStrategy::ALL.iter().map(|s| s.name()).collect::<Vec<_>>(),
        "shapes": StdShape::ALL.iter().map(|s| s.name()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
