//! pixkit - raster toolkit CLI
//!
//! Runs the pixkit filters on PNG input and writes ASCII pixmaps.

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use pixkit_ops::BayerPattern;
use pixkit_points::ShapeKind;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "pixkit")]
#[command(author, version, about = "Raster toolkit: color filters, Bayer simulation, compositing, point clouds")]
#[command(long_about = "
Runs classic per-pixel image filters and writes the results as ASCII pixmaps
(P3 for RGB, P2 for single-channel output).

Examples:
  pixkit filters dog.png -o build                 # all filters, one file each
  pixkit filters dog.png -o build --hue-shift 90
  pixkit composite dog.png glasses.png sparkles.png -o composite.ppm
  pixkit points heart -o frames --json heart.json # 30 pulse frames
  pixkit diff build/gray.ppm expected/gray.ppm    # exit 1 on mismatch
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log filter, e.g. "debug" or "pixkit_ops=trace" (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every filter on a PNG and write one pixmap per result
    #[command(visible_alias = "f")]
    Filters(FiltersArgs),

    /// Composite PNG layers bottom-up with the "over" operator
    #[command(visible_alias = "comp")]
    Composite(CompositeArgs),

    /// Generate a point cloud and render its pulse animation frames
    #[command(visible_alias = "p")]
    Points(PointsArgs),

    /// Compare two pixmaps sample by sample
    #[command(visible_alias = "d")]
    Diff(DiffArgs),
}

#[derive(Args)]
struct FiltersArgs {
    /// Input PNG
    input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Hue rotation in degrees
    #[arg(long, default_value = "180", allow_negative_numbers = true)]
    hue_shift: f64,

    /// Desaturation factor in [0, 1]
    #[arg(long, default_value = "0.25")]
    desaturate: f64,

    /// Bayer filter layout (RGGB, BGGR, GRBG, GBRG)
    #[arg(long, default_value = "GBRG")]
    pattern: BayerPattern,

    /// Count zero-valued neighbors when demosaicing
    #[arg(long)]
    include_zero_neighbors: bool,
}

#[derive(Args)]
struct CompositeArgs {
    /// Bottom layer PNG
    bottom: PathBuf,

    /// Layers to place on top, in order
    #[arg(required = true)]
    layers: Vec<PathBuf>,

    /// Output pixmap
    #[arg(short, long, default_value = "composite.ppm")]
    output: PathBuf,
}

#[derive(Args)]
struct PointsArgs {
    /// Shape (heart or star)
    shape: ShapeKind,

    /// Output directory for frames
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Number of animation frames
    #[arg(long, default_value = "30")]
    frames: usize,

    /// Pulse amplitude (fraction of size)
    #[arg(long, default_value = "0.15")]
    amplitude: f64,

    /// Point cloud JSON: loaded if present, otherwise generated and saved there
    #[arg(long)]
    json: Option<PathBuf>,

    /// Canvas width
    #[arg(long, default_value = "500")]
    width: usize,

    /// Canvas height
    #[arg(long, default_value = "500")]
    height: usize,

    /// Number of points to generate
    #[arg(long, default_value = "5000")]
    count: usize,

    /// RNG seed
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Point radius in pixels
    #[arg(long, default_value = "1")]
    radius: u32,
}

#[derive(Args)]
struct DiffArgs {
    /// First pixmap
    a: PathBuf,

    /// Second pixmap
    b: PathBuf,

    /// Print at most this many mismatching samples (0 = all)
    #[arg(long, default_value = "20")]
    limit: usize,
}

fn init_logging(verbose: u8, log_level: Option<&str>) -> Result<()> {
    let base = log_level.unwrap_or(match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    });
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(base))
        .with_context(|| format!("Invalid log filter: {base}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .try_init()
        .map_err(|e| anyhow!("Logger initialization failed: {e}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.log_level.as_deref())?;

    match cli.command {
        Commands::Filters(args) => commands::filters::run(args, cli.verbose),
        Commands::Composite(args) => commands::composite::run(args, cli.verbose),
        Commands::Points(args) => commands::points::run(args, cli.verbose),
        Commands::Diff(args) => commands::diff::run(args, cli.verbose),
    }
}
