//! houghcircle CLI — command-line interface for circle detection.
//!
//! Inputs are binary edge images (nonzero = edge pixel), typically the
//! output of an upstream thresholding/morphology chain.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use houghcircle::debug_dump::{normalized_gray, AccumulatorDump};
use houghcircle::{find_circles, vote, DetectionResult, HoughParams};
use image::{GrayImage, Rgb};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "houghcircle")]
#[command(about = "Detect circles in binary edge images via Hough-space voting")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect circles of unknown center and radius.
    Detect(CliDetectArgs),

    /// Vote a single-radius accumulator and export it for inspection.
    Accumulator(CliAccumulatorArgs),
}

#[derive(Debug, Clone, Args)]
struct CliDetectArgs {
    /// Path to the input edge image (nonzero = edge).
    #[arg(long)]
    image: PathBuf,

    /// Path to write detection results (JSON).
    #[arg(long)]
    out: PathBuf,

    /// Minimum circle radius in pixels.
    #[arg(long, default_value = "10")]
    r_min: u32,

    /// Maximum circle radius in pixels.
    #[arg(long, default_value = "35")]
    r_max: u32,

    /// Accumulator cell size in pixels (smaller = finer localization, slower).
    #[arg(long, default_value = "1.0")]
    cell_step: f32,

    /// Angular voting step in degrees (smaller = more votes per pixel, slower).
    #[arg(long, default_value = "1.0")]
    angle_step: f32,

    /// Path to write the input image with detected circles drawn on it (PNG).
    #[arg(long)]
    overlay: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct CliAccumulatorArgs {
    /// Path to the input edge image (nonzero = edge).
    #[arg(long)]
    image: PathBuf,

    /// Radius to vote for, in pixels.
    #[arg(long)]
    radius: u32,

    /// Accumulator cell size in pixels.
    #[arg(long, default_value = "1.0")]
    cell_step: f32,

    /// Angular voting step in degrees.
    #[arg(long, default_value = "1.0")]
    angle_step: f32,

    /// Path to write the raw accumulator dump (JSON).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Path to write the accumulator normalized by its maximum (PNG).
    #[arg(long)]
    png: Option<PathBuf>,

    /// Print up to this many peaks (with suppression) to stdout.
    #[arg(long, default_value = "0")]
    peaks: usize,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect(args) => run_detect(&args),
        Commands::Accumulator(args) => run_accumulator(&args),
    }
}

fn load_edge_image(path: &Path) -> CliResult<GrayImage> {
    tracing::info!("Loading image: {}", path.display());
    let img = image::open(path).map_err(|e| -> CliError {
        format!("Failed to open image {}: {}", path.display(), e).into()
    })?;
    let gray = img.to_luma8();
    let (w, h) = gray.dimensions();
    tracing::info!("Image size: {}x{}", w, h);
    Ok(gray)
}

// ── detect ─────────────────────────────────────────────────────────────

fn run_detect(args: &CliDetectArgs) -> CliResult<()> {
    let gray = load_edge_image(&args.image)?;
    let (w, h) = gray.dimensions();

    let params = HoughParams {
        radius_min: args.r_min,
        radius_max: args.r_max,
        cell_step: args.cell_step,
        angle_step: args.angle_step,
    };

    let circles = find_circles(&gray, &params)?;
    let result = DetectionResult {
        circles,
        image_size: [w, h],
    };

    tracing::info!("Detected {} circles", result.circles.len());
    for (i, c) in result.circles.iter().enumerate() {
        tracing::info!("  #{}: center ({}, {}), r={}, votes={}", i + 1, c.x, c.y, c.r, c.v);
    }

    let json = serde_json::to_string_pretty(&result)?;
    std::fs::write(&args.out, &json)?;
    tracing::info!("Results written to {}", args.out.display());

    if let Some(overlay_path) = &args.overlay {
        let mut canvas = image::DynamicImage::ImageLuma8(gray).to_rgb8();
        for c in &result.circles {
            imageproc::drawing::draw_hollow_circle_mut(
                &mut canvas,
                (c.x, c.y),
                c.r as i32,
                Rgb([255u8, 0, 0]),
            );
        }
        canvas.save(overlay_path)?;
        tracing::info!("Overlay written to {}", overlay_path.display());
    }

    Ok(())
}

// ── accumulator ────────────────────────────────────────────────────────

fn run_accumulator(args: &CliAccumulatorArgs) -> CliResult<()> {
    if args.out.is_none() && args.png.is_none() && args.peaks == 0 {
        return Err("nothing to do: pass --out, --png, or --peaks".into());
    }

    let gray = load_edge_image(&args.image)?;
    let mut acc = vote(&gray, args.radius, args.cell_step, args.angle_step)?;
    tracing::info!(
        "Accumulator {}x{} (shift {}) for r={}",
        acc.dim_a(),
        acc.dim_b(),
        acc.shift(),
        acc.radius(),
    );

    if let Some(out_path) = &args.out {
        let dump = AccumulatorDump::from(&acc);
        let json = serde_json::to_string(&dump)?;
        std::fs::write(out_path, &json)?;
        tracing::info!("Accumulator dump written to {}", out_path.display());
    }

    if let Some(png_path) = &args.png {
        normalized_gray(&acc).save(png_path)?;
        tracing::info!("Normalized accumulator written to {}", png_path.display());
    }

    if args.peaks > 0 {
        for (i, peak) in acc.take_peaks(args.peaks).iter().enumerate() {
            println!(
                "#{}\tcenter: ({},{})\tvotes: {}",
                i + 1,
                peak.x,
                peak.y,
                peak.value,
            );
        }
    }

    Ok(())
}
