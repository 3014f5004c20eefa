//! Swath inverse lookup benchmark.
//!
//! This tool:
//! 1. Generates a synthetic tilted swath granule
//! 2. Builds a SwathPixelLocator from the configured search bounds
//! 3. Runs random inverse lookups serially and in parallel
//! 4. Reports timing, hit rate and round-trip accuracy
//!
//! Run with: cargo run --release --bin swath-lookup-bench -- --width 1354 --height 2030

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use pixel_locator::{LocatorConfig, PixelLocator, PixelLocatorFactory, PixelPos};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "swath-lookup-bench")]
#[command(about = "Benchmark inverse geolocation on a synthetic swath")]
struct Args {
    /// Swath width in pixels
    #[arg(long, default_value_t = 1354)]
    width: usize,

    /// Swath height in lines
    #[arg(long, default_value_t = 2030)]
    height: usize,

    /// Number of random inverse lookups
    #[arg(short = 'n', long, default_value_t = 100_000)]
    queries: usize,

    /// Random seed for query generation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// YAML configuration file (defaults to environment variables)
    #[arg(short, long, env = "LOCATOR_CONFIG")]
    config: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Serialize)]
struct RunReport {
    mode: &'static str,
    queries: usize,
    hits: usize,
    exact: usize,
    elapsed_ms: f64,
    lookups_per_sec: f64,
}

#[derive(Debug, Serialize)]
struct BenchReport {
    width: usize,
    height: usize,
    build_ms: f64,
    config: LocatorConfig,
    runs: Vec<RunReport>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if args.width == 0 || args.height == 0 {
        bail!("swath must have at least one pixel");
    }

    let config = match &args.config {
        Some(path) => LocatorConfig::from_yaml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => LocatorConfig::from_env(),
    };
    if let Err(e) = config.validate() {
        bail!("invalid configuration: {e}");
    }

    info!(width = args.width, height = args.height, "Generating synthetic swath");
    let (lons, lats) = generate_swath(args.width, args.height);

    let factory = PixelLocatorFactory::new(config);
    let start = Instant::now();
    let locator = factory.swath_pixel_locator(&lons, &lats, args.width, args.height)?;
    let build_ms = start.elapsed().as_secs_f64() * 1000.0;

    // Query at random pixel centers so every lookup has a known answer
    let mut rng = StdRng::seed_from_u64(args.seed);
    let queries: Vec<(usize, usize)> = (0..args.queries)
        .map(|_| (rng.gen_range(0..args.width), rng.gen_range(0..args.height)))
        .collect();

    let lookup = |&(col, row): &(usize, usize)| -> (bool, bool) {
        let i = row * args.width + col;
        let found = locator.pixel_location(lons[i] as f64, lats[i] as f64);
        let exact = found.first() == Some(&PixelPos::center_of(col, row));
        (!found.is_empty(), exact)
    };

    let start = Instant::now();
    let serial: Vec<(bool, bool)> = queries.iter().map(lookup).collect();
    let serial_run = summarize("serial", &serial, start);

    let start = Instant::now();
    let parallel: Vec<(bool, bool)> = queries.par_iter().map(lookup).collect();
    let parallel_run = summarize("parallel", &parallel, start);

    let report = BenchReport {
        width: args.width,
        height: args.height,
        build_ms,
        config,
        runs: vec![serial_run, parallel_run],
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_text(&report),
    }

    Ok(())
}

fn summarize(mode: &'static str, results: &[(bool, bool)], start: Instant) -> RunReport {
    let elapsed = start.elapsed().as_secs_f64();
    RunReport {
        mode,
        queries: results.len(),
        hits: results.iter().filter(|r| r.0).count(),
        exact: results.iter().filter(|r| r.1).count(),
        elapsed_ms: elapsed * 1000.0,
        lookups_per_sec: if elapsed > 0.0 {
            results.len() as f64 / elapsed
        } else {
            0.0
        },
    }
}

fn print_text(report: &BenchReport) {
    println!("Swath Lookup Benchmark");
    println!("======================\n");
    println!("Swath: {} x {}", report.width, report.height);
    println!("Index build: {:.1} ms\n", report.build_ms);

    println!("{:-<70}", "");
    println!(
        "{:<10} {:>10} {:>10} {:>10} {:>12} {:>14}",
        "Mode", "Queries", "Hits", "Exact", "Time (ms)", "Lookups/s"
    );
    println!("{:-<70}", "");
    for run in &report.runs {
        println!(
            "{:<10} {:>10} {:>10} {:>10} {:>12.1} {:>14.0}",
            run.mode, run.queries, run.hits, run.exact, run.elapsed_ms, run.lookups_per_sec
        );
    }
    println!("{:-<70}", "");
}

/// Tilted swath roughly like a polar orbiter granule at mid latitudes.
fn generate_swath(width: usize, height: usize) -> (Vec<f32>, Vec<f32>) {
    let mut lons = Vec::with_capacity(width * height);
    let mut lats = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let lon = -20.0 + col as f64 * 0.01 - row as f64 * 0.002;
            let lat = -10.0 + col as f64 * 0.001 + row as f64 * 0.01;
            lons.push(((lon + 180.0).rem_euclid(360.0) - 180.0) as f32);
            lats.push(lat.clamp(-89.9, 89.9) as f32);
        }
    }
    (lons, lats)
}
