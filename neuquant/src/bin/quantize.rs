use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use clap::Parser;
use indexmap::IndexMap;
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use mimalloc::MiMalloc;
use neuquant::{
    config::Config,
    error::Result,
    metrics::{OverallSummary, QuantizeReport, write_run},
    pixels::{from_dynamic, swatch},
    quantizer::NeuQuant,
    serde_utils::JSONReadWrite,
    utils::{file_stem, timestamp_for_dir},
};
use rayon::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser, Debug)]
struct Args {
    /// Images to quantize
    #[arg(required = true)]
    inputs: Vec<String>,
    /// Sampling factor in [1, 30]. Overrides the config file
    #[arg(short = 's', long)]
    sample_factor: Option<usize>,
    /// Config file path
    #[arg(short = 'c', long)]
    config_path: Option<String>,
    /// Output directory. Defaults to a timestamped directory in runs/
    #[arg(short = 'o', long)]
    out_dir: Option<String>,
    /// Swatch cell size in pixels
    #[arg(long, default_value_t = 8)]
    cell: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = if let Some(config_path) = &args.config_path {
        Config::read_json(config_path).unwrap_or_else(|e| panic!("Failed to read config file '{}': {}", config_path, e))
    } else {
        Config::default()
    };
    if let Some(sample_factor) = args.sample_factor {
        config.sample_factor = sample_factor;
    }

    let quantizer = NeuQuant::with_config(config.clone()).unwrap_or_else(|e| panic!("Invalid configuration: {}", e));

    let out_dir = if let Some(out_dir) = args.out_dir.clone() {
        out_dir
    } else {
        format!("runs/{}", timestamp_for_dir())
    };
    fs::create_dir_all(&out_dir).unwrap_or_else(|e| panic!("Failed to create out_dir '{}': {}", out_dir, e));

    info!(
        inputs = args.inputs.len(),
        sample_factor = config.sample_factor,
        out_dir = %out_dir,
        "Quantizing"
    );

    let pb = ProgressBar::new(args.inputs.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{spinner} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let start = Instant::now();
    let failed = AtomicUsize::new(0);

    let reports: Vec<(String, QuantizeReport)> = args
        .inputs
        .par_iter()
        .progress_with(pb.clone())
        .filter_map(|input| match process(input, &quantizer, &out_dir, args.cell) {
            Ok(report) => Some((file_stem(input), report)),
            Err(e) => {
                error!(input = %input, "Failed to quantize: {}", e);
                failed.fetch_add(1, Ordering::Relaxed);
                None
            }
        })
        .collect();

    pb.finish_and_clear();

    let reports: IndexMap<String, QuantizeReport> = reports.into_iter().collect();
    let summary = OverallSummary {
        n_inputs: args.inputs.len(),
        n_failed: failed.load(Ordering::Relaxed),
        elapsed_ms: start.elapsed().as_millis(),
        sample_factor: config.sample_factor,
    };

    write_run(&out_dir, &reports, &summary).unwrap_or_else(|e| panic!("Failed to write run summary: {}", e));

    info!(
        done = reports.len(),
        failed = summary.n_failed,
        elapsed_ms = summary.elapsed_ms as u64,
        "Finished"
    );
}

fn process(input: &str, quantizer: &NeuQuant, out_dir: &str, cell: u32) -> Result<QuantizeReport> {
    let start = Instant::now();
    let img = image::open(input)?;
    let pixels = from_dynamic(&img)?;
    let palette = quantizer.quantize(&pixels)?;

    let stem = file_stem(input);
    palette.write_json(format!("{out_dir}/{stem}.palette.json"))?;
    swatch(&palette, cell).save(format!("{out_dir}/{stem}.swatch.png"))?;

    let report = QuantizeReport::new(
        input,
        (img.width(), img.height()),
        quantizer.config().sample_factor,
        &palette,
        start.elapsed().as_millis(),
    );
    info!(input = %input, distinct = report.distinct_colors, "Wrote palette");

    Ok(report)
}
