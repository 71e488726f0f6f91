//! tl-solve: plan traffic-light schedules for a batch of problem files.
//!
//! Each input is loaded, solved, and written to `<output-dir>/<file name>`.
//! Files are independent, so they are solved in parallel on Rayon's pool;
//! within one file every stage runs sequentially.
//!
//! ```text
//! RUST_LOG=debug tl-solve input/a.txt input/e.txt --presets presets.json
//! ```

mod presets;

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{info, warn};
use rayon::prelude::*;

use tl_core::{RoundingMode, SolverConfig};
use tl_io::{load_problem, write_solution};
use tl_schedule::{SolveStats, solve};

use presets::Presets;

#[cfg(test)]
mod tests;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Problem files to solve.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory receiving one schedule file per input, under the same name.
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// JSON table of per-file solver configs, keyed by input file name.
    #[arg(long)]
    presets: Option<PathBuf>,

    /// Shortest green phase for files without a preset.
    #[arg(long, default_value_t = 1)]
    min: u64,

    /// Longest green phase for files without a preset.
    #[arg(long, default_value_t = 2)]
    max: u64,

    /// Boost the top 1/N streets by global score (0 disables).
    #[arg(long, default_value_t = 10)]
    upscale_fraction: u64,

    /// Multiplier for boosted streets.
    #[arg(long, default_value_t = 2)]
    upscale_factor: u64,

    /// Round normalized durations to the nearest integer instead of truncating.
    #[arg(long)]
    round: bool,

    /// Worker threads for batch solving.  Defaults to all logical cores.
    #[arg(long)]
    threads: Option<usize>,
}

impl Args {
    /// Config applied to inputs without a preset.
    fn fallback_config(&self) -> SolverConfig {
        SolverConfig {
            min_scheduled_time: self.min,
            max_scheduled_time: self.max,
            upscale_fraction:   self.upscale_fraction,
            upscale_factor:     self.upscale_factor,
            rounding:           if self.round { RoundingMode::Nearest } else { RoundingMode::Truncate },
        }
    }
}

// ── Per-file run ──────────────────────────────────────────────────────────────

struct FileReport {
    output:       PathBuf,
    stats:        SolveStats,
    elapsed_secs: f64,
}

/// Load, solve and write one problem file.
fn solve_file(input: &Path, output_dir: &Path, config: &SolverConfig) -> Result<FileReport> {
    let start = Instant::now();
    let file_name = input
        .file_name()
        .with_context(|| format!("{} has no file name", input.display()))?;

    let problem = load_problem(input)
        .with_context(|| format!("loading {}", input.display()))?;
    if config.max_scheduled_time > u64::from(problem.params.duration) {
        warn!(
            "{}: max_scheduled_time {} exceeds the simulation duration {}",
            input.display(),
            config.max_scheduled_time,
            problem.params.duration,
        );
    }

    let solved = solve(&problem.network, &problem.cars, config)
        .with_context(|| format!("solving {}", input.display()))?;

    let output = output_dir.join(file_name);
    write_solution(&output, &problem.network, &solved)
        .with_context(|| format!("writing {}", output.display()))?;

    info!("Solved: {}", file_name.to_string_lossy());
    Ok(FileReport {
        output,
        stats: solved.stats,
        elapsed_secs: start.elapsed().as_secs_f64(),
    })
}

/// Outputs are named after their input's file name, so two inputs sharing a
/// name would overwrite each other.
fn check_distinct_outputs(inputs: &[PathBuf]) -> Result<()> {
    let mut seen: HashMap<&OsStr, &Path> = HashMap::with_capacity(inputs.len());
    for input in inputs {
        let Some(name) = input.file_name() else { continue };
        if let Some(previous) = seen.insert(name, input.as_path()) {
            bail!(
                "{} and {} would both be written to {}",
                previous.display(),
                input.display(),
                name.to_string_lossy(),
            );
        }
    }
    Ok(())
}

/// Solve every input in parallel, stopping at the first failure.
fn run(args: &Args) -> Result<Vec<FileReport>> {
    // 1. Configs.
    let presets = match &args.presets {
        Some(path) => Presets::load(path)?,
        None => Presets::default(),
    };
    let fallback = args.fallback_config();
    info!("{} presets loaded; fallback config: {fallback}", presets.len());

    // 2. Output directory.
    check_distinct_outputs(&args.inputs)?;
    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating {}", args.output_dir.display()))?;

    // 3. Solve.
    args.inputs
        .par_iter()
        .map(|input| solve_file(input, &args.output_dir, presets.config_for(input, &fallback)))
        .collect()
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("configuring the thread pool")?;
    }

    let start = Instant::now();
    let reports = run(&args)?;

    println!();
    for r in &reports {
        println!("{}  ({:.3}s)  {}", r.output.display(), r.elapsed_secs, r.stats);
    }
    println!("{} files solved in {:.3}s", reports.len(), start.elapsed().as_secs_f64());

    Ok(())
}
