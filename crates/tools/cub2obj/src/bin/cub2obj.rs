//! cub2obj CLI - convert a CUB voxel grid into OBJ + MTL files

use clap::error::ErrorKind;
use clap::Parser;
use cub::DimensionPolicy;
use cub2obj::{convert_file, Cub2ObjConfig};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cub2obj")]
#[command(
    author,
    version,
    about = "Convert a CUB voxel grid into a Wavefront OBJ model and MTL material library"
)]
struct Cli {
    /// Input .cub file
    input: PathBuf,

    /// Directory for <name>.obj and <name>.mtl (default: current directory)
    output_dir: Option<PathBuf>,

    /// TOML config file (output_dir, dimension_policy)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pad or truncate payloads that disagree with the header dimensions
    #[arg(long)]
    lenient: bool,

    /// Model name used for output files, objects and materials (default: input file stem)
    #[arg(short, long)]
    name: Option<String>,

    /// Suppress progress and summary output
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Cub2ObjConfig::load(path)?,
        None => Cub2ObjConfig::default(),
    };
    if cli.output_dir.is_some() {
        config.output_dir = cli.output_dir.clone();
    }
    if cli.lenient {
        config.dimension_policy = DimensionPolicy::Lenient;
    }

    let output_dir = config.output_dir();
    let progress = spinner(cli.quiet);
    progress.set_message(format!("Converting {}...", cli.input.display()));

    let result = convert_file(
        &cli.input,
        &output_dir,
        cli.name.as_deref(),
        &config.convert_options(),
    );

    let written = match result {
        Ok(written) => {
            progress.finish_with_message("✓ Conversion complete");
            written
        }
        Err(e) => {
            progress.finish_with_message("✗ Conversion failed");
            return Err(e.into());
        }
    };

    if !cli.quiet {
        let stats = written.stats;
        println!("✓ Saved {}", written.obj.display());
        println!("✓ Saved {}", written.mtl.display());
        println!(
            "  {} voxels, {} colors → {} objects, {} vertices, {} faces",
            stats.solid_voxels, stats.unique_colors, stats.objects, stats.vertices, stats.faces
        );
    }

    Ok(())
}

fn spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let progress = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        progress.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    progress.enable_steady_tick(Duration::from_millis(100));
    progress
}
