mod stats;

use anyhow::Result;
use clap::Parser;
use grass_core::{FileRecordRepository, GrassConfig, GrassUseCase, MalformedPolicy, Renderer};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grass")]
#[command(about = "Draw a yearly calendar grass of where you have been", long_about = None)]
struct Cli {
    /// JSON config file (defaults to ~/.location-grass/config.json if present);
    /// its `colors` are merged over the built-in table
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding one <...YYYY>.txt file per year
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Directory the SVG images are written to
    #[arg(long, global = true)]
    image_dir: Option<PathBuf>,

    /// Log and skip malformed lines instead of aborting
    #[arg(long, global = true)]
    skip_malformed: bool,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Write <year>.svg for every data file plus legend.svg
    Render {
        /// Only draw this year (the legend still covers every year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Print days per location, most visited first
    Stats {
        #[arg(long)]
        year: Option<i32>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<GrassConfig> {
    let mut config = GrassConfig::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(dir) = &cli.image_dir {
        config.image_dir = dir.clone();
    }
    if cli.skip_malformed {
        config.on_malformed = MalformedPolicy::Skip;
    }
    Ok(config)
}

/// Running `grass` with no subcommand renders every year.
fn command_or_default(command: Option<Commands>) -> Commands {
    command.unwrap_or(Commands::Render { year: None })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let repo = FileRecordRepository::from_config(&config);
    let renderer = Renderer::new(config.layout.clone(), config.colors.clone());
    let usecase = GrassUseCase::new(&repo, &renderer);

    match command_or_default(cli.command) {
        Commands::Render { year } => {
            let report = usecase.render(&config.image_dir, year)?;
            info!(
                "{} days drawn into {} images",
                report.days,
                report.year_images.len() + 1
            );
        }
        Commands::Stats { year, json } => {
            let summaries = usecase.summarize(year)?;
            stats::show_stats(&summaries, json)?;
        }
    }
    Ok(())
}
