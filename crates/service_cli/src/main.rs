//! Retail CLI - Command Line Retail Pricing Analytics
//!
//! # Commands
//!
//! - `retail correlation <file>` - Price/units correlation
//! - `retail elasticity <file>` - OLS demand fit with diagnostics
//! - `retail optimise <file>` - Revenue-maximising retail per item
//! - `retail round <file>` - Smart rounding against a template
//! - `retail distribution <file>` - Retail price histogram
//! - `retail scatter <file>` - Units against retail chart
//! - `retail margin <file>` - Margin and markup with weighted totals
//!
//! Input files are CSV with headers `retail,units[,cost][,elasticity]`.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this binary loads configuration and
//! input, then delegates every computation to the analytics crates.

use clap::{Args, Parser, Subcommand};
use retail_analytics::Align;
use service_cli::config::CliConfig;
use service_cli::input::SalesData;
use service_cli::output::OutputFormat;
use service_cli::render::TextRenderer;
use service_cli::{commands, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Retail Pricing Analytics CLI
///
/// Command-line flags take precedence over `retail.toml` and `RETAIL_*`.
#[derive(Parser)]
#[command(name = "retail")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "retail.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Input file and output format shared by every command
#[derive(Args)]
struct InputArgs {
    /// Sales CSV file
    input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Pearson correlation between retail and units
    Correlation {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Fit units against retail by least squares
    Elasticity {
        #[command(flatten)]
        input: InputArgs,

        /// Lowest retail to include (default: observed minimum)
        #[arg(long)]
        begin: Option<f64>,

        /// Highest retail to include (default: observed maximum)
        #[arg(long)]
        end: Option<f64>,
    },

    /// Search the revenue-maximising retail for each item
    Optimise {
        #[command(flatten)]
        input: InputArgs,

        /// Search half-width as a fraction of current retail
        #[arg(short, long)]
        range: Option<f64>,

        /// Candidate grid spacing
        #[arg(short, long)]
        step: Option<f64>,
    },

    /// Round retails to a price template
    Round {
        #[command(flatten)]
        input: InputArgs,

        /// Template such as "*.**" or "*.95"
        #[arg(short, long)]
        template: Option<String>,

        /// Alignment for ending-digit templates (down, up, fair)
        #[arg(short, long)]
        align: Option<Align>,
    },

    /// Histogram of retail prices
    Distribution {
        #[command(flatten)]
        input: InputArgs,

        /// Bin width in currency units
        #[arg(short, long)]
        bin_width: Option<f64>,
    },

    /// Chart units against retail
    Scatter {
        /// Sales CSV file
        input: PathBuf,
    },

    /// Margin and markup per item with unit-weighted totals
    Margin {
        #[command(flatten)]
        input: InputArgs,
    },
}

fn init_tracing(verbose: bool, config: &CliConfig) {
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn load(path: &Path) -> Result<SalesData> {
    info!("Reading {}", path.display());
    SalesData::load(path)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = CliConfig::load_with_env_and_validate(&cli.config)?;
    init_tracing(cli.verbose, &config);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let renderer = TextRenderer::default();

    match cli.command {
        Commands::Correlation { input } => {
            commands::correlation::run(&load(&input.input)?, input.format, &mut out)
        }
        Commands::Elasticity { input, begin, end } => {
            commands::elasticity::run(&load(&input.input)?, begin, end, input.format, &mut out)
        }
        Commands::Optimise { input, range, step } => {
            if let Some(range) = range {
                config.optimiser.range = range;
            }
            if let Some(step) = step {
                config.optimiser.step = step;
            }
            let optimiser = config.optimiser_config()?;
            commands::optimise::run(&load(&input.input)?, optimiser, input.format, &mut out)
        }
        Commands::Round {
            input,
            template,
            align,
        } => {
            if let Some(template) = template {
                config.rounding.template = template;
            }
            if let Some(align) = align {
                config.rounding.align = align;
            }
            let rounder = config.rounder()?;
            commands::round::run(&load(&input.input)?, &rounder, input.format, &mut out)
        }
        Commands::Distribution { input, bin_width } => commands::distribution::run(
            &load(&input.input)?,
            bin_width.unwrap_or(config.distribution.bin_width),
            &renderer,
            input.format,
            &mut out,
        ),
        Commands::Scatter { input } => commands::scatter::run(&load(&input)?, &renderer, &mut out),
        Commands::Margin { input } => {
            commands::margin::run(&load(&input.input)?, input.format, &mut out)
        }
    }?;

    out.flush()?;
    Ok(())
}
