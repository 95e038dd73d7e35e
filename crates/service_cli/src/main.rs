//! bsgreeks - Black-Scholes pricing and Greeks from the command line
//!
//! # Commands
//!
//! - `bsgreeks demo` - Walk through benchmarks, parity, sweeps and Greeks
//! - `bsgreeks price` - Price one contract and report its Greeks
//! - `bsgreeks sweep` - Evaluate an output over a spot mesh, optionally per
//!   row of a CSV parameter table
//! - `bsgreeks check` - Show the effective configuration and verify the
//!   reference prices
//!
//! # Architecture
//!
//! The service layer of the workspace: it parses flags, loads
//! [`config::CliConfig`] and hands work to `pricer_risk::sweep`, whose
//! results are printed through [`report::Report`].

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pricer_risk::sweep::OutputKind;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod benchmarks;
mod commands;
mod config;
mod error;
mod report;

pub use error::{CliError, Result};

use commands::sweep::MeshArgs;
use commands::ContractArgs;
use config::{CliConfig, OutputFormat, DEFAULT_CONFIG_PATH};

/// Black-Scholes pricing and Greeks
#[derive(Parser)]
#[command(name = "bsgreeks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Output format (table, csv, json); overrides the config file
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the guided demonstration
    Demo,

    /// Price one contract at one spot
    Price {
        #[command(flatten)]
        contract: ContractArgs,

        /// Underlying spot (S)
        #[arg(long, default_value_t = 100.0)]
        spot: f64,
    },

    /// Evaluate an output over a spot mesh
    Sweep {
        #[command(flatten)]
        contract: ContractArgs,

        #[command(flatten)]
        mesh: MeshArgs,

        /// Output to evaluate (price, delta, gamma, vega, theta, rho, delta-fd, gamma-fd)
        #[arg(short, long, default_value = "price")]
        output: OutputKind,

        /// CSV of parameter rows `T, K, sigma, r[, b]`; one column per row
        #[arg(long)]
        rows: Option<PathBuf>,
    },

    /// Check configuration and reference prices
    Check,
}

fn init_tracing(verbose: bool, config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose {
            "debug"
        } else {
            config.log_level.as_filter_str()
        };
        EnvFilter::new(level)
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load(&cli.config)?;
    init_tracing(cli.verbose, &config);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Loaded configuration");

    let format = cli.format.unwrap_or(config.format);

    match cli.command {
        Commands::Demo => commands::demo::run(&config, format)?,
        Commands::Price { contract, spot } => {
            commands::price::run(&config, format, &contract, spot)?
        }
        Commands::Sweep {
            contract,
            mesh,
            output,
            rows,
        } => commands::sweep::run(&config, format, &contract, &mesh, output, rows.as_deref())?,
        Commands::Check => commands::check::run(&config)?,
    }
    Ok(())
}
