//! # wlansim
//!
//! CLI for the wlansim PHY timing model: computes how long the medium stays
//! busy for candidate transmissions described in a YAML scenario file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wlansim_phy::ModeCatalog;
use wlansim_runner::{load_scenario, run_scenario, RunnerError, TimingReport};

/// wlansim - 802.11/802.11ah transmission timing calculator
#[derive(Parser, Debug)]
#[command(name = "wlansim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute transmission timings from a YAML scenario file
    Run(RunConfig),
    /// List every mode in the standard catalog
    Modes,
}

/// Configuration for the run command
#[derive(Parser, Debug)]
struct RunConfig {
    /// Path to the scenario YAML file
    scenario: PathBuf,

    /// Emit the report as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), RunnerError> {
    // Initialize tracing subscriber with RUST_LOG env filter
    // Default to "warn" level if RUST_LOG is not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(config) => {
            let scenario = load_scenario(&config.scenario)?;
            let reports = run_scenario(&scenario)?;
            if config.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                if !scenario.description.is_empty() {
                    println!("{}", scenario.description);
                }
                print_report_table(&reports);
            }
        }
        Commands::Modes => {
            print_modes();
        }
    }

    Ok(())
}

/// Print reports as an aligned table.
fn print_report_table(reports: &[TimingReport]) {
    println!(
        "{:<24} {:>10} {:>16} {:>12} {:>12}",
        "label", "bytes", "preamble+hdr us", "payload us", "total us"
    );
    for report in reports {
        println!(
            "{:<24} {:>10} {:>16.2} {:>12.2} {:>12.2}",
            report.label,
            report.size_bytes,
            report.preamble_and_header_us,
            report.payload_us,
            report.total_us
        );
        for fragment in &report.fragments {
            println!(
                "  {:<22} {:>10} {:>16} {:>12.2}",
                format!("{:?}", fragment.role).to_lowercase(),
                fragment.size_bytes,
                "",
                fragment.payload_us
            );
        }
    }
}

/// List the standard mode catalog, sorted by name.
fn print_modes() {
    let catalog = ModeCatalog::with_standard_modes();
    let mut modes: Vec<_> = catalog.iter().collect();
    modes.sort_by_key(|mode| mode.name().to_string());

    println!(
        "{:<32} {:<10} {:>8} {:>12} {:>10} {:>10}",
        "name", "class", "bw MHz", "rate Mbps", "code", "mandatory"
    );
    for mode in modes {
        println!(
            "{:<32} {:<10} {:>8.1} {:>12.4} {:>10} {:>10}",
            mode.name(),
            format!("{:?}", mode.class),
            mode.bandwidth_hz as f64 / 1e6,
            mode.data_rate_mbps(),
            format!("{:?}", mode.code_rate),
            mode.is_mandatory
        );
    }
}
