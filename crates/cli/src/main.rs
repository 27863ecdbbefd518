//! Ad unit CLI for inspecting ad-unit settings.
//!
//! This tool provides commands for:
//! - Validating ad-unit settings files
//! - Showing the resolved configuration and `OpenRTB` impression of each unit

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod config;
mod error;

use error::CliError;

#[derive(Parser)]
#[command(name = "adunit")]
#[command(about = "Ad unit CLI for settings validation and inspection")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Settings management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate ad unit definitions
    Validate {
        /// Path to the TOML settings file
        #[arg(long, short)]
        file: PathBuf,
    },

    /// Build every ad unit and print its resolved configuration
    Show {
        /// Path to the TOML settings file
        #[arg(long, short)]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Only show the ad unit with this name
        #[arg(long)]
        unit: Option<String>,
    },
}

#[derive(Clone, ValueEnum, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Validate { file } => config::validate(&file),
            ConfigAction::Show { file, format, unit } => {
                config::show(&file, &format, unit.as_deref())
            }
        },
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}  {} {}",
                chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply();

    if let Err(e) = result {
        eprintln!("Failed to initialize logger: {}", e);
    }
}
