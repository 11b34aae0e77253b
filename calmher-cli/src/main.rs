mod commands;
mod config;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use calmher_core::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "calmher")]
#[command(about = "Import calendars into and export wellness schedules out of CalmHer")]
struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read an .ics or .json calendar and print its events as JSON
    Import {
        file: PathBuf,

        /// Write the events here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Turn an events JSON (or a generated schedule) into a downloadable file
    Export {
        file: PathBuf,

        /// Calendar name written to X-WR-CALNAME
        #[arg(short, long)]
        name: Option<String>,

        /// Output format: ics or json
        #[arg(short, long, default_value_t = ExportFormat::Ics)]
        format: ExportFormat,

        /// Output path (defaults to wellness-schedule.<ext> in output_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Score burnout assessment answers
    Score { file: PathBuf },
    /// Build a schedule-generation request payload
    Request {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start_date: String,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end_date: String,

        /// Burnout level, 1 to 5
        #[arg(long)]
        burnout_level: f64,

        /// Free-text preferences
        #[arg(short, long, default_value = "")]
        preferences: String,

        /// Existing calendar (.ics or .json) the schedule must not overlap
        #[arg(short, long)]
        calendar: Option<PathBuf>,
    },
    /// Show configuration paths and values
    Config {
        /// Create a commented default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Import { file, output } => commands::import::run(&file, output.as_deref()).await,
        Commands::Export {
            file,
            name,
            format,
            output,
        } => {
            let config = CliConfig::load()?;
            commands::export::run(&file, name, format, output, &config).await
        }
        Commands::Score { file } => commands::score::run(&file).await,
        Commands::Request {
            start_date,
            end_date,
            burnout_level,
            preferences,
            calendar,
        } => {
            commands::request::run(
                start_date,
                end_date,
                burnout_level,
                preferences,
                calendar.as_deref(),
            )
            .await
        }
        Commands::Config { init } => commands::config::run(init),
    }
}

/// Log to stderr so stdout stays machine-readable. RUST_LOG overrides -v.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
