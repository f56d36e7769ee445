mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

const LOG_DIRECTIVES: [&str; 2] = ["schedule_ics=info", "schedule_ics_core=info"];
const VERBOSE_LOG_DIRECTIVES: [&str; 2] = ["schedule_ics=debug", "schedule_ics_core=debug"];

#[derive(Parser)]
#[command(name = "schedule-ics")]
#[command(about = "Export a weekly faculty schedule file as an iCalendar document")]
struct Cli {
    /// Log skipped items and other details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a schedule over a date range and write the .ics file
    Export {
        /// Schedule file (e.g. fall.fschedule)
        file: PathBuf,

        /// First day to export (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,

        /// Last day to export, inclusive (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<String>,

        /// Directory to write the calendar into (defaults to output_dir from config)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Write the calendar to stdout instead of a file
        #[arg(long)]
        stdout: bool,
    },
    /// List the events an export would contain
    Preview {
        file: PathBuf,

        /// First day (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,

        /// Last day, inclusive (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<String>,
    },
    /// Validate a schedule file and show what it contains
    Check { file: PathBuf },
    /// Show the config file location and effective settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let cfg = AppConfig::load()?;

    match cli.command {
        Commands::Export {
            file,
            start,
            end,
            output,
            stdout,
        } => {
            let args = commands::export::ExportArgs {
                file,
                start,
                end,
                output,
                stdout,
            };
            commands::export::run(args, &cfg).await
        }
        Commands::Preview { file, start, end } => {
            commands::preview::run(&file, start.as_deref(), end.as_deref(), &cfg).await
        }
        Commands::Check { file } => commands::check::run(&file, &cfg).await,
        Commands::Config => commands::config::run(&cfg),
    }
}

fn init_tracing(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// `RUST_LOG` when set and valid, otherwise the built-in directives.
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if let Some(filter) = rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
    {
        return filter;
    }

    let directives = if verbose {
        VERBOSE_LOG_DIRECTIVES
    } else {
        LOG_DIRECTIVES
    };
    EnvFilter::new(directives.join(","))
}
