//! ClassClock CLI - bell schedules from the terminal
//!
//! # Commands
//!
//! - `classclock status [--at <instant>]` - Current state and the next bell
//! - `classclock schedule --date <date>` - The bell schedule for a day
//! - `classclock assign --date <date> --schedule <id>` - Put a day on a schedule
//! - `classclock unassign --date <date>` - Take a day off its schedule
//! - `classclock toggle --date <date> [--schedule <id>]` - Calendar-style toggle
//! - `classclock calendar [--month YYYY-MM] [--schedule <id>]` - Month grid
//! - `classclock check` - Validate configuration and school data

use anyhow::Context;
use bell_core::calendar::MonthCursor;
use bell_core::types::Date;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use service_cli::commands::{self, assign::DateEdit};
use service_cli::config::{build_config, CliArgs, ENV_DATA, ENV_LOG_LEVEL};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ClassClock bell schedule CLI
#[derive(Parser)]
#[command(name = "classclock")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// School data file
    #[arg(short, long, global = true, value_name = "FILE", env = ENV_DATA)]
    data: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = ENV_LOG_LEVEL)]
    log_level: Option<String>,

    /// Display times on a 24-hour clock
    #[arg(long = "24h", global = true)]
    twenty_four_hour: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current time state and the next bell
    Status {
        /// Local instant to evaluate instead of now (YYYY-MM-DDTHH:MM[:SS])
        #[arg(long, value_parser = parse_instant)]
        at: Option<NaiveDateTime>,
    },

    /// Show the bell schedule for a date
    Schedule {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: Date,
    },

    /// Assign a date to a bell schedule
    Assign {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: Date,

        /// Bell schedule identifier
        #[arg(short, long)]
        schedule: String,
    },

    /// Remove a date from its bell schedule
    Unassign {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: Date,
    },

    /// Toggle a date on the selected bell schedule
    Toggle {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: Date,

        /// Selected bell schedule identifier
        #[arg(short, long)]
        schedule: Option<String>,
    },

    /// Print a month calendar of bell schedule assignments
    Calendar {
        /// Month to show (YYYY-MM); defaults to the current month
        #[arg(short, long)]
        month: Option<MonthCursor>,

        /// Bell schedule to highlight
        #[arg(short, long)]
        schedule: Option<String>,
    },

    /// Check configuration and school data
    Check,
}

fn parse_instant(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|e| format!("expected YYYY-MM-DDTHH:MM[:SS]: {e}"))
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = build_config(&CliArgs {
        config_file: cli.config,
        data_file: cli.data,
        log_level: cli.log_level,
        verbose: cli.verbose,
        use_24_hour_time: cli.twenty_four_hour,
    })
    .context("failed to load configuration")?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        data_file = %config.data_file.display(),
        log_level = %config.log_level,
        "configuration loaded"
    );

    let data_file = config.data_file.display().to_string();
    let result = match cli.command {
        Commands::Status { at } => commands::status::run(&config, at),
        Commands::Schedule { date } => commands::schedule::run(&config, date),
        Commands::Assign { date, schedule } => {
            commands::assign::run(&config, date, DateEdit::Assign(&schedule))
        }
        Commands::Unassign { date } => commands::assign::run(&config, date, DateEdit::Unassign),
        Commands::Toggle { date, schedule } => {
            commands::assign::run(&config, date, DateEdit::Toggle(schedule.as_deref()))
        }
        Commands::Calendar { month, schedule } => {
            commands::calendar::run(&config, month, schedule.as_deref())
        }
        Commands::Check => commands::check::run(&config),
    };
    result.with_context(|| format!("command failed (data file: {data_file})"))
}
