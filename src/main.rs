//! gh-mutual-follow CLI
//!
//! Find GitHub accounts whose follow relationship with you is one-sided,
//! and follow or unfollow them from a terminal UI.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use gh_mutual_follow::config::{load_config, Config, Overrides};
use gh_mutual_follow::error::AppError;
use gh_mutual_follow::github::GhClient;
use gh_mutual_follow::loader::load_data;
use gh_mutual_follow::logging::init_logging;
use gh_mutual_follow::report::format_report;
use gh_mutual_follow::tui;
use gh_mutual_follow::types::OutputFormat;

#[derive(Parser)]
#[command(name = "gh-mutual-follow")]
#[command(about = "Find and fix one-sided GitHub follow relationships")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the gh executable
    #[arg(long, global = true)]
    gh: Option<String>,

    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "gh_mutual_follow=trace"
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive two-pane view (default)
    Tui,

    /// Load once and print both asymmetric lists
    Report {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = setup(&cli).and_then(|config| match cli.command {
        None | Some(Commands::Tui) => cmd_tui(&config),
        Some(Commands::Report { format }) => cmd_report(&config, format.into()),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// SETUP
// ============================================================================

/// Resolve config (file, then flags) and start logging.
fn setup(cli: &Cli) -> Result<Config, AppError> {
    let config = load_config(cli.config.as_deref())?.with_overrides(Overrides {
        gh_program: cli.gh.clone(),
        log_level: cli.log_level.clone(),
        log_file: cli.log_file.clone(),
    });

    init_logging(&config.log_level, config.log_path().as_deref())?;
    tracing::info!(gh = %config.gh_program, "starting");
    Ok(config)
}

// ============================================================================
// PROGRESS HELPERS
// ============================================================================

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_tui(config: &Config) -> Result<(), AppError> {
    let client = Arc::new(GhClient::new(config.gh_program.clone()));
    tui::run(client, config.status_timeout())?;
    Ok(())
}

fn cmd_report(config: &Config, format: OutputFormat) -> Result<(), AppError> {
    let client = GhClient::new(config.gh_program.clone());

    // Spinner goes to stderr; keep JSON output clean regardless
    let data = if format == OutputFormat::Human {
        let sp = spinner("Loading followers and following...");
        let result = load_data(&client);
        sp.finish_and_clear();
        result?
    } else {
        load_data(&client)?
    };

    print!("{}", format_report(&data, format));
    Ok(())
}
