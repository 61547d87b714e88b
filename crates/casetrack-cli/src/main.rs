//! casetrack CLI
//!
//! ## Commands
//!
//! - `evaluate`: Evaluate a case snapshot against its application task list
//! - `respond`: Evaluate the active respondent's response task list
//! - `publish`: Evaluate a case held in a directory store and write the task list back

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use casetrack_core::{
    evaluate, evaluate_response, evaluate_with_config, CaseRecord, Evaluation, EventKind,
    TaskListConfig,
};
use casetrack_runtime::{FileCaseStore, ProgressPublisher, PublisherConfig};

#[derive(Parser)]
#[command(name = "casetrack")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Family court case task list evaluation", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a case snapshot against its application task list
    Evaluate {
        /// Path to the case snapshot (JSON)
        case: PathBuf,

        /// Custom task list configuration (YAML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = Format::Markdown)]
        format: Format,
    },

    /// Evaluate the active respondent's response task list
    Respond {
        /// Path to the case snapshot (JSON)
        case: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Format::Markdown)]
        format: Format,
    },

    /// Evaluate a case held in a directory store and write its task list back
    Publish {
        /// Directory holding `<id>.json` snapshots
        #[arg(long)]
        store_dir: PathBuf,

        #[arg(long)]
        case_id: u64,

        /// Publish the respondent response task list
        #[arg(long)]
        respondent: bool,

        /// Total attempts per store call
        #[arg(long, default_value_t = 3)]
        max_attempts: usize,

        /// Delay before the first retry
        #[arg(long, default_value = "100ms", value_parser = humantime::parse_duration)]
        min_delay: Duration,

        /// Upper bound on the delay between retries
        #[arg(long, default_value = "2s", value_parser = humantime::parse_duration)]
        max_delay: Duration,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Evaluate {
            case,
            config,
            format,
        } => cmd_evaluate(&case, config.as_deref(), format),
        Commands::Respond { case, format } => cmd_respond(&case, format),
        Commands::Publish {
            store_dir,
            case_id,
            respondent,
            max_attempts,
            min_delay,
            max_delay,
        } => {
            let config = PublisherConfig {
                max_attempts,
                min_delay,
                max_delay,
            };
            cmd_publish(store_dir, case_id, respondent, config)
        }
    }
}

fn read_case(path: &Path) -> Result<CaseRecord> {
    let case = CaseRecord::from_json_file(path)
        .with_context(|| format!("Failed to read case snapshot {}", path.display()))?;
    tracing::debug!(case_id = case.id, case_type = ?case.case_type(), "case snapshot loaded");
    Ok(case)
}

fn cmd_evaluate(path: &Path, config: Option<&Path>, format: Format) -> Result<()> {
    let case = read_case(path)?;
    let evaluation = match config {
        Some(config_path) => {
            let config = TaskListConfig::from_yaml_file(config_path).with_context(|| {
                format!("Failed to load task list {}", config_path.display())
            })?;
            evaluate_with_config(&case, config)?
        }
        None => evaluate(&case)?,
    };
    print_evaluation(&evaluation, format)
}

fn cmd_respond(path: &Path, format: Format) -> Result<()> {
    let case = read_case(path)?;
    let evaluation = evaluate_response(&case)
        .with_context(|| format!("Failed to evaluate response on case {}", case.id))?;
    print_evaluation(&evaluation, format)
}

fn cmd_publish(
    store_dir: PathBuf,
    case_id: u64,
    respondent: bool,
    config: PublisherConfig,
) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let publisher = ProgressPublisher::new(FileCaseStore::new(store_dir), config);

    let payload = runtime
        .block_on(async {
            if respondent {
                publisher.publish_response(case_id).await
            } else {
                publisher.publish(case_id).await
            }
        })
        .with_context(|| format!("Failed to publish task list for case {}", case_id))?;

    println!(
        "Wrote {} ({:?}, {} outstanding)",
        publisher.store().task_list_path(case_id).display(),
        payload.submission,
        payload.errors.len()
    );
    Ok(())
}

fn print_evaluation<E: EventKind>(evaluation: &Evaluation<E>, format: Format) -> Result<()> {
    match format {
        Format::Markdown => print!("{}", evaluation.rendered.markdown),
        Format::Json => {
            let json = serde_json::to_string_pretty(evaluation)
                .context("Failed to serialise evaluation")?;
            println!("{}", json);
        }
    }
    Ok(())
}
