//! CLI application for extracting invoice fields from text-based PDFs.

mod config;
mod process;
mod report;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use report::Outcome;

/// Extract invoice fields from a text-based PDF
#[derive(Parser)]
#[command(name = "invex")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Path to the invoice PDF
    #[arg(long, value_name = "path")]
    pdf: PathBuf,
}

fn main() -> ExitCode {
    init_logging();

    let outcome = match Cli::try_parse() {
        Ok(cli) => process::run(&cli.pdf, &config::load()),
        Err(e) => {
            debug!("Invalid invocation: {}", e);
            Outcome::usage()
        }
    };

    outcome.emit()
}

/// Log to stderr so stdout only ever carries the JSON report.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to install logger: {e}");
    }
}
