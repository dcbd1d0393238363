// gridstore-tools - bin/process_logs.rs
//
// Log processor entry point. For every log given on the command line,
// writes <log>.ljson (phrase-match payloads) and <log>.idx (sorted unique
// store paths) next to it.

use clap::Parser;
use gridstore_tools::app::process_logs::{process_all, FailurePolicy};
use gridstore_tools::platform::config::load_for_cli;
use gridstore_tools::util;
use std::path::PathBuf;

/// Extract phrase-match payloads and store indexes from dev-server logs.
#[derive(Parser, Debug)]
#[command(name = "process_logs", version, about)]
struct Cli {
    /// Log files to process, in order.
    #[arg(required = true)]
    logs: Vec<PathBuf>,

    /// Keep processing remaining files after one fails (exit code is still 1).
    #[arg(short = 'k', long = "keep-going")]
    keep_going: bool,

    /// Config file to use instead of the platform config.toml.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let (config, warnings) = match load_for_cli(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            util::logging::init(cli.debug, None);
            tracing::error!(error = %e, "Failed to load configuration");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    util::logging::init(cli.debug, config.log_level.as_deref());
    for w in &warnings {
        tracing::warn!(warning = %w, "Configuration warning");
    }

    let policy = if cli.keep_going {
        FailurePolicy::KeepGoing
    } else {
        FailurePolicy::FailFast
    };

    tracing::info!(
        version = util::constants::APP_VERSION,
        files = cli.logs.len(),
        policy = ?policy,
        "process_logs starting"
    );

    match process_all(&cli.logs, &config.scan, policy) {
        Ok(report) if report.has_failures() => {
            for (path, e) in &report.failed {
                eprintln!("Error: {}: {e}", path.display());
            }
            std::process::exit(1);
        }
        Ok(report) => {
            tracing::info!(files = report.processed.len(), "All logs processed");
        }
        Err(e) => {
            tracing::error!(error = %e, "Log processing aborted");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
