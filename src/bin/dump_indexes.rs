// gridstore-tools - bin/dump_indexes.rs
//
// Index dumper entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. One dump command per manifest entry, run sequentially
//
// Exit code is 1 only when the manifest (or an explicit --config) cannot
// be read. Failed dump commands are logged, not fatal.

use clap::Parser;
use gridstore_tools::app::dump::run_dump;
use gridstore_tools::platform::config::load_for_cli;
use gridstore_tools::platform::process::SystemRunner;
use gridstore_tools::util;
use std::path::PathBuf;

/// Dump every grid store listed in a manifest by running the dump command
/// once per store.
#[derive(Parser, Debug)]
#[command(name = "dump_indexes", version, about)]
struct Cli {
    /// Manifest file: one store path per line.
    manifest: PathBuf,

    /// Directory for dumped files (overrides [dump] output_dir).
    #[arg(short = 'o', long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// Config file to use instead of the platform config.toml.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let (mut config, warnings) = match load_for_cli(cli.config.as_deref()) {
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

    if let Some(dir) = cli.output_dir {
        config.dump.output_dir = dir;
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        manifest = %cli.manifest.display(),
        program = %config.dump.program,
        output_dir = %config.dump.output_dir.display(),
        "dump_indexes starting"
    );

    if let Err(e) = run_dump(&cli.manifest, &config.dump, &SystemRunner) {
        tracing::error!(error = %e, "Dump run failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
