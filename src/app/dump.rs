// gridstore-tools - app/dump.rs
//
// Index dumper orchestration: read the manifest, then run the dump
// command for each store, one at a time.
//
// A failed dump is never fatal. It is logged at WARN and counted, and the
// next entry is attempted. Only an unreadable manifest fails the run.

use crate::core::manifest::{self, DumpConfig};
use crate::platform::fs;
use crate::platform::process::{CommandOutcome, CommandRunner};
use crate::util::error::{ManifestError, Result};
use std::path::Path;
use std::time::Instant;

/// Counts for one dumper run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DumpSummary {
    /// Commands run (one per non-empty manifest line).
    pub invoked: usize,
    /// Commands that exited successfully.
    pub succeeded: usize,
    /// Commands that failed to start or exited non-zero.
    pub failed: usize,
}

/// Run the dump command for every store listed in `manifest_path`.
pub fn run_dump<R: CommandRunner>(
    manifest_path: &Path,
    config: &DumpConfig,
    runner: &R,
) -> Result<DumpSummary> {
    let content = std::fs::read_to_string(manifest_path).map_err(|e| ManifestError::Io {
        path: manifest_path.to_path_buf(),
        source: e,
    })?;

    let entries = manifest::parse_manifest(&content);
    tracing::info!(
        manifest = %manifest_path.display(),
        stores = entries.len(),
        "Manifest loaded"
    );

    if !entries.is_empty() {
        if let Err(e) = fs::ensure_dir(&config.output_dir) {
            tracing::warn!(
                dir = %config.output_dir.display(),
                error = %e,
                "Could not create output directory; dumps may fail"
            );
        }
    }

    let mut summary = DumpSummary::default();
    for entry in &entries {
        let invocation = manifest::build_invocation(entry, config);
        let output = manifest::derive_output_path(&entry.source, config);
        let started = Instant::now();

        tracing::info!(
            source = %entry.source,
            output = %output.display(),
            "Dumping store"
        );

        let outcome = runner.run(&invocation);
        summary.invoked += 1;

        match outcome {
            CommandOutcome::Succeeded => {
                summary.succeeded += 1;
                tracing::debug!(
                    source = %entry.source,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Dump finished"
                );
            }
            CommandOutcome::ExitedWithFailure { code } => {
                summary.failed += 1;
                tracing::warn!(
                    source = %entry.source,
                    output = %output.display(),
                    manifest_line = entry.line_number,
                    code = ?code,
                    "Dump command exited with failure; continuing"
                );
            }
            CommandOutcome::SpawnFailed { error } => {
                summary.failed += 1;
                tracing::warn!(
                    source = %entry.source,
                    program = %invocation.program,
                    error = %error,
                    "Dump command could not be started; continuing"
                );
            }
        }
    }

    tracing::info!(
        invoked = summary.invoked,
        succeeded = summary.succeeded,
        failed = summary.failed,
        "Dump run complete"
    );

    Ok(summary)
}
