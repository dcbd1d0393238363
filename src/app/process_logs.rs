// gridstore-tools - app/process_logs.rs
//
// Log processor orchestration. For each input log: open it, truncate the
// .ljson output, scan, then write the .idx output. The .idx file is only
// written after a successful scan, so a parse error never leaves an index
// that looks complete.
//
// Files are processed in the order given. The multi-file failure policy
// is explicit: fail-fast by default, or keep going and report.

use crate::core::export;
use crate::core::output::derive_output_paths;
use crate::core::scanner::{scan_log, ScanSettings, ScanSummary};
use crate::platform::fs;
use crate::util::error::{ExportError, Result, ToolsError};
use std::path::{Path, PathBuf};

/// What to do when one of several input files fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failed file and return its error.
    #[default]
    FailFast,
    /// Log the failure and move on to the next file.
    KeepGoing,
}

/// Per-run outcome across all input files.
#[derive(Debug, Default)]
pub struct ProcessReport {
    /// Files processed successfully, with their summaries.
    pub processed: Vec<(PathBuf, ScanSummary)>,
    /// Files that failed (only populated under `KeepGoing`).
    pub failed: Vec<(PathBuf, ToolsError)>,
}

impl ProcessReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Process a single log file and write its `.ljson` and `.idx` outputs.
pub fn process_log_file(input: &Path, settings: &ScanSettings) -> Result<ScanSummary> {
    let outputs = derive_output_paths(input);

    let reader = fs::open_buffered(input).map_err(|e| ToolsError::Io {
        path: input.to_path_buf(),
        operation: "open log",
        source: e,
    })?;

    let ljson = fs::create_truncated(&outputs.ljson).map_err(|e| ExportError::Io {
        path: outputs.ljson.clone(),
        source: e,
    })?;

    let summary = scan_log(reader, ljson, settings, input)?;

    let idx = fs::create_truncated(&outputs.idx).map_err(|e| ExportError::Io {
        path: outputs.idx.clone(),
        source: e,
    })?;
    export::write_index(&summary.store_paths, idx).map_err(|e| ExportError::Io {
        path: outputs.idx.clone(),
        source: e,
    })?;

    tracing::info!(
        file = %input.display(),
        lines = summary.lines_read,
        matches = summary.matches_written,
        paths = summary.store_paths.len(),
        ljson = %outputs.ljson.display(),
        idx = %outputs.idx.display(),
        "Log processed"
    );

    Ok(summary)
}

/// Process every input in order under the given failure policy.
pub fn process_all(
    inputs: &[PathBuf],
    settings: &ScanSettings,
    policy: FailurePolicy,
) -> Result<ProcessReport> {
    let mut report = ProcessReport::default();

    for input in inputs {
        match process_log_file(input, settings) {
            Ok(summary) => report.processed.push((input.clone(), summary)),
            Err(e) => match policy {
                FailurePolicy::FailFast => return Err(e),
                FailurePolicy::KeepGoing => {
                    tracing::error!(
                        file = %input.display(),
                        error = %e,
                        "Failed to process log; continuing with next file"
                    );
                    report.failed.push((input.clone(), e));
                }
            },
        }
    }

    Ok(report)
}
