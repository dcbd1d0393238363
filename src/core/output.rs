// gridstore-tools - core/output.rs
//
// Derivation of the two output paths written next to each input log.

use crate::util::constants::{IDX_EXTENSION, LJSON_EXTENSION, LOG_EXTENSION};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Output locations for one input log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Line-delimited phrase-match payloads.
    pub ljson: PathBuf,
    /// Sorted, unique store paths.
    pub idx: PathBuf,
}

/// `run/a.log` -> `run/a.ljson` + `run/a.idx`.
/// Inputs without a `.log` extension keep their full name: `a.txt` -> `a.txt.ljson`.
pub fn derive_output_paths(input: &Path) -> OutputPaths {
    let base: OsString = if input.extension() == Some(OsStr::new(LOG_EXTENSION)) {
        input.with_extension("").into_os_string()
    } else {
        input.as_os_str().to_os_string()
    };

    OutputPaths {
        ljson: with_suffix(&base, LJSON_EXTENSION),
        idx: with_suffix(&base, IDX_EXTENSION),
    }
}

fn with_suffix(base: &OsStr, ext: &str) -> PathBuf {
    let mut name = base.to_os_string();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}
