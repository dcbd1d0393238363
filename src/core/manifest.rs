// gridstore-tools - core/manifest.rs
//
// Store manifest parsing and dump-command construction.
// Core layer: operates on manifest content as a string; reading the file
// and running the command are the app and platform layers' job.

use std::ffi::OsString;
use std::path::PathBuf;

/// Settings for turning manifest entries into dump invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpConfig {
    /// Executable to launch.
    pub program: String,
    /// Fixed arguments placed before the source and destination paths.
    pub args: Vec<String>,
    /// Directory the destination paths are placed under.
    pub output_dir: PathBuf,
    /// Extension replaced on the store's final path segment.
    pub store_extension: String,
    /// Extension substituted for `store_extension`.
    pub data_extension: String,
}

impl Default for DumpConfig {
    fn default() -> Self {
        use crate::util::constants;
        Self {
            program: constants::DEFAULT_DUMP_PROGRAM.to_string(),
            args: constants::DEFAULT_DUMP_ARGS
                .iter()
                .map(|a| a.to_string())
                .collect(),
            output_dir: PathBuf::from(constants::DEFAULT_DUMP_OUTPUT_DIR),
            store_extension: constants::DEFAULT_STORE_EXTENSION.to_string(),
            data_extension: constants::DEFAULT_DATA_EXTENSION.to_string(),
        }
    }
}

/// One store path listed in a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Store path exactly as listed (surrounding whitespace removed).
    pub source: String,
    /// 1-based line number within the trimmed manifest.
    pub line_number: usize,
}

/// A fully resolved external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Render as a single shell-like string for logging.
    pub fn display(&self) -> String {
        let mut out = self.program.clone();
        for arg in &self.args {
            out.push(' ');
            out.push_str(&arg.to_string_lossy());
        }
        out
    }
}

/// Split manifest content into entries.
///
/// The whole content is trimmed before splitting on `\n`; each line is
/// trimmed again and blank lines are skipped, so an empty manifest yields
/// no entries.
pub fn parse_manifest(content: &str) -> Vec<ManifestEntry> {
    content
        .trim()
        .split('\n')
        .enumerate()
        .filter_map(|(idx, line)| {
            let source = line.trim();
            if source.is_empty() {
                None
            } else {
                Some(ManifestEntry {
                    source: source.to_string(),
                    line_number: idx + 1,
                })
            }
        })
        .collect()
}

/// Derive the destination path for a store.
///
/// `/data/en_place.rocksdb` becomes `<output_dir>/en_place.dat`. Trailing
/// slashes are ignored. A final segment without the store extension is
/// used unchanged.
pub fn derive_output_path(source: &str, config: &DumpConfig) -> PathBuf {
    let segment = source
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    let file_name = match segment.strip_suffix(config.store_extension.as_str()) {
        Some(stem) => format!("{stem}{}", config.data_extension),
        None => segment.to_string(),
    };

    config.output_dir.join(file_name)
}

/// Build the dump invocation for one manifest entry: fixed args, then the
/// source path, then the derived destination.
pub fn build_invocation(entry: &ManifestEntry, config: &DumpConfig) -> Invocation {
    let output = derive_output_path(&entry.source, config);
    let mut args: Vec<OsString> = config.args.iter().map(OsString::from).collect();
    args.push(OsString::from(&entry.source));
    args.push(output.into_os_string());
    Invocation {
        program: config.program.clone(),
        args,
    }
}
