// gridstore-tools - util/constants.rs
//
// Single source of truth for all named constants and defaults.
// config.toml values fall back to these when absent or invalid.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "gridstore-tools";

/// Application identifier used for config directories.
pub const APP_ID: &str = "gridstore-tools";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Index dumper defaults
// =============================================================================

/// Executable launched once per manifest entry.
pub const DEFAULT_DUMP_PROGRAM: &str = "cargo";

/// Fixed leading arguments; the source and destination paths follow them.
pub const DEFAULT_DUMP_ARGS: &[&str] = &["run", "--release", "--bin", "dump_store"];

/// Directory that receives dumped data files.
pub const DEFAULT_DUMP_OUTPUT_DIR: &str = "out";

/// Extension carried by store directories listed in a manifest.
pub const DEFAULT_STORE_EXTENSION: &str = ".rocksdb";

/// Extension given to dumped data files.
pub const DEFAULT_DATA_EXTENSION: &str = ".dat";

// =============================================================================
// Log processor defaults
// =============================================================================

/// Substring marking the end of dev-server startup output.
pub const DEFAULT_LOG_MARKER: &str = "dev server ready";

/// Literal prefix of a phrase-match payload line (trailing space included).
pub const DEFAULT_MATCH_PREFIX: &str = "PHRASEMATCH ";

/// Extension stripped from input log paths before deriving outputs.
pub const LOG_EXTENSION: &str = "log";

/// Extension of the line-delimited JSON payload output.
pub const LJSON_EXTENSION: &str = "ljson";

/// Extension of the sorted store-path index output.
pub const IDX_EXTENSION: &str = "idx";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Maximum length of a payload included in debug output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
