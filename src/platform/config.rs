// gridstore-tools - platform/config.rs
//
// Config directory resolution and config.toml loading with startup
// validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::core::manifest::DumpConfig;
use crate::core::scanner::ScanSettings;
use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::io;
use std::path::{Path, PathBuf};

/// Resolved platform paths for gridstore-tools configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/gridstore-tools/)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Location of config.toml inside the config directory.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[dump]` section.
    pub dump: DumpSection,
    /// `[logs]` section.
    pub logs: LogsSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[dump]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DumpSection {
    /// Executable launched per manifest entry.
    pub program: Option<String>,
    /// Fixed leading arguments.
    pub args: Option<Vec<String>>,
    /// Destination directory for dumped files.
    pub output_dir: Option<String>,
    /// Extension replaced on store names.
    pub store_extension: Option<String>,
    /// Replacement extension.
    pub data_extension: Option<String>,
}

/// `[logs]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LogsSection {
    /// Substring ending the startup section of a log.
    pub marker: Option<String>,
    /// Literal payload line prefix.
    pub match_prefix: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration derived from `config.toml`.
///
/// Invalid values produce warnings and fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Index dumper settings.
    pub dump: DumpConfig,
    /// Log processor settings.
    pub scan: ScanSettings,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

/// Load the config named on the CLI, or the platform default when none was given.
pub fn load_for_cli(explicit: Option<&Path>) -> Result<(AppConfig, Vec<String>), ConfigError> {
    match explicit {
        Some(path) => load_config_file(path),
        None => Ok(load_config(&PlatformPaths::resolve().config_file())),
    }
}

/// Load config.toml from its default platform location.
///
/// A missing file yields defaults with no warnings. An unreadable or
/// unparseable file yields defaults plus a warning.
pub fn load_config(config_path: &Path) -> (AppConfig, Vec<String>) {
    match load_config_file(config_path) {
        Ok(loaded) => loaded,
        Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
            (AppConfig::default(), Vec::new())
        }
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            (AppConfig::default(), vec![msg])
        }
    }
}

/// Load a config file the user named explicitly. Unlike [`load_config`],
/// a missing or unparseable file is an error.
pub fn load_config_file(config_path: &Path) -> Result<(AppConfig, Vec<String>), ConfigError> {
    let content = std::fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
        path: config_path.to_path_buf(),
        source: e,
    })?;

    let raw: RawConfig = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: config_path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let (config, warnings) = validate(raw);
    for w in &warnings {
        tracing::warn!("{}", w);
    }
    Ok((config, warnings))
}

/// Validate each field, accumulating all problems as warnings.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    let mut out_of_range = |field: &str, value: &str, expected: &str| {
        warnings.push(format!(
            "{}. Using default.",
            ConfigError::ValueOutOfRange {
                field: field.to_string(),
                value: value.to_string(),
                expected: expected.to_string(),
            }
        ));
    };

    // -- Dump --
    if let Some(program) = raw.dump.program {
        if program.trim().is_empty() {
            out_of_range("dump.program", &program, "a non-empty executable name");
        } else {
            config.dump.program = program;
        }
    }

    if let Some(args) = raw.dump.args {
        config.dump.args = args;
    }

    if let Some(dir) = raw.dump.output_dir {
        if dir.is_empty() {
            out_of_range("dump.output_dir", &dir, "a non-empty directory path");
        } else {
            config.dump.output_dir = PathBuf::from(dir);
        }
    }

    if let Some(ext) = raw.dump.store_extension {
        if is_extension(&ext) {
            config.dump.store_extension = ext;
        } else {
            out_of_range("dump.store_extension", &ext, "an extension starting with '.'");
        }
    }

    if let Some(ext) = raw.dump.data_extension {
        if is_extension(&ext) {
            config.dump.data_extension = ext;
        } else {
            out_of_range("dump.data_extension", &ext, "an extension starting with '.'");
        }
    }

    // -- Logs --
    if let Some(marker) = raw.logs.marker {
        if marker.is_empty() {
            out_of_range("logs.marker", &marker, "a non-empty substring");
        } else {
            config.scan.marker = marker;
        }
    }

    if let Some(prefix) = raw.logs.match_prefix {
        if prefix.is_empty() {
            out_of_range("logs.match_prefix", &prefix, "a non-empty prefix");
        } else {
            config.scan.match_prefix = prefix;
        }
    }

    // -- Logging --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            out_of_range(
                "logging.level",
                &level,
                "one of error, warn, info, debug, trace",
            );
        }
    }

    (config, warnings)
}

fn is_extension(ext: &str) -> bool {
    ext.len() > 1 && ext.starts_with('.')
}
