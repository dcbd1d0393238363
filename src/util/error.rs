// gridstore-tools - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every error names the file it concerns; line-level errors also carry
// the 1-based line number.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all gridstore-tools operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum ToolsError {
    /// Manifest could not be read.
    Manifest(ManifestError),

    /// Log file scanning failed.
    Parse(ParseError),

    /// Writing a derived output file failed.
    Export(ExportError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for ToolsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manifest(e) => write!(f, "Manifest error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ToolsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Manifest(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Manifest errors
// ---------------------------------------------------------------------------

/// Errors related to reading a store manifest.
#[derive(Debug)]
pub enum ManifestError {
    /// The manifest file is missing or unreadable.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read manifest '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ManifestError> for ToolsError {
    fn from(e: ManifestError) -> Self {
        Self::Manifest(e)
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Errors raised while scanning a log file for phrase-match payloads.
/// Any of these aborts the scan of the file concerned.
#[derive(Debug)]
pub enum ParseError {
    /// The payload after the prefix is not valid JSON.
    InvalidJson {
        file: PathBuf,
        line_number: u64,
        source: serde_json::Error,
    },

    /// The payload is valid JSON but not a non-empty array.
    UnexpectedShape {
        file: PathBuf,
        line_number: u64,
        reason: &'static str,
    },

    /// The first payload element is not an array of records carrying
    /// a string `store.path`.
    InvalidRecord {
        file: PathBuf,
        line_number: u64,
        source: serde_json::Error,
    },

    /// I/O error while reading the log or writing payload lines.
    Io { file: PathBuf, source: io::Error },
}

impl ParseError {
    /// Line number the error refers to, if it is a line-level error.
    pub fn line_number(&self) -> Option<u64> {
        match self {
            Self::InvalidJson { line_number, .. }
            | Self::UnexpectedShape { line_number, .. }
            | Self::InvalidRecord { line_number, .. } => Some(*line_number),
            Self::Io { .. } => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson {
                file,
                line_number,
                source,
            } => write!(
                f,
                "'{}' line {line_number}: payload is not valid JSON: {source}",
                file.display()
            ),
            Self::UnexpectedShape {
                file,
                line_number,
                reason,
            } => write!(f, "'{}' line {line_number}: {reason}", file.display()),
            Self::InvalidRecord {
                file,
                line_number,
                source,
            } => write!(
                f,
                "'{}' line {line_number}: malformed phrase-match record: {source}",
                file.display()
            ),
            Self::Io { file, source } => {
                write!(f, "'{}': I/O error: {source}", file.display())
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidJson { source, .. } => Some(source),
            Self::InvalidRecord { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::UnexpectedShape { .. } => None,
        }
    }
}

impl From<ParseError> for ToolsError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors related to writing derived output files.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error creating or writing an output file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot write '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ExportError> for ToolsError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for ToolsError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Convenience type alias for gridstore-tools results.
pub type Result<T> = std::result::Result<T, ToolsError>;
