// gridstore-tools - core/scanner.rs
//
// Single-pass scan of a dev-server log for phrase-match payloads.
// Core layer: reads from any BufRead and writes payload lines to any
// Write; opening files is the app layer's job.
//
// The scan is a two-state machine. Searching discards everything up to
// and including the first line containing the marker. Collecting keeps
// prefixed lines. The transition is one-way.

use crate::core::phrasematch::parse_payload;
use crate::util::error::ParseError;
use crate::util::logging::preview;
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::path::Path;

/// Literals that drive a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSettings {
    /// Substring that ends the startup section of the log.
    pub marker: String,
    /// Literal prefix of a payload line, stripped exactly once.
    pub match_prefix: String,
}

impl Default for ScanSettings {
    fn default() -> Self {
        use crate::util::constants;
        Self {
            marker: constants::DEFAULT_LOG_MARKER.to_string(),
            match_prefix: constants::DEFAULT_MATCH_PREFIX.to_string(),
        }
    }
}

/// Where the scanner is within the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Marker not yet seen; every line is discarded.
    Searching,
    /// Marker seen; prefixed lines are payloads.
    Collecting,
}

/// Outcome of scanning one log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Total lines read, marker and noise included.
    pub lines_read: u64,
    /// Payload lines written to the ljson output.
    pub matches_written: u64,
    /// Whether the marker line was found.
    pub marker_found: bool,
    /// Unique store paths referenced by the payloads, in sorted order.
    pub store_paths: BTreeSet<String>,
}

/// Scan `reader` and write each prefix-stripped, trimmed payload as one
/// line to `ljson_out`.
///
/// A line is written only after its payload parsed successfully, so the
/// output never holds a malformed payload. The first parse error aborts
/// the scan. `file` is used for error context and logging only.
pub fn scan_log<R: BufRead, W: Write>(
    reader: R,
    mut ljson_out: W,
    settings: &ScanSettings,
    file: &Path,
) -> Result<ScanSummary, ParseError> {
    let io_err = |e: std::io::Error| ParseError::Io {
        file: file.to_path_buf(),
        source: e,
    };

    let mut state = ScanState::Searching;
    let mut summary = ScanSummary::default();

    for (line_idx, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(io_err)?;
        let line_number = (line_idx as u64) + 1;
        summary.lines_read += 1;

        match state {
            ScanState::Searching => {
                if line.contains(settings.marker.as_str()) {
                    tracing::debug!(
                        file = %file.display(),
                        line = line_number,
                        "Marker found; collecting phrase matches"
                    );
                    state = ScanState::Collecting;
                    summary.marker_found = true;
                }
            }
            ScanState::Collecting => {
                let Some(payload) = line.strip_prefix(settings.match_prefix.as_str()) else {
                    continue;
                };
                let payload = payload.trim();
                let records = parse_payload(payload, file, line_number)?;

                tracing::trace!(
                    file = %file.display(),
                    line = line_number,
                    records = records.len(),
                    payload = preview(payload),
                    "Phrase match"
                );

                summary
                    .store_paths
                    .extend(records.into_iter().map(|r| r.store.path));
                writeln!(ljson_out, "{payload}").map_err(io_err)?;
                summary.matches_written += 1;
            }
        }
    }

    ljson_out.flush().map_err(io_err)?;

    if !summary.marker_found {
        tracing::warn!(
            file = %file.display(),
            marker = %settings.marker,
            "Marker line never found; no phrase matches collected"
        );
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scan(input: &str) -> (Result<ScanSummary, ParseError>, String) {
        let mut out = Vec::new();
        let result = scan_log(
            Cursor::new(input.as_bytes()),
            &mut out,
            &ScanSettings::default(),
            Path::new("test.log"),
        );
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_end_to_end_example() {
        let input = "starting...\n\
                     dev server ready\n\
                     PHRASEMATCH [[{\"store\":{\"path\":\"idx/b\"}},{\"store\":{\"path\":\"idx/a\"}}]]\n\
                     noise line\n\
                     PHRASEMATCH [[{\"store\":{\"path\":\"idx/a\"}}]]\n";
        let (result, out) = scan(input);
        let summary = result.unwrap();
        assert_eq!(
            out,
            "[[{\"store\":{\"path\":\"idx/b\"}},{\"store\":{\"path\":\"idx/a\"}}]]\n\
             [[{\"store\":{\"path\":\"idx/a\"}}]]\n"
        );
        let paths: Vec<_> = summary.store_paths.iter().cloned().collect();
        assert_eq!(paths, vec!["idx/a", "idx/b"]);
        assert_eq!(summary.matches_written, 2);
        assert_eq!(summary.lines_read, 5);
        assert!(summary.marker_found);
    }

    #[test]
    fn test_no_marker_collects_nothing() {
        let (result, out) = scan("PHRASEMATCH [[{\"store\":{\"path\":\"x\"}}]]\nother\n");
        let summary = result.unwrap();
        assert!(out.is_empty());
        assert!(summary.store_paths.is_empty());
        assert!(!summary.marker_found);
    }

    #[test]
    fn test_lines_before_marker_are_not_parsed() {
        // Invalid payload before the marker must not be an error.
        let (result, out) = scan("PHRASEMATCH {{{\ndev server ready\n");
        assert!(result.is_ok());
        assert!(out.is_empty());
    }

    #[test]
    fn test_marker_line_itself_is_discarded() {
        let (result, out) = scan("PHRASEMATCH [[]] dev server ready\n");
        assert!(result.unwrap().marker_found);
        assert!(out.is_empty());
    }

    #[test]
    fn test_marker_is_substring_match() {
        let (result, out) = scan(
            "[info] the dev server ready at :3000\nPHRASEMATCH [[{\"store\":{\"path\":\"a/b\"}}]]\n",
        );
        assert_eq!(out, "[[{\"store\":{\"path\":\"a/b\"}}]]\n");
        assert!(result.unwrap().store_paths.contains("a/b"));
    }

    #[test]
    fn test_duplicate_paths_deduplicate() {
        let (result, _) = scan(
            "dev server ready\n\
             PHRASEMATCH [[{\"store\":{\"path\":\"x\"}}]]\n\
             PHRASEMATCH [[{\"store\":{\"path\":\"x\"}}]]\n",
        );
        let summary = result.unwrap();
        assert_eq!(summary.store_paths.len(), 1);
        assert_eq!(summary.matches_written, 2);
    }

    #[test]
    fn test_prefix_requires_trailing_space() {
        let (result, out) = scan("dev server ready\nPHRASEMATCHES [[]]\n");
        assert_eq!(result.unwrap().matches_written, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_prefix_must_start_the_line() {
        let (result, _) = scan("dev server ready\n  PHRASEMATCH [[]]\n");
        assert_eq!(result.unwrap().matches_written, 0);
    }

    #[test]
    fn test_payload_is_trimmed() {
        let (_, out) = scan("dev server ready\r\nPHRASEMATCH   [[]]  \r\n");
        assert_eq!(out, "[[]]\n");
    }

    #[test]
    fn test_invalid_json_aborts_and_keeps_earlier_lines() {
        let (result, out) = scan(
            "dev server ready\n\
             PHRASEMATCH [[{\"store\":{\"path\":\"ok\"}}]]\n\
             PHRASEMATCH [[{\"store\":\n\
             PHRASEMATCH [[{\"store\":{\"path\":\"never\"}}]]\n",
        );
        let err = result.unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson { line_number: 3, .. }));
        assert_eq!(out, "[[{\"store\":{\"path\":\"ok\"}}]]\n");
    }

    #[test]
    fn test_missing_store_path_aborts() {
        let (result, out) = scan("dev server ready\nPHRASEMATCH [[{\"store\":{\"id\":1}}]]\n");
        assert!(matches!(
            result.unwrap_err(),
            ParseError::InvalidRecord { line_number: 2, .. }
        ));
        assert!(out.is_empty(), "failed payload must not be written");
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let mut out = Vec::new();
        let bytes: &[u8] = b"dev server ready\n\xff\xfe\n";
        let err = scan_log(
            Cursor::new(bytes),
            &mut out,
            &ScanSettings::default(),
            Path::new("bin.log"),
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }

    #[test]
    fn test_custom_settings() {
        let settings = ScanSettings {
            marker: "READY".to_string(),
            match_prefix: "PM:".to_string(),
        };
        let mut out = Vec::new();
        let summary = scan_log(
            Cursor::new("READY\nPM:[[{\"store\":{\"path\":\"q\"}}]]\n".as_bytes()),
            &mut out,
            &settings,
            Path::new("c.log"),
        )
        .unwrap();
        assert!(summary.store_paths.contains("q"));
    }
}
