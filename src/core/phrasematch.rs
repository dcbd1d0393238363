// gridstore-tools - core/phrasematch.rs
//
// Phrase-match payload model. A payload is a JSON array whose first
// element is the list of phrase-match records; later elements are
// ignored. Only `store.path` is read from each record.

use crate::util::error::ParseError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// One phrase-match record. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseMatch {
    pub store: StoreRef,
}

/// The store a phrase match came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRef {
    pub path: String,
}

/// Parse a prefix-stripped payload into its phrase-match records.
///
/// `file` and `line_number` only feed error context.
pub fn parse_payload(
    payload: &str,
    file: &Path,
    line_number: u64,
) -> Result<Vec<PhraseMatch>, ParseError> {
    let value: Value = serde_json::from_str(payload).map_err(|e| ParseError::InvalidJson {
        file: file.to_path_buf(),
        line_number,
        source: e,
    })?;

    let first = match value {
        Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
        Value::Array(_) => {
            return Err(ParseError::UnexpectedShape {
                file: file.to_path_buf(),
                line_number,
                reason: "payload array is empty",
            })
        }
        _ => {
            return Err(ParseError::UnexpectedShape {
                file: file.to_path_buf(),
                line_number,
                reason: "payload is not a JSON array",
            })
        }
    };

    serde_json::from_value(first).map_err(|e| ParseError::InvalidRecord {
        file: file.to_path_buf(),
        line_number,
        source: e,
    })
}
