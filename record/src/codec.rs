//! Flat record model and its JSON text encoding.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

/// A persisted field value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Text(String),
    Flag(bool),
}

impl RecordValue {
    /// Truthiness as the host form would see it: empty text is false.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Flag(b) => *b,
        }
    }

    /// Text shown for this value, or `None` when it is falsy.
    #[must_use]
    pub fn display_text(&self) -> Option<String> {
        match self {
            Self::Text(s) if !s.is_empty() => Some(s.clone()),
            Self::Flag(true) => Some("true".to_owned()),
            _ => None,
        }
    }

    /// Value written into a text-like input when restoring.
    #[must_use]
    pub fn as_input_value(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Flag(b) => b.to_string(),
        }
    }
}

impl From<bool> for RecordValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for RecordValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for RecordValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Field `id` to persisted value. One level deep, ordered by key.
pub type Record = BTreeMap<String, RecordValue>;

/// Encode a record as a JSON object string.
#[must_use]
pub fn encode(record: &Record) -> String {
    // A map of strings and booleans always serializes.
    serde_json::to_string(record).unwrap_or_else(|_| "{}".to_owned())
}

/// Decode a JSON object string into a record.
///
/// # Errors
///
/// Returns [`RecordError::CorruptRecord`] when the text is not a JSON object
/// whose values are all strings or booleans.
pub fn decode(raw: &str) -> Result<Record, RecordError> {
    serde_json::from_str(raw).map_err(RecordError::CorruptRecord)
}
