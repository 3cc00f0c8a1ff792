// SPDX-License-Identifier: PMPL-1.0-or-later

//! Pronunciation oracle: the external service that does the linguistics.
//!
//! The detector only guesses a script family. Everything else (etymology,
//! diacritic restoration, IPA, respelling) comes from an oracle behind the
//! [`PronunciationOracle`] trait, so callers can swap in a fake for tests or
//! run without network access.

mod claude;

pub use claude::{build_prompt, parse_record, ClaudeOracle};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Structured answer from an oracle. Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleRecord {
    #[serde(deserialize_with = "null_as_default")]
    pub inferred_language: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name_with_diacritics: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ipa: String,
    /// Australian English phonetic respelling in the Macquarie style.
    #[serde(deserialize_with = "null_as_default")]
    pub macquarie: String,
    #[serde(deserialize_with = "null_as_default")]
    pub guidance: String,
    pub romanization: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tone_marks_added: bool,
    pub ambiguity_note: Option<String>,
    pub cultural_note: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("pronunciation oracle is not configured")]
    Unavailable,
    #[error("oracle request failed: {0}")]
    Transport(String),
    #[error("oracle returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("oracle response could not be parsed: {0}")]
    Malformed(String),
}

/// Text in, structured record out.
///
/// `hint` is the detector's language label.
pub trait PronunciationOracle: Send + Sync {
    fn infer(&self, text: &str, hint: &str) -> Result<OracleRecord, OracleError>;

    /// Short identifier for logs and diagnostics.
    fn name(&self) -> &str;
}

/// Stand-in used when no API key is configured; every call fails with
/// [`OracleError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableOracle;

impl PronunciationOracle for UnavailableOracle {
    fn infer(&self, _text: &str, _hint: &str) -> Result<OracleRecord, OracleError> {
        Err(OracleError::Unavailable)
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let record: OracleRecord = serde_json::from_str(r#"{"ipa": "/dʒɒn/"}"#).unwrap();
        assert_eq!(record.ipa, "/dʒɒn/");
        assert_eq!(record.macquarie, "");
        assert!(!record.tone_marks_added);
        assert!(record.romanization.is_none());
    }

    #[test]
    fn null_fields_take_defaults() {
        let record: OracleRecord =
            serde_json::from_str(r#"{"guidance": null, "tone_marks_added": null}"#).unwrap();
        assert_eq!(record.guidance, "");
        assert!(!record.tone_marks_added);
    }

    #[test]
    fn unavailable_oracle_always_fails() {
        let err = UnavailableOracle.infer("John", "English").unwrap_err();
        assert!(matches!(err, OracleError::Unavailable));
    }
}
