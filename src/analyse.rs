// SPDX-License-Identifier: PMPL-1.0-or-later

//! Name analysis: validate, detect the script, ask the oracle, merge.
//!
//! The oracle is allowed to fail. When it does, the record carries fixed
//! placeholder notation and the detector's own label and confidence.

use crate::config::{Settings, API_KEY_ENV};
use crate::oracle::{
    ClaudeOracle, OracleError, OracleRecord, PronunciationOracle, UnavailableOracle,
};
use crate::script::{self, DetectionResult};
use crate::types::{AnalysisSource, NameAnalysis};
use rayon::prelude::*;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

pub const FALLBACK_IPA: &str = "[Add API key for accurate IPA]";
pub const FALLBACK_MACQUARIE: &str = "[Add API key for Macquarie notation]";
pub const FALLBACK_GUIDANCE: &str = "Set ANTHROPIC_API_KEY for accurate pronunciation analysis.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyseError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("name is {chars} characters long; the limit is {max}")]
    NameTooLong { chars: usize, max: usize },
}

pub struct Analyser {
    oracle: Arc<dyn PronunciationOracle>,
    max_name_chars: usize,
}

impl Analyser {
    pub fn new(oracle: Arc<dyn PronunciationOracle>, max_name_chars: usize) -> Self {
        Self {
            oracle,
            max_name_chars,
        }
    }

    /// Use the Claude oracle when an API key is configured, otherwise run
    /// with fallback notation only.
    pub fn from_settings(settings: &Settings) -> Self {
        let oracle: Arc<dyn PronunciationOracle> = match ClaudeOracle::new(&settings.oracle) {
            Ok(oracle) => Arc::new(oracle),
            Err(OracleError::Unavailable) => {
                info!(
                    "{} not set; pronunciation fields will use placeholder notation",
                    API_KEY_ENV
                );
                Arc::new(UnavailableOracle)
            }
            Err(err) => {
                warn!("could not initialise oracle ({}); using placeholder notation", err);
                Arc::new(UnavailableOracle)
            }
        };
        Self::new(oracle, settings.max_name_chars)
    }

    /// Detector and placeholder notation only; no network access.
    pub fn offline(settings: &Settings) -> Self {
        Self::new(Arc::new(UnavailableOracle), settings.max_name_chars)
    }

    pub fn oracle_name(&self) -> &str {
        self.oracle.name()
    }

    pub fn analyse(&self, raw: &str) -> Result<NameAnalysis, AnalyseError> {
        let name = self.validate(raw)?;
        let detection = script::detect(name);
        debug!(
            "detected {} ({:.2}) for {:?}",
            detection.language, detection.confidence, name
        );

        let (record, source) = match self.oracle.infer(name, detection.language) {
            Ok(record) => (record, AnalysisSource::Oracle),
            Err(OracleError::Unavailable) => (fallback_record(), AnalysisSource::Fallback),
            Err(err) => {
                warn!("oracle {} failed for {:?}: {}", self.oracle.name(), name, err);
                (fallback_record(), AnalysisSource::Fallback)
            }
        };

        Ok(merge(name, detection, record, source))
    }

    /// Analyse many names in parallel; results keep input order.
    pub fn analyse_all<S>(&self, names: &[S]) -> Vec<Result<NameAnalysis, AnalyseError>>
    where
        S: AsRef<str> + Sync,
    {
        names.par_iter().map(|name| self.analyse(name.as_ref())).collect()
    }

    fn validate<'a>(&self, raw: &'a str) -> Result<&'a str, AnalyseError> {
        let name = raw.trim();
        if name.is_empty() {
            return Err(AnalyseError::EmptyName);
        }
        let chars = name.chars().count();
        if chars > self.max_name_chars {
            return Err(AnalyseError::NameTooLong {
                chars,
                max: self.max_name_chars,
            });
        }
        Ok(name)
    }
}

fn fallback_record() -> OracleRecord {
    OracleRecord {
        ipa: FALLBACK_IPA.to_string(),
        macquarie: FALLBACK_MACQUARIE.to_string(),
        guidance: FALLBACK_GUIDANCE.to_string(),
        ..OracleRecord::default()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn merge(
    name: &str,
    detection: DetectionResult,
    record: OracleRecord,
    source: AnalysisSource,
) -> NameAnalysis {
    NameAnalysis {
        name: name.to_string(),
        language: detection.language.to_string(),
        confidence: detection.confidence,
        inferred_language: non_empty(Some(record.inferred_language)),
        name_with_diacritics: record.name_with_diacritics,
        ipa: record.ipa,
        macquarie: record.macquarie,
        pronunciation_guidance: record.guidance,
        romanization: non_empty(record.romanization),
        tone_marks_added: record.tone_marks_added,
        ambiguity_note: non_empty(record.ambiguity_note),
        cultural_note: non_empty(record.cultural_note),
        language_info: *script::get_language_info(detection.language),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingOracle {
        calls: Mutex<Vec<(String, String)>>,
        reply: OracleRecord,
    }

    impl PronunciationOracle for RecordingOracle {
        fn infer(&self, text: &str, hint: &str) -> Result<OracleRecord, OracleError> {
            self.calls
                .lock()
                .unwrap()
                .push((text.to_string(), hint.to_string()));
            Ok(self.reply.clone())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    struct BrokenOracle;

    impl PronunciationOracle for BrokenOracle {
        fn infer(&self, _text: &str, _hint: &str) -> Result<OracleRecord, OracleError> {
            Err(OracleError::Malformed("not json".to_string()))
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    fn offline() -> Analyser {
        Analyser::offline(&Settings::default())
    }

    #[test]
    fn empty_and_blank_names_are_rejected() {
        assert_eq!(offline().analyse("").unwrap_err(), AnalyseError::EmptyName);
        assert_eq!(offline().analyse("  \t").unwrap_err(), AnalyseError::EmptyName);
    }

    #[test]
    fn overlong_names_are_rejected() {
        let analyser = Analyser::new(Arc::new(UnavailableOracle), 3);
        assert_eq!(
            analyser.analyse("张伟张伟").unwrap_err(),
            AnalyseError::NameTooLong { chars: 4, max: 3 }
        );
        assert!(analyser.analyse("张伟").is_ok());
    }

    #[test]
    fn oracle_receives_trimmed_name_and_hint() {
        let oracle = Arc::new(RecordingOracle {
            calls: Mutex::new(Vec::new()),
            reply: OracleRecord {
                inferred_language: "Chinese".to_string(),
                ipa: "/ʈʂɑŋ weɪ/".to_string(),
                ..OracleRecord::default()
            },
        });
        let analyser = Analyser::new(oracle.clone(), 200);

        let analysis = analyser.analyse("  Zhang Wei ").unwrap();
        assert_eq!(
            *oracle.calls.lock().unwrap(),
            vec![("Zhang Wei".to_string(), "English".to_string())]
        );
        assert_eq!(analysis.name, "Zhang Wei");
        assert_eq!(analysis.language, "English");
        assert_eq!(analysis.display_language(), "Chinese");
        assert_eq!(analysis.source, AnalysisSource::Oracle);
        // Naming notes follow the detector label, not the oracle's guess.
        assert!(!analysis.language_info.family_name_first);
    }

    #[test]
    fn oracle_failure_falls_back_with_detector_result() {
        let analyser = Analyser::new(Arc::new(BrokenOracle), 200);
        let analysis = analyser.analyse("张伟").unwrap();
        assert_eq!(analysis.source, AnalysisSource::Fallback);
        assert_eq!(analysis.language, "Chinese");
        assert_eq!(analysis.confidence, 1.0);
        assert_eq!(analysis.ipa, FALLBACK_IPA);
        assert_eq!(analysis.macquarie, FALLBACK_MACQUARIE);
        assert_eq!(analysis.pronunciation_guidance, FALLBACK_GUIDANCE);
        assert!(analysis.inferred_language.is_none());
        assert!(analysis.language_info.family_name_first);
    }

    #[test]
    fn blank_optional_fields_are_dropped() {
        let oracle = Arc::new(RecordingOracle {
            calls: Mutex::new(Vec::new()),
            reply: OracleRecord {
                romanization: Some("  ".to_string()),
                cultural_note: Some("Common surname.".to_string()),
                ..OracleRecord::default()
            },
        });
        let analysis = Analyser::new(oracle, 200).analyse("Li").unwrap();
        assert!(analysis.romanization.is_none());
        assert_eq!(analysis.cultural_note.as_deref(), Some("Common surname."));
    }

    #[test]
    fn batch_keeps_input_order() {
        let names = ["张伟", "", "John Smith", "こんにちは"];
        let results = offline().analyse_all(&names);
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().unwrap().language, "Chinese");
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().language, "English");
        assert_eq!(results[3].as_ref().unwrap().language, "Japanese");
    }
}
