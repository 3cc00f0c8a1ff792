// SPDX-License-Identifier: PMPL-1.0-or-later

//! Records produced by name analysis.

use crate::script::LanguageInfo;
use serde::Serialize;
use std::collections::BTreeMap;

/// Where the pronunciation fields of a [`NameAnalysis`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    Oracle,
    Fallback,
}

/// Everything a ceremony reader needs for one name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameAnalysis {
    pub name: String,
    /// Detector label.
    pub language: String,
    pub confidence: f64,
    /// Oracle's language of origin, when it offered one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inferred_language: Option<String>,
    pub name_with_diacritics: String,
    pub ipa: String,
    pub macquarie: String,
    pub pronunciation_guidance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub romanization: Option<String>,
    pub tone_marks_added: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambiguity_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_note: Option<String>,
    pub language_info: LanguageInfo,
    pub source: AnalysisSource,
}

impl NameAnalysis {
    /// The oracle's language when present, otherwise the detector's.
    pub fn display_language(&self) -> &str {
        self.inferred_language.as_deref().unwrap_or(&self.language)
    }
}

/// One line of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub line: usize,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<NameAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    pub created_at: String,
    pub total: usize,
    pub from_oracle: usize,
    pub from_fallback: usize,
    pub rejected: usize,
    /// Count of analysed names per display language.
    pub languages: BTreeMap<String, usize>,
    pub entries: Vec<BatchEntry>,
}
