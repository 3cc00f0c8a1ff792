// SPDX-License-Identifier: PMPL-1.0-or-later

//! Character-level script classification.

use super::info::{get_language_info, LanguageInfo};
use super::ranges::{is_vietnamese_diacritic, script_family_of};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Label returned when nothing in the input is recognisable.
pub const UNKNOWN: &str = "Unknown";

const VIETNAMESE: &str = "Vietnamese";
const ENGLISH: &str = "English";

/// Confidence reported when only Vietnamese diacritics were seen.
const VIETNAMESE_DIACRITIC_CONFIDENCE: f64 = 0.85;
/// Confidence reported for plain Latin names.
const PLAIN_LATIN_CONFIDENCE: f64 = 0.80;

/// Letters, whitespace (including the ASCII information separators
/// U+001C..U+001F), hyphen, apostrophe and period.
static PLAIN_LATIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z\s\x1C-\x1F\-'.]+$").expect("plain latin pattern is a valid regex")
});

/// Outcome of a single detection: a language label and the share of the
/// input that supported it.
///
/// The confidence is a display heuristic, not a calibrated probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetectionResult {
    pub language: &'static str,
    pub confidence: f64,
}

impl DetectionResult {
    pub fn new(language: &'static str, confidence: f64) -> Self {
        Self {
            language,
            confidence,
        }
    }

    pub fn unknown() -> Self {
        Self::new(UNKNOWN, 0.0)
    }

    pub fn is_unknown(&self) -> bool {
        self.language == UNKNOWN
    }
}

/// Stateless front end over the static script tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptDetector;

impl ScriptDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn detect(&self, name: &str) -> DetectionResult {
        detect(name)
    }

    pub fn get_language_info(&self, language: &str) -> &'static LanguageInfo {
        get_language_info(language)
    }
}

/// Classify `name` by script family.
///
/// Every character is credited to at most one family from the range table
/// and, independently, to Vietnamese when it carries a Vietnamese diacritic.
/// The family with the highest count wins; on a tie the family that was seen
/// first in the input wins. Confidence is the winning count divided by the
/// number of characters in `name`, capped at 1.0.
///
/// # Examples
/// ```
/// use namecall::script::detect;
/// assert_eq!(detect("张伟").language, "Chinese");
/// assert_eq!(detect("John Smith").confidence, 0.80);
/// assert_eq!(detect("").language, "Unknown");
/// ```
pub fn detect(name: &str) -> DetectionResult {
    if name.is_empty() {
        return DetectionResult::unknown();
    }

    // Counters in first-seen order; the tie-break depends on it.
    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    let mut length = 0usize;

    for c in name.chars() {
        length += 1;
        if let Some(family) = script_family_of(c) {
            bump(&mut counts, family);
        }
        if is_vietnamese_diacritic(c) {
            bump(&mut counts, VIETNAMESE);
        }
    }

    let mut winner: Option<(&'static str, usize)> = None;
    for &(family, count) in &counts {
        if winner.map_or(true, |(_, best)| count > best) {
            winner = Some((family, count));
        }
    }

    let Some((family, count)) = winner else {
        return classify_unscripted(name);
    };

    let confidence = (count as f64 / length as f64).min(1.0);
    let language = if family == "Devanagari" { "Hindi" } else { family };
    DetectionResult::new(language, confidence)
}

fn bump(counts: &mut Vec<(&'static str, usize)>, family: &'static str) {
    match counts.iter_mut().find(|(label, _)| *label == family) {
        Some((_, count)) => *count += 1,
        None => counts.push((family, 1)),
    }
}

/// Fallback when no character matched any family or diacritic.
fn classify_unscripted(name: &str) -> DetectionResult {
    if name.chars().any(is_vietnamese_diacritic) {
        return DetectionResult::new(VIETNAMESE, VIETNAMESE_DIACRITIC_CONFIDENCE);
    }
    if PLAIN_LATIN.is_match(name) {
        return DetectionResult::new(ENGLISH, PLAIN_LATIN_CONFIDENCE);
    }
    DetectionResult::unknown()
}
