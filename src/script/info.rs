// SPDX-License-Identifier: PMPL-1.0-or-later

//! Naming-convention notes keyed by language label.
//!
//! Presentation metadata for ceremony readers, not linguistic ground truth.
//! Lookup is a linear scan over eight entries.

use serde::Serialize;

/// How a culture orders names, plus a short note for the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    pub family_name_first: bool,
    pub note: &'static str,
}

/// Returned for any label without its own entry.
pub const DEFAULT_LANGUAGE_INFO: LanguageInfo = LanguageInfo {
    family_name_first: false,
    note: "Name structure varies by culture.",
};

const LANGUAGE_INFO: &[(&str, LanguageInfo)] = &[
    (
        "Chinese",
        LanguageInfo {
            family_name_first: true,
            note: "Chinese names typically have family name first, followed by given name.",
        },
    ),
    (
        "Japanese",
        LanguageInfo {
            family_name_first: true,
            note: "Japanese names typically have family name first in traditional format.",
        },
    ),
    (
        "Korean",
        LanguageInfo {
            family_name_first: true,
            note: "Korean names have family name first, usually one syllable.",
        },
    ),
    (
        "Vietnamese",
        LanguageInfo {
            family_name_first: true,
            note: "Vietnamese names have family name first. Tones are important for pronunciation.",
        },
    ),
    (
        "Hindi",
        LanguageInfo {
            family_name_first: false,
            note: "Indian names vary by region. Given name typically comes first.",
        },
    ),
    (
        "Thai",
        LanguageInfo {
            family_name_first: false,
            note: "Thai names have given name first. Nicknames are commonly used.",
        },
    ),
    (
        "Arabic",
        LanguageInfo {
            family_name_first: false,
            note: "Arabic names often include patronymic (father's name) and family name.",
        },
    ),
    (
        "English",
        LanguageInfo {
            family_name_first: false,
            note: "Western names typically have given name first, family name last.",
        },
    ),
];

/// Look up the naming convention for an exact label.
///
/// Labels are case-sensitive; anything not in the table gets
/// [`DEFAULT_LANGUAGE_INFO`].
///
/// # Examples
/// ```
/// use namecall::script::{get_language_info, DEFAULT_LANGUAGE_INFO};
/// assert!(get_language_info("Chinese").family_name_first);
/// assert_eq!(*get_language_info("Klingon"), DEFAULT_LANGUAGE_INFO);
/// ```
pub fn get_language_info(language: &str) -> &'static LanguageInfo {
    LANGUAGE_INFO
        .iter()
        .find(|(label, _)| *label == language)
        .map(|(_, info)| info)
        .unwrap_or(&DEFAULT_LANGUAGE_INFO)
}
