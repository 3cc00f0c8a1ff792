// SPDX-License-Identifier: PMPL-1.0-or-later

//! Script-family detection for personal names.
//!
//! Classifies a name by the Unicode blocks its characters fall in, with a
//! separate diacritic signal for Vietnamese (which is written in Latin
//! script) and a plain-Latin fallback to "English".
//!
//! ## Families
//!
//! | Label      | Blocks                                   |
//! |------------|------------------------------------------|
//! | Chinese    | CJK Unified Ideographs, Ext. A, Ext. B   |
//! | Japanese   | Hiragana, Katakana                       |
//! | Korean     | Hangul Syllables, Hangul Jamo            |
//! | Arabic     | Arabic, Arabic Supplement                |
//! | Hindi      | Devanagari                               |
//! | Thai       | Thai                                     |
//! | Cyrillic   | Cyrillic                                 |
//! | Greek      | Greek and Coptic                         |
//! | Vietnamese | Latin vowels with Vietnamese diacritics  |
//! | English    | ASCII letters, spaces, `-`, `'`, `.`     |
//!
//! All tables are compile-time constants. The detector holds no state and
//! can be shared freely across threads.

mod detector;
mod info;
mod ranges;

pub use detector::{detect, DetectionResult, ScriptDetector, UNKNOWN};
pub use info::{get_language_info, LanguageInfo, DEFAULT_LANGUAGE_INFO};
pub use ranges::{is_vietnamese_diacritic, ScriptRange, SCRIPT_TABLE};
