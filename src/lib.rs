// SPDX-License-Identifier: PMPL-1.0-or-later

//! namecall: pronunciation guidance for names read aloud at ceremonies.
//!
//! Two stages:
//! 1. **Script detection**: a deterministic, offline classifier that guesses
//!    the script family of a name from its Unicode code points and supplies
//!    naming-convention notes.
//! 2. **Pronunciation oracle**: an external language model that infers the
//!    language of origin, restores diacritics, and produces IPA plus an
//!    Australian English respelling. It sits behind a trait and may be
//!    absent, in which case placeholder notation is used.

pub mod analyse;
pub mod batch;
pub mod config;
pub mod diagnostics;
pub mod oracle;
pub mod report;
pub mod script;
pub mod types;

pub use analyse::{AnalyseError, Analyser};
pub use script::{detect, get_language_info, DetectionResult, LanguageInfo, ScriptDetector};
