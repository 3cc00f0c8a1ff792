// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report formatting and output

use crate::script::{DetectionResult, LanguageInfo};
use crate::types::*;
use anyhow::Result;
use colored::*;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Uncoloured rendering used for `--format text` files.
pub trait PlainText {
    fn to_plain_text(&self) -> String;
}

impl PlainText for NameAnalysis {
    fn to_plain_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Name: {}", self.name);
        if !self.name_with_diacritics.is_empty() && self.name_with_diacritics != self.name {
            let _ = writeln!(out, "With diacritics: {}", self.name_with_diacritics);
        }
        let _ = writeln!(
            out,
            "Script: {} (confidence {:.2})",
            self.language, self.confidence
        );
        if let Some(inferred) = &self.inferred_language {
            let _ = writeln!(out, "Language of origin: {}", inferred);
        }
        let _ = writeln!(out, "IPA: {}", self.ipa);
        let _ = writeln!(out, "Say it: {}", self.macquarie);
        if !self.pronunciation_guidance.is_empty() {
            let _ = writeln!(out, "Guidance: {}", self.pronunciation_guidance);
        }
        if let Some(system) = &self.romanization {
            let _ = writeln!(out, "Romanisation: {}", system);
        }
        if self.tone_marks_added {
            let _ = writeln!(out, "Tone marks were added");
        }
        if let Some(note) = &self.ambiguity_note {
            let _ = writeln!(out, "Ambiguity: {}", note);
        }
        if let Some(note) = &self.cultural_note {
            let _ = writeln!(out, "Culture: {}", note);
        }
        let _ = writeln!(out, "Name order: {}", name_order(&self.language_info));
        let _ = writeln!(out, "Note: {}", self.language_info.note);
        out
    }
}

impl PlainText for BatchReport {
    fn to_plain_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Batch analysis ({})", self.created_at);
        let _ = writeln!(
            out,
            "{} names: {} from oracle, {} placeholder, {} rejected",
            self.total, self.from_oracle, self.from_fallback, self.rejected
        );
        for (language, count) in &self.languages {
            let _ = writeln!(out, "  {:<12} {}", language, count);
        }
        for entry in &self.entries {
            let _ = writeln!(out);
            match (&entry.analysis, &entry.error) {
                (Some(analysis), _) => out.push_str(&analysis.to_plain_text()),
                (None, Some(err)) => {
                    let _ = writeln!(out, "line {}: {:?} rejected: {}", entry.line, entry.input, err);
                }
                (None, None) => {}
            }
        }
        out
    }
}

fn name_order(info: &LanguageInfo) -> &'static str {
    if info.family_name_first {
        "family name first"
    } else {
        "given name first"
    }
}

pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_detection(&self, name: &str, detection: &DetectionResult, info: &LanguageInfo) {
        println!("{}", "SCRIPT DETECTION".bold().yellow());
        println!("  Name: {}", name);
        println!(
            "  Language: {} (confidence: {})",
            detection.language.bold(),
            confidence_text(detection.confidence)
        );
        if detection.is_unknown() {
            println!(
                "  {}",
                "No recognised script; the name may be written in digits or symbols only.".dimmed()
            );
            return;
        }
        println!("  Name order: {}", name_order(info));
        println!("  Note: {}", info.note.dimmed());
    }

    pub fn print_language_info(&self, language: &str, info: &LanguageInfo) {
        println!("{}", language.bold().yellow());
        println!("  Name order: {}", name_order(info));
        println!("  Note: {}", info.note);
    }

    pub fn print_analysis(&self, analysis: &NameAnalysis) {
        println!("\n{}", "=== NAME PRONUNCIATION ===".bold().cyan());
        println!();
        println!("  Name: {}", analysis.name.bold());
        if !analysis.name_with_diacritics.is_empty()
            && analysis.name_with_diacritics != analysis.name
        {
            println!("  With diacritics: {}", analysis.name_with_diacritics.bold());
        }
        println!(
            "  Script: {} (confidence: {})",
            analysis.language,
            confidence_text(analysis.confidence)
        );
        if let Some(inferred) = &analysis.inferred_language {
            println!("  Language of origin: {}", inferred.bold());
        }
        println!();

        println!("{}", "PRONUNCIATION".bold().yellow());
        let (ipa, macquarie) = match analysis.source {
            AnalysisSource::Oracle => (analysis.ipa.normal(), analysis.macquarie.green().bold()),
            AnalysisSource::Fallback => (analysis.ipa.dimmed(), analysis.macquarie.dimmed()),
        };
        println!("  IPA: {}", ipa);
        println!("  Say it: {}", macquarie);
        if !analysis.pronunciation_guidance.is_empty() {
            println!("  Guidance: {}", analysis.pronunciation_guidance);
        }
        if let Some(system) = &analysis.romanization {
            println!("  Romanisation: {}", system);
        }
        if analysis.tone_marks_added {
            println!("  {}", "Tone marks were added".dimmed());
        }
        if let Some(note) = &analysis.ambiguity_note {
            println!("  Ambiguity: {}", note.yellow());
        }
        println!();

        println!("{}", "NAMING CONVENTION".bold().yellow());
        println!("  Name order: {}", name_order(&analysis.language_info));
        println!("  Note: {}", analysis.language_info.note);
        if let Some(note) = &analysis.cultural_note {
            println!("  Culture: {}", note);
        }
        println!();
    }

    pub fn print_batch(&self, report: &BatchReport) {
        println!("\n{}", "=== BATCH ANALYSIS ===".bold().cyan());
        println!();
        println!("  Names: {}", report.total);
        println!("  From oracle: {}", report.from_oracle.to_string().green());
        println!(
            "  Placeholder notation: {}",
            report.from_fallback.to_string().yellow()
        );
        if report.rejected > 0 {
            println!("  Rejected: {}", report.rejected.to_string().red().bold());
        }
        println!();

        if !report.languages.is_empty() {
            println!("{}", "LANGUAGES".bold().yellow());
            for (language, count) in &report.languages {
                println!("  {:<12} {}", language, count);
            }
            println!();
        }

        for entry in &report.entries {
            match (&entry.analysis, &entry.error) {
                (Some(analysis), _) => println!(
                    "  {:>4}. {} [{}] {}",
                    entry.line,
                    analysis.name.bold(),
                    analysis.display_language(),
                    analysis.macquarie.dimmed()
                ),
                (None, Some(err)) => println!(
                    "  {:>4}. {} {}",
                    entry.line,
                    entry.input,
                    err.red()
                ),
                (None, None) => {}
            }
        }
    }

    pub fn save<P: AsRef<Path>>(&self, content: &str, path: P) -> Result<()> {
        fs::write(path.as_ref(), content)?;
        println!("Report saved to: {}", path.as_ref().display());
        Ok(())
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn confidence_text(confidence: f64) -> ColoredString {
    let text = format!("{:.2}", confidence);
    if confidence >= 0.8 {
        text.green()
    } else if confidence >= 0.5 {
        text.yellow()
    } else {
        text.red()
    }
}
