// SPDX-License-Identifier: PMPL-1.0-or-later

//! Batch analysis of a name list
//!
//! Reads one name per line (blank lines and `#` comments are skipped),
//! analyses every name, and produces a summary with per-language tallies.

use crate::analyse::Analyser;
use crate::types::{AnalysisSource, BatchEntry, BatchReport};
use anyhow::{Context, Result};
use chrono::Utc;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Names from a list file, with their 1-based line numbers.
pub fn parse_names(content: &str) -> Vec<(usize, String)> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Some((idx + 1, trimmed.to_string()))
            }
        })
        .collect()
}

pub fn run_file(analyser: &Analyser, path: &Path) -> Result<BatchReport> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading name list {}", path.display()))?;
    Ok(run(analyser, &parse_names(&content)))
}

pub fn run(analyser: &Analyser, names: &[(usize, String)]) -> BatchReport {
    let inputs: Vec<&str> = names.iter().map(|(_, name)| name.as_str()).collect();
    let results = analyser.analyse_all(&inputs);

    let mut from_oracle = 0;
    let mut from_fallback = 0;
    let mut rejected = 0;
    let mut languages: BTreeMap<String, usize> = BTreeMap::new();

    let entries: Vec<BatchEntry> = names
        .iter()
        .zip(results)
        .map(|((line, input), result)| match result {
            Ok(analysis) => {
                match analysis.source {
                    AnalysisSource::Oracle => from_oracle += 1,
                    AnalysisSource::Fallback => from_fallback += 1,
                }
                *languages
                    .entry(analysis.display_language().to_string())
                    .or_insert(0) += 1;
                BatchEntry {
                    line: *line,
                    input: input.clone(),
                    analysis: Some(analysis),
                    error: None,
                }
            }
            Err(err) => {
                rejected += 1;
                BatchEntry {
                    line: *line,
                    input: input.clone(),
                    analysis: None,
                    error: Some(err.to_string()),
                }
            }
        })
        .collect();

    BatchReport {
        created_at: Utc::now().to_rfc3339(),
        total: entries.len(),
        from_oracle,
        from_fallback,
        rejected,
        languages,
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let names = parse_names("# graduates\n张伟\n\n  John Smith  \n#skip\nNguyễn Văn An\n");
        assert_eq!(
            names,
            vec![
                (2, "张伟".to_string()),
                (4, "John Smith".to_string()),
                (6, "Nguyễn Văn An".to_string()),
            ]
        );
    }
}
