// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for printed/exported reports

use crate::report::formatter::PlainText;
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use serde_json;
use serde_yaml;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    Text,
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(ReportOutputFormat::Text),
            "json" => Some(ReportOutputFormat::Json),
            "yaml" | "yml" => Some(ReportOutputFormat::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportOutputFormat::Text => "txt",
            ReportOutputFormat::Json => "json",
            ReportOutputFormat::Yaml => "yaml",
        }
    }

    /// Format implied by a file name's extension, if any.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::parse)
    }

    /// An explicit `--format` wins; otherwise the output file's extension
    /// decides, then `fallback`.
    pub fn resolve(explicit: Option<Self>, output: Option<&Path>, fallback: Self) -> Self {
        explicit
            .or_else(|| output.and_then(Self::from_path))
            .unwrap_or(fallback)
    }

    pub fn serialize<T>(&self, report: &T) -> Result<String>
    where
        T: Serialize + PlainText,
    {
        match self {
            ReportOutputFormat::Text => Ok(report.to_plain_text()),
            ReportOutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            ReportOutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        }
    }
}
