// SPDX-License-Identifier: PMPL-1.0-or-later

//! Self-check for the `diagnostics` subcommand.

use crate::config::{Settings, API_KEY_ENV};
use crate::script;
use anyhow::{anyhow, Result};
use colored::*;
use std::path::Path;

pub fn run_self_diagnostics(config_path: Option<&Path>) -> Result<()> {
    println!("namecall self-diagnostics");

    let mut checks = vec![Diagnostic::ok(
        "version",
        format!("namecall {}", env!("CARGO_PKG_VERSION")),
    )];

    let settings = match Settings::load(config_path) {
        Ok(settings) => {
            let source = config_path
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "defaults + environment".to_string());
            checks.push(Diagnostic::ok("settings", format!("loaded from {}", source)));
            Some(settings)
        }
        Err(err) => {
            checks.push(Diagnostic::error("settings", format!("{:#}", err)));
            None
        }
    };

    checks.push(check_detector());

    if let Some(settings) = &settings {
        checks.extend(check_oracle(settings));
    }

    println!();
    for entry in &checks {
        entry.print();
    }

    if checks.iter().any(|entry| entry.level == Level::Error) {
        Err(anyhow!("self-diagnostics reported issues"))
    } else {
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Level {
    Ok,
    Warn,
    Error,
}

impl Level {
    fn tag(&self) -> ColoredString {
        match self {
            Level::Ok => "OK".green(),
            Level::Warn => "WARN".yellow(),
            Level::Error => "ERR".red().bold(),
        }
    }
}

#[derive(Debug)]
struct Diagnostic {
    label: &'static str,
    level: Level,
    detail: String,
}

impl Diagnostic {
    fn new(label: &'static str, level: Level, detail: String) -> Self {
        Self {
            label,
            level,
            detail,
        }
    }

    fn ok(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Ok, detail)
    }

    fn warning(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Warn, detail)
    }

    fn error(label: &'static str, detail: String) -> Self {
        Self::new(label, Level::Error, detail)
    }

    fn print(&self) {
        println!("  [{}] {:16} {}", self.level.tag(), self.label, self.detail);
    }
}

/// Run the detector over a few known names.
fn check_detector() -> Diagnostic {
    let samples = [("张伟", "Chinese"), ("John Smith", "English"), ("नमस्ते", "Hindi")];
    let failed: Vec<&str> = samples
        .iter()
        .filter(|(name, expected)| script::detect(name).language != *expected)
        .map(|(name, _)| *name)
        .collect();
    if failed.is_empty() {
        Diagnostic::ok("script detector", format!("{} samples classified", samples.len()))
    } else {
        Diagnostic::error("script detector", format!("misclassified: {}", failed.join(", ")))
    }
}

fn check_oracle(settings: &Settings) -> Vec<Diagnostic> {
    let oracle = &settings.oracle;
    let mut checks = Vec::new();

    checks.push(match oracle.usable_api_key() {
        Some(_) => Diagnostic::ok("API key", format!("configured ({})", API_KEY_ENV)),
        None => Diagnostic::warning(
            "API key",
            format!("not configured (set {} for real pronunciations)", API_KEY_ENV),
        ),
    });

    checks.push(
        if oracle.api_url.starts_with("https://") {
            Diagnostic::ok("API URL", oracle.api_url.clone())
        } else if oracle.api_url.starts_with("http://") {
            Diagnostic::warning("API URL", format!("{} (not encrypted)", oracle.api_url))
        } else {
            Diagnostic::error("API URL", format!("{} is not an http(s) URL", oracle.api_url))
        },
    );

    checks.push(if oracle.model.trim().is_empty() {
        Diagnostic::error("model", "no model configured".to_string())
    } else {
        Diagnostic::ok("model", oracle.model.clone())
    });

    checks.push(if oracle.timeout_secs == 0 {
        Diagnostic::error("timeout", "timeout_secs must be greater than zero".to_string())
    } else {
        Diagnostic::ok(
            "timeout",
            format!("{}s, {} retries", oracle.timeout_secs, oracle.max_retries),
        )
    });

    checks
}
