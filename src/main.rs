// SPDX-License-Identifier: PMPL-1.0-or-later

//! namecall: script detection and pronunciation guidance for personal names
//!
//! Detects the script family of a name offline, then asks a language model for
//! IPA, an Australian English respelling and reader guidance. Without an API
//! key it still reports the script, confidence and naming convention.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use namecall::analyse::Analyser;
use namecall::config::Settings;
use namecall::report::{self, ReportFormatter, ReportOutputFormat};
use namecall::{batch, diagnostics, script};
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "namecall")]
#[command(version)]
#[command(about = "Pronunciation guidance for names read aloud at ceremonies")]
#[command(long_about = None)]
struct Cli {
    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the script family of a name (offline)
    Detect {
        /// Name to classify
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Show the naming convention recorded for a language label
    Info {
        /// Language label, e.g. Chinese
        #[arg(value_name = "LABEL")]
        label: String,
    },

    /// Full pronunciation analysis of one name
    Analyse {
        /// Name to analyse
        #[arg(value_name = "NAME")]
        name: String,

        /// Output format (defaults to the --output extension, then text)
        #[arg(short, long, value_enum)]
        format: Option<ReportOutputFormat>,

        /// Write the report to a file instead of the console
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the language model and use placeholder notation
        #[arg(long)]
        offline: bool,

        /// Settings file (YAML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Analyse a list of names, one per line
    Batch {
        /// Name list file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format (defaults to the --output extension, then text)
        #[arg(short, long, value_enum)]
        format: Option<ReportOutputFormat>,

        /// Write the report to a file instead of the console
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the language model and use placeholder notation
        #[arg(long)]
        offline: bool,

        /// Settings file (YAML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Check settings and oracle configuration
    Diagnostics {
        /// Settings file (YAML or JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "namecall=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_analyser(config: Option<&Path>, offline: bool) -> Result<Analyser> {
    let settings = Settings::load(config).context("loading settings")?;
    Ok(if offline {
        Analyser::offline(&settings)
    } else {
        Analyser::from_settings(&settings)
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let formatter = ReportFormatter::new();

    match cli.command {
        Commands::Detect { name } => {
            let detection = script::detect(&name);
            let info = script::get_language_info(detection.language);
            formatter.print_detection(&name, &detection, info);
        }

        Commands::Info { label } => {
            formatter.print_language_info(&label, script::get_language_info(&label));
        }

        Commands::Analyse {
            name,
            format,
            output,
            offline,
            config,
        } => {
            let analyser = build_analyser(config.as_deref(), offline)?;
            let analysis = analyser.analyse(&name).map_err(|err| {
                error!("rejected input {:?}: {}", name, err);
                err
            })?;

            let format = ReportOutputFormat::resolve(
                format,
                output.as_deref(),
                ReportOutputFormat::Text,
            );
            match (output, format) {
                (Some(path), format) => {
                    report::save_report(&analysis, format, path)?;
                }
                (None, ReportOutputFormat::Text) => formatter.print_analysis(&analysis),
                (None, format) => println!("{}", format.serialize(&analysis)?),
            }
        }

        Commands::Batch {
            file,
            format,
            output,
            offline,
            config,
        } => {
            let analyser = build_analyser(config.as_deref(), offline)?;
            info!(
                "analysing names from {} (oracle: {})",
                file.display(),
                analyser.oracle_name()
            );
            let batch_report = batch::run_file(&analyser, &file)?;

            let format = ReportOutputFormat::resolve(
                format,
                output.as_deref(),
                ReportOutputFormat::Text,
            );
            match (output, format) {
                (Some(path), format) => {
                    report::save_report(&batch_report, format, path)?;
                }
                (None, ReportOutputFormat::Text) => formatter.print_batch(&batch_report),
                (None, format) => println!("{}", format.serialize(&batch_report)?),
            }
        }

        Commands::Diagnostics { config } => {
            diagnostics::run_self_diagnostics(config.as_deref())?;
        }
    }

    Ok(())
}
