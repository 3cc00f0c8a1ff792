// SPDX-License-Identifier: PMPL-1.0-or-later

//! Report generation module

pub mod formatter;
pub mod output;

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub use formatter::{PlainText, ReportFormatter};
pub use output::ReportOutputFormat;

/// Serialize `report` in `format` and write it to `path`.
///
/// A path without an extension gets the one matching `format`. Returns the
/// path actually written.
pub fn save_report<T, P>(report: &T, format: ReportOutputFormat, path: P) -> Result<PathBuf>
where
    T: Serialize + PlainText,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let target = if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    };
    let content = format.serialize(report)?;
    ReportFormatter::new().save(&content, &target)?;
    Ok(target)
}
