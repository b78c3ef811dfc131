//! Output document writing.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use serde::Serialize;

/// `<prefix>_YYYYMMDD_HHMMSS.json` in the working directory.
pub fn default_output_path<Tz>(prefix: &str, now: &DateTime<Tz>) -> PathBuf
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    PathBuf::from(format!("{prefix}_{}.json", now.format("%Y%m%d_%H%M%S")))
}

/// Renders a document as 2-space indented JSON.
pub fn render_json<T: Serialize>(document: &T) -> Result<String> {
    serde_json::to_string_pretty(document).context("serialize rules")
}

/// Writes a document in one piece. Nothing is written if serialization fails.
pub fn write_json<T: Serialize>(path: &Path, document: &T) -> Result<()> {
    let json = render_json(document)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("write {}", path.display()))
}
