// ============================================================
// Layer 4 — Manifest Reader
// ============================================================
// The manifest is a plain text file with one input path per
// line. Each line is stripped of surrounding whitespace.
//
// There are no comments and blank lines are not filtered:
// an empty entry stays in the list and later fails to open,
// which the build loop reports like any other bad file.
//
// An unreadable manifest is fatal for the run.

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};

use crate::data::text::{split_lines_keep_ends, strip};

/// Default manifest location
pub const DEFAULT_MANIFEST: &str = "verilog_files.txt";

/// Parse manifest text into an ordered list of paths
pub fn parse_manifest(text: &str) -> Vec<PathBuf> {
    split_lines_keep_ends(text)
        .iter()
        .map(|line| PathBuf::from(strip(line)))
        .collect()
}

/// Read and parse the manifest at `path`
pub fn read_manifest(path: &Path) -> Result<Vec<PathBuf>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read manifest '{}'", path.display()))?;

    let entries = parse_manifest(&text);
    tracing::info!(
        "Manifest '{}' lists {} files",
        path.display(),
        entries.len()
    );
    Ok(entries)
}
