// ============================================================
// Layer 3 — SourceFile Domain Type
// ============================================================
// One input file after it has been read and split into lines.
// Every line keeps its own terminator ("\n"), except possibly
// the last one, so concatenating a run of lines reproduces the
// original text of that run.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Manifest entry this file was loaded from
    pub path: PathBuf,

    /// Raw lines, terminators included
    pub lines: Vec<String>,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
