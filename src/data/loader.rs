// ============================================================
// Layer 4 — Source File Loader
// ============================================================
// Reads one manifest entry from disk into a SourceFile.
//
// Steps:
//   1. Read the raw bytes       → IngestError::Read on failure
//   2. Decode as strict UTF-8   → IngestError::Decode on failure
//   3. Split into lines, keeping terminators
//
// The whole file is materialised before splitting, so a file
// that fails anywhere contributes nothing: there is no
// partially-read SourceFile.

use std::{fs, path::Path};

use crate::data::text::split_lines_keep_ends;
use crate::domain::{source_file::SourceFile, traits::LineSource};
use crate::error::IngestError;

/// Loads plain UTF-8 text files from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFileLoader;

impl TextFileLoader {
    pub fn new() -> Self {
        Self
    }
}

impl LineSource for TextFileLoader {
    fn load(&self, path: &Path) -> Result<SourceFile, IngestError> {
        let bytes = fs::read(path).map_err(|e| IngestError::read(path, e))?;
        let text  = String::from_utf8(bytes).map_err(|e| IngestError::decode(path, e))?;

        let lines = split_lines_keep_ends(&text);
        tracing::trace!("Read '{}' ({} lines)", path.display(), lines.len());

        Ok(SourceFile::new(path, lines))
    }
}
