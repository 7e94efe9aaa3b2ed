// ============================================================
// Layer 2 — Preview Use Case
// ============================================================
// Samples a single file and returns its first few records,
// for checking window lengths on real input before running
// a full build. Nothing is written to disk.
//
// Unlike a build, a file that cannot be read is an error here:
// there is no batch to protect.

use anyhow::Result;
use std::path::PathBuf;

use crate::data::{loader::TextFileLoader, sampler::WindowSampler};
use crate::domain::{record::Record, traits::LineSource};

pub struct PreviewUseCase {
    file:    PathBuf,
    sampler: WindowSampler,
    limit:   usize,
}

impl PreviewUseCase {
    pub fn new(file: impl Into<PathBuf>, sampler: WindowSampler, limit: usize) -> Self {
        Self { file: file.into(), sampler, limit }
    }

    pub fn records(&self) -> Result<Vec<Record>> {
        self.records_from(&TextFileLoader::new())
    }

    pub fn records_from(&self, source: &dyn LineSource) -> Result<Vec<Record>> {
        let file = source.load(&self.file)?;

        let mut records = self.sampler.sample(&file.lines);
        tracing::info!(
            "'{}': {} lines, {} records",
            file.path.display(),
            file.line_count(),
            records.len()
        );

        records.truncate(self.limit);
        Ok(records)
    }
}
