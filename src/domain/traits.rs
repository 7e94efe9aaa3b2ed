// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The build pipeline talks to its I/O through these two traits:
//
//   LineSource  — turns one manifest entry into a SourceFile
//   RecordSink  — receives the finished dataset
//
// TextFileLoader and JsonlWriter are the disk-backed
// implementations; tests swap in in-memory ones.

use anyhow::Result;
use std::path::Path;

use crate::domain::{record::Record, source_file::SourceFile};
use crate::error::IngestError;

// ─── LineSource ───────────────────────────────────────────────────────────────
/// Anything that can produce the lines of one input file.
///
/// Failures are per-file (`IngestError`) so the caller can
/// log them and continue with the next entry.
pub trait LineSource {
    fn load(&self, path: &Path) -> std::result::Result<SourceFile, IngestError>;
}

// ─── RecordSink ───────────────────────────────────────────────────────────────
/// Anything that can persist a finished dataset.
///
/// Called once per build with every record in output order.
/// A failure here is fatal for the run.
pub trait RecordSink {
    fn write_all(&mut self, records: &[Record]) -> Result<()>;
}
