// ============================================================
// Layer 2 — BuildUseCase
// ============================================================
// Runs the full dataset build in order:
//
//   Step 1: Read the manifest         (fatal if unreadable)
//   Step 2: For each listed file, in manifest order:
//             load lines              (failure → warn, skip file)
//             sample windows          (blank windows skipped silently)
//   Step 3: Write every record once   (fatal if unwritable)
//   Step 4: Optional per-file CSV report
//
// Single-threaded and sequential: records appear in file order,
// then window order.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::data::{
    loader::TextFileLoader,
    manifest::{read_manifest, DEFAULT_MANIFEST},
    sampler::{WindowSampler, DEFAULT_COMPLETION_LINES, DEFAULT_CONTEXT_LINES},
    writer::{JsonStyle, JsonlWriter, DEFAULT_OUTPUT},
};
use crate::domain::{
    record::Record,
    traits::{LineSource, RecordSink},
};
use crate::infra::metrics::{BuildSummary, FileMetrics, MetricsLogger};

// ─── Build Configuration ─────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub manifest:         PathBuf,
    pub output:           PathBuf,
    pub context_lines:    usize,
    pub completion_lines: usize,
    pub json_style:       JsonStyle,
    pub metrics_csv:      Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            manifest:         PathBuf::from(DEFAULT_MANIFEST),
            output:           PathBuf::from(DEFAULT_OUTPUT),
            context_lines:    DEFAULT_CONTEXT_LINES,
            completion_lines: DEFAULT_COMPLETION_LINES,
            json_style:       JsonStyle::default(),
            metrics_csv:      None,
        }
    }
}

// ─── BuildUseCase ─────────────────────────────────────────────────────────────
pub struct BuildUseCase {
    config: BuildConfig,
}

impl BuildUseCase {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build from disk to disk
    pub fn execute(&self) -> Result<BuildSummary> {
        let loader     = TextFileLoader::new();
        let mut writer = JsonlWriter::new(&self.config.output, self.config.json_style);
        self.run(&loader, &mut writer)
    }

    /// Build with any line source and record sink
    pub fn run(&self, source: &dyn LineSource, sink: &mut dyn RecordSink) -> Result<BuildSummary> {
        let cfg = &self.config;

        // ── Step 1: Manifest ─────────────────────────────────────────────────
        let paths = read_manifest(&cfg.manifest)?;

        // ── Step 2: Sample every file ────────────────────────────────────────
        let sampler = WindowSampler::new(cfg.context_lines, cfg.completion_lines);
        tracing::info!(
            "Sampling {} context / {} completion lines per window",
            sampler.context_lines(),
            sampler.completion_lines()
        );
        let (records, files) = collect_records(&paths, source, &sampler);

        // ── Step 3: Write the dataset ────────────────────────────────────────
        sink.write_all(&records)?;

        // ── Step 4: Report ───────────────────────────────────────────────────
        if let Some(csv) = &cfg.metrics_csv {
            MetricsLogger::create(csv)?.log_all(&files)?;
        }

        let summary = BuildSummary::from_files(&files);
        tracing::info!(
            "Built {} records from {} files ({} failed, {} blank windows skipped)",
            summary.records,
            summary.files_read,
            summary.files_failed,
            summary.windows_skipped,
        );
        Ok(summary)
    }
}

/// Sample every listed file in order.
///
/// A file that fails to load is logged and contributes no
/// records; it never stops the remaining files.
pub fn collect_records(
    paths:   &[PathBuf],
    source:  &dyn LineSource,
    sampler: &WindowSampler,
) -> (Vec<Record>, Vec<FileMetrics>) {
    let mut records = Vec::new();
    let mut files   = Vec::with_capacity(paths.len());

    for path in paths {
        match sample_file(path, source, sampler) {
            Ok((file_records, metrics)) => {
                tracing::debug!(
                    "Sampled '{}': {} lines → {} records",
                    path.display(),
                    metrics.lines,
                    metrics.records
                );
                records.extend(file_records);
                files.push(metrics);
            }
            Err(e) => {
                tracing::warn!("Skipping file: {e}");
                files.push(FileMetrics::failed(path));
            }
        }
    }

    (records, files)
}

fn sample_file(
    path:    &Path,
    source:  &dyn LineSource,
    sampler: &WindowSampler,
) -> Result<(Vec<Record>, FileMetrics), crate::error::IngestError> {
    let file    = source.load(path)?;
    let records = sampler.sample(&file.lines);
    let metrics = FileMetrics::ok(
        path,
        file.line_count(),
        sampler.window_count(file.line_count()),
        records.len(),
    );
    Ok((records, metrics))
}
