// ============================================================
// Layer 6 — Build Metrics
// ============================================================
// Per-file accounting for a dataset build, plus an optional
// CSV log with one row per manifest entry.
//
// Columns:
//   path:    manifest entry as written
//   status:  "ok" or "failed"
//   lines:   lines read (0 when failed)
//   windows: window positions visited
//   records: records emitted (windows minus empty-text skips)
//
// Example CSV output:
//   path,status,lines,windows,records
//   rtl/alu.v,ok,132,107,104
//   rtl/missing.v,failed,0,0,0

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Ok,
    Failed,
}

impl FileStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok     => "ok",
            Self::Failed => "failed",
        }
    }
}

/// Outcome of processing one manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMetrics {
    pub path:    PathBuf,
    pub status:  FileStatus,
    pub lines:   usize,
    pub windows: usize,
    pub records: usize,
}

impl FileMetrics {
    pub fn ok(path: impl Into<PathBuf>, lines: usize, windows: usize, records: usize) -> Self {
        Self { path: path.into(), status: FileStatus::Ok, lines, windows, records }
    }

    pub fn failed(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), status: FileStatus::Failed, lines: 0, windows: 0, records: 0 }
    }

    /// Windows dropped because prompt or completion was blank
    pub fn skipped(&self) -> usize {
        self.windows - self.records
    }
}

/// Totals across a whole build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub files_read:      usize,
    pub files_failed:    usize,
    pub records:         usize,
    pub windows_skipped: usize,
}

impl BuildSummary {
    pub fn from_files(files: &[FileMetrics]) -> Self {
        files.iter().fold(Self::default(), |mut s, f| {
            match f.status {
                FileStatus::Ok     => s.files_read += 1,
                FileStatus::Failed => s.files_failed += 1,
            }
            s.records         += f.records;
            s.windows_skipped += f.skipped();
            s
        })
    }
}

/// Writes per-file metrics to a CSV file.
/// The file is replaced at the start of every build.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create the CSV (truncating any previous run) and write the header
    pub fn create(csv_path: impl Into<PathBuf>) -> Result<Self> {
        let csv_path = csv_path.into();

        if let Some(dir) = csv_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create directory '{}'", dir.display()))?;
        }

        let mut f = fs::File::create(&csv_path)
            .with_context(|| format!("Cannot create metrics CSV '{}'", csv_path.display()))?;
        writeln!(f, "path,status,lines,windows,records")?;
        tracing::debug!("Created metrics CSV: '{}'", csv_path.display());

        Ok(Self { csv_path })
    }

    /// Append one row per file
    pub fn log_all(&self, files: &[FileMetrics]) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)
            .with_context(|| format!("Cannot open metrics CSV '{}'", self.csv_path.display()))?;

        for m in files {
            writeln!(
                f,
                "{},{},{},{},{}",
                csv_field(&m.path.display().to_string()),
                m.status.as_str(),
                m.lines,
                m.windows,
                m.records,
            )?;
        }
        Ok(())
    }
}

/// Quote a CSV field when it contains a delimiter, quote or newline
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_summary_totals() {
        let files = vec![
            FileMetrics::ok("a.v", 30, 5, 5),
            FileMetrics::failed("b.v"),
            FileMetrics::ok("c.v", 40, 15, 12),
        ];
        let s = BuildSummary::from_files(&files);
        assert_eq!(
            s,
            BuildSummary { files_read: 2, files_failed: 1, records: 17, windows_skipped: 3 }
        );
    }

    #[test]
    fn test_csv_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reports").join("build.csv");
        let log  = MetricsLogger::create(&path).unwrap();
        log.log_all(&[
            FileMetrics::ok("rtl/alu.v", 132, 107, 104),
            FileMetrics::failed("odd,name.v"),
        ])
        .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "path,status,lines,windows,records\n\
             rtl/alu.v,ok,132,107,104\n\
             \"odd,name.v\",failed,0,0,0\n"
        );
    }

    #[test]
    fn test_create_truncates_previous_run() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("m.csv");
        fs::write(&path, "old,row\n").unwrap();

        MetricsLogger::create(&path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "path,status,lines,windows,records\n");
    }
}
