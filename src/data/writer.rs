// ============================================================
// Layer 4 — JSONL Dataset Writer
// ============================================================
// Serialises records one JSON object per line.
//
// Two layouts are supported:
//
//   Python (default) — byte-compatible with datasets produced
//   by Python's json.dumps with default settings:
//     {"messages": [{"role": "user", "content": "..."}, ...]}
//     - ", " between items and ": " after keys
//     - ASCII-only: every non-ASCII char and DEL is written as
//       \uXXXX (lowercase hex), astral chars as surrogate pairs
//
//   Compact — serde_json's default output, no spaces, UTF-8.
//
// Both layouts parse back to identical Records.
//
// The output file is truncated on open and flushed once at
// the end. Any I/O failure is fatal for the run.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use crate::domain::{record::Record, traits::RecordSink};

/// Default output location
pub const DEFAULT_OUTPUT: &str = "verilog_autocomplete.jsonl";

/// Byte layout of each JSON line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    #[default]
    Python,
    Compact,
}

// ─── PythonFormatter ──────────────────────────────────────────────────────────
/// serde_json formatter reproducing json.dumps' default separators
/// and ASCII escaping.
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonFormatter;

impl Formatter for PythonFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    // Quotes, backslashes and control chars never reach this
    // method; serde_json routes them through write_char_escape.
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() && c != '\x7f' {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;

            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                writer.write_all(format!("\\u{unit:04x}").as_bytes())?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}

// ─── Line encoding ────────────────────────────────────────────────────────────
/// Serialise one record (no trailing newline) into `writer`
pub fn write_record<W: Write>(writer: &mut W, record: &Record, style: JsonStyle) -> Result<()> {
    match style {
        JsonStyle::Python => {
            let mut ser = Serializer::with_formatter(&mut *writer, PythonFormatter);
            record.serialize(&mut ser)?;
        }
        JsonStyle::Compact => serde_json::to_writer(&mut *writer, record)?,
    }
    Ok(())
}

/// Serialise every record, each followed by "\n"
pub fn write_records<W: Write>(writer: &mut W, records: &[Record], style: JsonStyle) -> Result<()> {
    for record in records {
        write_record(writer, record, style)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

// ─── JsonlWriter ──────────────────────────────────────────────────────────────
/// Writes the dataset to a single JSONL file, replacing any
/// previous content.
pub struct JsonlWriter {
    path:  PathBuf,
    style: JsonStyle,
}

impl JsonlWriter {
    pub fn new(path: impl Into<PathBuf>, style: JsonStyle) -> Self {
        Self { path: path.into(), style }
    }
}

impl RecordSink for JsonlWriter {
    fn write_all(&mut self, records: &[Record]) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Cannot create output '{}'", self.path.display()))?;
        let mut writer = BufWriter::new(file);

        write_records(&mut writer, records, self.style)
            .with_context(|| format!("Cannot write output '{}'", self.path.display()))?;
        writer
            .flush()
            .with_context(|| format!("Cannot flush output '{}'", self.path.display()))?;

        tracing::debug!(
            "Wrote {} records to '{}'",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}
