// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the manifest on disk and the JSONL file:
//
//   verilog_files.txt
//       │
//       ▼
//   manifest          → ordered list of input paths
//       │
//       ▼
//   TextFileLoader    → per file: raw lines (bad files logged, skipped)
//       │
//       ▼
//   WindowSampler     → sliding context/completion windows → Records
//       │
//       ▼
//   JsonlWriter       → one JSON object per line
//       │
//       ▼
//   verilog_autocomplete.jsonl
//
// Each module handles exactly one step and is tested on its own.

/// Reads the list of input paths
pub mod manifest;

/// Reads one input file into lines
pub mod loader;

/// Line splitting and whitespace stripping
pub mod text;

/// Sliding-window (prompt, completion) extraction
pub mod sampler;

/// JSONL serialisation of the finished dataset
pub mod writer;
