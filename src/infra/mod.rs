// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting concerns that sit beside the data pipeline:
//
//   metrics.rs — per-file build accounting
//                (lines read, windows visited, records emitted)
//                and an optional CSV report of it.

/// Build metrics and CSV report
pub mod metrics;
