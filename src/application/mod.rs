// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data layer to accomplish one goal per use
// case. No printing here (that's Layer 1) and no text or
// serialisation rules (that's Layer 4).

// Manifest → JSONL dataset
pub mod build_use_case;

// One file → first few records
pub mod preview_use_case;
