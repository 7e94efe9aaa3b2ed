// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain structs and traits that define what the system works
// with. No file I/O and no serialisation policy here; the
// data layer supplies those.

// One (prompt, completion) example and its chat messages
pub mod record;

// An input file split into lines
pub mod source_file;

// Core abstractions (traits) that the data layer implements
pub mod traits;
