// ============================================================
// Layer 4 — Window Sampler
// ============================================================
// Slides a fixed-size window over a file's lines, one line at
// a time, and turns each position into a Record:
//
//   lines:    0 1 2 ... C-1 | C ... C+K-1 | ...
//             └─ context ──┘ └ completion ┘
//
// Example with C=2, K=1 over 5 lines (a b c d e):
//   i=0: context "a b" → completion "c"
//   i=1: context "b c" → completion "d"
//   (stops here: the loop covers N - C - K = 2 positions)
//
// The number of positions is N - C - K, saturating at zero.
// The last position that would still fit, i = N - C - K, is
// NOT sampled. Existing reference datasets were built with
// this bound, so it stays.
//
// A position is skipped silently when either side is empty
// after stripping (e.g. a window of blank lines).

use crate::data::text::strip;
use crate::domain::record::Record;

/// Default number of context (prompt) lines per window
pub const DEFAULT_CONTEXT_LINES: usize = 20;

/// Default number of completion lines per window
pub const DEFAULT_COMPLETION_LINES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSampler {
    /// C — lines fed to the model as the prompt
    context_lines: usize,
    /// K — lines the model should produce
    completion_lines: usize,
}

impl WindowSampler {
    /// Create a new sampler.
    ///
    /// # Panics
    /// Panics if either length is zero; the CLI rejects zero
    /// before it gets here.
    pub fn new(context_lines: usize, completion_lines: usize) -> Self {
        assert!(context_lines > 0, "context_lines must be at least 1");
        assert!(completion_lines > 0, "completion_lines must be at least 1");
        Self { context_lines, completion_lines }
    }

    pub fn context_lines(&self) -> usize {
        self.context_lines
    }

    pub fn completion_lines(&self) -> usize {
        self.completion_lines
    }

    /// Number of window positions visited for a file of
    /// `line_count` lines. Upper bound on the records produced.
    pub fn window_count(&self, line_count: usize) -> usize {
        line_count.saturating_sub(self.context_lines.saturating_add(self.completion_lines))
    }

    /// Produce every non-empty record for `lines`, in window order.
    pub fn sample<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Record> {
        let c = self.context_lines;
        let k = self.completion_lines;

        (0..self.window_count(lines.len()))
            .filter_map(|i| {
                let context    = concat(&lines[i..i + c]);
                let completion = concat(&lines[i + c..i + c + k]);

                let prompt     = strip(&context);
                let completion = strip(&completion);

                if prompt.is_empty() || completion.is_empty() {
                    return None;
                }
                Some(Record::new(prompt, completion))
            })
            .collect()
    }
}

impl Default for WindowSampler {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_LINES, DEFAULT_COMPLETION_LINES)
    }
}

/// Join lines with no separator; they carry their own newlines.
fn concat<S: AsRef<str>>(lines: &[S]) -> String {
    let len = lines.iter().map(|l| l.as_ref().len()).sum();
    lines.iter().fold(String::with_capacity(len), |mut acc, l| {
        acc.push_str(l.as_ref());
        acc
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// "L0\n", "L1\n", ... "L{n-1}\n"
    fn numbered(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("L{i}\n")).collect()
    }

    fn joined(range: std::ops::Range<usize>) -> String {
        range.map(|i| format!("L{i}")).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_short_file_gives_no_records() {
        let s = WindowSampler::default();
        assert!(s.sample(&numbered(24)).is_empty());
        assert!(s.sample(&numbered(0)).is_empty());
    }

    #[test]
    fn test_exactly_c_plus_k_lines_gives_no_records() {
        // i = 0 would fit, but the loop bound excludes it
        let s = WindowSampler::default();
        assert!(s.sample(&numbered(25)).is_empty());
    }

    #[test]
    fn test_twenty_six_lines_gives_one_record() {
        let s       = WindowSampler::default();
        let records = s.sample(&numbered(26));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].prompt(), joined(0..20));
        assert_eq!(records[0].completion(), joined(20..25));
    }

    #[test]
    fn test_thirty_lines_gives_five_records_in_order() {
        let s       = WindowSampler::default();
        let records = s.sample(&numbered(30));

        assert_eq!(records.len(), 5);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.prompt(), joined(i..i + 20));
            assert_eq!(r.completion(), joined(i + 20..i + 25));
        }
    }

    #[test]
    fn test_small_window_example() {
        let s       = WindowSampler::new(2, 1);
        let records = s.sample(&["a\n", "b\n", "c\n", "d\n", "e\n"]);

        assert_eq!(records, vec![Record::new("a\nb", "c"), Record::new("b\nc", "d")]);
    }

    #[test]
    fn test_blank_completion_is_skipped() {
        let s     = WindowSampler::new(2, 1);
        let lines = ["a\n", "b\n", "   \n", "c\n", "d\n"];
        let records = s.sample(&lines);

        // i=0 → completion "   " is empty after strip → skipped
        // i=1 → "b\n   " / "c"
        assert_eq!(records, vec![Record::new("b", "c")]);
    }

    #[test]
    fn test_blank_context_is_skipped() {
        let s     = WindowSampler::new(2, 1);
        let lines = ["\n", "\t\n", "x\n", "y\n"];
        let records = s.sample(&lines);

        // only i=0 is visited, and its context is blank
        assert!(records.is_empty());
    }

    #[test]
    fn test_text_is_stripped_not_collapsed() {
        let s       = WindowSampler::new(3, 2);
        let lines   = ["\n", "  a\n", "\n", "b  \n", "  c\n", "z\n"];
        let records = s.sample(&lines);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].prompt(), "a");
        assert_eq!(records[0].completion(), "b  \n  c");
    }

    #[test]
    fn test_record_count_stays_within_bound() {
        let pattern = ["x\n", "\n", "y\n", " \n", "z\n", "\n", "\n"];
        for n in 0..30 {
            let lines: Vec<&str> = (0..n).map(|i| pattern[i % pattern.len()]).collect();
            for c in 1..6 {
                for k in 1..4 {
                    let s     = WindowSampler::new(c, k);
                    let count = s.sample(&lines).len();
                    assert!(count <= n.saturating_sub(c + k), "n={n} c={c} k={k}");
                }
            }
        }
    }

    #[test]
    fn test_bound_is_exact_without_blank_windows() {
        for n in 0..40 {
            let s = WindowSampler::new(3, 2);
            assert_eq!(s.sample(&numbered(n)).len(), n.saturating_sub(5));
            assert_eq!(s.window_count(n), n.saturating_sub(5));
        }
    }

    #[test]
    fn test_emitted_content_is_trimmed_and_non_empty() {
        let lines = [" a \n", "\n", "  b\n", "c  \n", "\n", " \n", "d\n", "e\n"];
        for r in WindowSampler::new(2, 2).sample(&lines) {
            for m in &r.messages {
                assert!(!m.content.is_empty());
                assert_eq!(m.content, strip(&m.content));
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let s     = WindowSampler::new(4, 2);
        let lines = numbered(50);
        assert_eq!(s.sample(&lines), s.sample(&lines));
    }

    #[test]
    fn test_huge_window_gives_no_records() {
        let lines = vec!["a\n"; 30];
        assert!(WindowSampler::new(usize::MAX, 5).sample(&lines).is_empty());
        assert!(WindowSampler::new(5, usize::MAX).sample(&lines).is_empty());
        assert!(WindowSampler::new(usize::MAX, usize::MAX).sample(&lines).is_empty());
        assert_eq!(WindowSampler::new(usize::MAX, 1).window_count(usize::MAX), 0);
    }

    #[test]
    #[should_panic]
    fn test_zero_context_rejected() {
        let _ = WindowSampler::new(0, 5);
    }

    #[test]
    #[should_panic]
    fn test_zero_completion_rejected() {
        let _ = WindowSampler::new(20, 0);
    }
}
