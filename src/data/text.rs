// ============================================================
// Layer 4 — Text Helpers
// ============================================================
// Character-level rules shared by the manifest reader, the
// file loader and the sampler.
//
// Line splitting follows text-mode "universal newlines":
//   - "\n", "\r\n" and a lone "\r" all end a line
//   - every terminator is normalised to "\n"
//   - each line keeps its terminator; the last line may have none
//
// Example:
//   "a\r\nb\rc"  →  ["a\n", "b\n", "c"]
//
// Stripping removes Unicode whitespace plus the ASCII
// information separators U+001C..U+001F, which are also
// treated as whitespace by the datasets this tool reproduces.

/// Split `text` into lines, keeping a normalised "\n" on every
/// terminated line.
pub fn split_lines_keep_ends(text: &str) -> Vec<String> {
    let mut lines   = Vec::new();
    let mut current = String::new();
    let mut chars   = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => {
                current.push('\n');
                lines.push(std::mem::take(&mut current));
            }
            '\r' => {
                // "\r\n" is one terminator, not two
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                current.push('\n');
                lines.push(std::mem::take(&mut current));
            }
            c => current.push(c),
        }
    }

    // Trailing text without a terminator is still a line
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// True for characters removed by [`strip`]
pub fn is_strip_char(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Remove leading and trailing whitespace
pub fn strip(text: &str) -> &str {
    text.trim_matches(is_strip_char)
}
