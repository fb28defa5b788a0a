//! Schedule Lexer
//!
//! Splits raw schedule text into meaningful lines and comma-separated fields.
//! No interpretation of the fields happens here.

/// A non-blank, non-comment line split into trimmed fields
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine<'a> {
    /// 1-based line number in the original text
    pub number: usize,
    pub fields: Vec<&'a str>,
}

/// Split text into meaningful lines.
///
/// Accepts both `\n` and `\r\n` line endings. Blank lines and lines whose
/// first non-whitespace character is `#` are dropped.
pub fn split_lines(text: &str) -> Vec<SourceLine<'_>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !is_skipped(line))
        .map(|(idx, line)| SourceLine {
            number: idx + 1,
            fields: split_fields(line),
        })
        .collect()
}

/// Split a single line on commas, trimming whitespace around each field
pub fn split_fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

fn is_skipped(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}
