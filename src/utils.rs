//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use tscat::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Mesh"));
/// assert!(contains_alphabetic("工程圖"));
/// assert!(contains_alphabetic("Alt+C"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("..."));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Index of line start byte offsets for O(log n) line lookups.
///
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
#[derive(Debug, Clone)]
pub struct LineIndex {
    offsets: Vec<usize>,
}

impl LineIndex {
    pub fn new(content: &str) -> Self {
        let mut offsets = vec![0];
        for (i, c) in content.char_indices() {
            if c == '\n' {
                offsets.push(i + 1);
            }
        }
        Self { offsets }
    }

    /// 1-based line number containing `offset`.
    pub fn line(&self, offset: usize) -> usize {
        match self.offsets.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// 1-based line and character column of `offset` in `content`.
    pub fn line_col(&self, content: &str, offset: usize) -> (usize, usize) {
        let line = self.line(offset);
        let start = self.offsets[line - 1];
        let end = offset.min(content.len());
        let col = content
            .get(start..end)
            .map(|prefix| prefix.chars().count() + 1)
            .unwrap_or(1);
        (line, col)
    }

    /// Text of a 1-based line without its line terminator.
    pub fn line_text<'a>(&self, content: &'a str, line: usize) -> Option<&'a str> {
        let start = *self.offsets.get(line.checked_sub(1)?)?;
        let end = self
            .offsets
            .get(line)
            .map(|next| next - 1)
            .unwrap_or(content.len());
        content
            .get(start..end)
            .map(|text| text.trim_end_matches('\r'))
    }
}

/// Pluralize a noun for summary lines ("1 file", "2 files").
pub fn plural<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}
