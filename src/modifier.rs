//! Pre-comparison text transforms

/// Transform applied to a line (or a field) before it reaches a
/// comparator. The stored line is never modified; only the comparison
/// sees the transformed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modifier {
    /// Compare the text as-is
    #[default]
    Identity,
    /// Strip trailing spaces and tabs before comparing (-b).
    /// Leading and interior blanks are kept; other whitespace classes
    /// (newline, form feed) are not stripped.
    TrimTrailingBlanks,
}

impl Modifier {
    /// Apply the transform. Borrows from the input, so the caller keeps
    /// the original line for output.
    pub fn apply<'a>(&self, s: &'a str) -> &'a str {
        match self {
            Modifier::Identity => s,
            Modifier::TrimTrailingBlanks => s.trim_end_matches([' ', '\t']),
        }
    }
}
