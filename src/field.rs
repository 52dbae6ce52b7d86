//! Whitespace field extraction and field-restricted sorting

use crate::config::SortOptions;
use crate::modifier::Modifier;

/// A line paired with its whitespace-delimited fields. The original text
/// is kept untouched for output; only the fields feed the comparator.
#[derive(Debug)]
pub struct Row<'a> {
    pub fields: Vec<&'a str>,
    pub original: &'a str,
}

impl<'a> Row<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            fields: fields(line),
            original: line,
        }
    }
}

/// Split a line into tokens on runs of whitespace. Leading and trailing
/// whitespace produce no tokens; a blank line has none.
pub fn fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Stable sort of `lines` by the 1-based field in `opts.field`.
///
/// A row with fewer tokens than the requested index cannot supply a sort
/// key; whenever either side is short like that, the rows order by token
/// count alone. Only when both sides have the field does the selected
/// comparator see it (modified, with the mode defaulting to case-folded
/// lexicographic).
pub fn sort_by_field<'a>(lines: &mut [&'a str], modifier: Modifier, opts: &SortOptions) {
    let n = opts.field;
    let mode = opts.mode();

    let mut rows: Vec<Row<'a>> = lines.iter().copied().map(Row::new).collect();

    rows.sort_by(|a, b| {
        if a.fields.len() < n || b.fields.len() < n {
            return a.fields.len().cmp(&b.fields.len());
        }
        let a_field = modifier.apply(a.fields[n - 1]);
        let b_field = modifier.apply(b.fields[n - 1]);
        mode.compare(a_field, b_field)
    });

    for (slot, row) in lines.iter_mut().zip(rows) {
        *slot = row.original;
    }
}
