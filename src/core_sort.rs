//! Sort orchestration: validation, stable sorting, reverse and unique passes

use crate::config::SortOptions;
use crate::error::SortResult;
use crate::field;
use std::collections::HashSet;

/// Sort a block of newline-joined text according to `opts`.
///
/// The stage order is fixed: validate, stable-sort (whole lines or one
/// field per line), then reverse, then unique. Because unique runs after
/// reverse, it keeps the first line per key in post-reverse order, which
/// for duplicates is the last occurrence of the sorted run.
///
/// Splitting is on `'\n'` exactly: a trailing newline in the input shows
/// up as a trailing empty line and takes part in the sort like any other.
pub fn sort(text: &str, opts: &SortOptions) -> SortResult<String> {
    opts.validate()?;

    let modifier = opts.modifier();
    let mode = opts.mode();

    let mut lines: Vec<&str> = text.split('\n').collect();

    if opts.key {
        field::sort_by_field(&mut lines, modifier, opts);
    } else {
        lines.sort_by(|a, b| mode.compare(modifier.apply(a), modifier.apply(b)));
    }

    if opts.reverse {
        reverse(&mut lines);
    }
    if opts.unique {
        lines = unique(lines, opts.field);
    }

    Ok(lines.join("\n"))
}

/// Reverse the line order in place. Line content is untouched.
pub fn reverse(lines: &mut [&str]) {
    lines.reverse();
}

/// Keep the first line for each distinct dedup key, in order.
///
/// With `field` < 1 the key is the whole line; otherwise it is the raw
/// text of the 1-based field. A line with too few tokens keys to the
/// empty string, so all such lines share one bucket and only the first
/// survives. The modifier never applies here.
pub fn unique(lines: Vec<&str>, field: usize) -> Vec<&str> {
    let mut seen: HashSet<&str> = HashSet::new();

    lines
        .into_iter()
        .filter(|line| {
            let key = if field < 1 {
                *line
            } else {
                line.split_whitespace().nth(field - 1).unwrap_or("")
            };
            seen.insert(key)
        })
        .collect()
}
