//! Comparison predicates for the supported sort modes
//!
//! Each comparator takes two already-modified strings and returns a total
//! `Ordering` over them. Malformed tokens are never an error: a string the
//! mode cannot classify is routed through a documented fallback (raw byte
//! comparison against other unclassified strings, fixed placement against
//! classified ones).

use crate::config::SortMode;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Signed decimal with optional sign, nothing else on the line
static NUMERIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([-+]?)(\d+\.?\d*)\s*$").expect("numeric pattern"));

/// Three-letter month abbreviation, case-insensitive
static MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\s*$")
        .expect("month pattern")
});

/// Signed decimal with an optional single-letter SI suffix
static HUMAN_NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*([-+]?\d+\.?\d*)([KMGTPEZYRQ])?\s*$").expect("human-numeric pattern")
});

/// Month abbreviations in calendar order; rank = index + 1
const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// SI suffixes in magnitude order; rank = index + 1, no suffix = rank 0
const SI_SUFFIXES: [char; 10] = ['k', 'm', 'g', 't', 'p', 'e', 'z', 'y', 'r', 'q'];

impl SortMode {
    /// Compare two (already-modified) strings under this mode
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            SortMode::Lexicographic => compare_lexicographic(a, b),
            SortMode::Numeric => compare_numeric(a, b),
            SortMode::Month => compare_month(a, b),
            SortMode::HumanNumeric => compare_human_numeric(a, b),
        }
    }
}

/// Case-folded lexicographic comparison, the default mode
pub fn compare_lexicographic(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Numeric comparison (-n).
///
/// Numbers sort before non-numbers; two numbers compare by signed value,
/// two non-numbers fall back to raw byte comparison. The sign is taken
/// from the literal sign character, so `-0` sorts before `0`.
pub fn compare_numeric(a: &str, b: &str) -> Ordering {
    match (parse_numeric(a), parse_numeric(b)) {
        (Some((a_sign, a_val)), Some((b_sign, b_val))) => {
            if a_sign != b_sign {
                return a_sign.cmp(&b_sign);
            }
            let a_signed = a_sign as f64 * a_val;
            let b_signed = b_sign as f64 * b_val;
            a_signed.partial_cmp(&b_signed).unwrap_or(Ordering::Equal)
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Parse a numeric token into (literal sign, magnitude).
/// Returns None for anything the numeric pattern does not fully match.
fn parse_numeric(s: &str) -> Option<(i64, f64)> {
    let caps = NUMERIC_RE.captures(s)?;
    let sign = if &caps[1] == "-" { -1 } else { 1 };
    let value: f64 = caps[2].parse().ok()?;
    Some((sign, value))
}

/// Month comparison (-M).
///
/// Non-months sort before any month; two non-months fall back to raw byte
/// comparison; two months compare by calendar rank.
pub fn compare_month(a: &str, b: &str) -> Ordering {
    match (month_rank(a), month_rank(b)) {
        (Some(a_rank), Some(b_rank)) => a_rank.cmp(&b_rank),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

/// Calendar rank 1..=12 for a recognized month abbreviation
fn month_rank(s: &str) -> Option<usize> {
    let caps = MONTH_RE.captures(s)?;
    let name = caps[1].to_ascii_lowercase();
    MONTHS.iter().position(|&m| m == name).map(|i| i + 1)
}

/// Human-readable numeric comparison (-h).
///
/// Matching values order first by sign (negative < zero < positive), then
/// by SI suffix rank, then by numeric value. For non-zero values the rank
/// comparison is multiplied by the sign, so `-1M` sorts before `-1K`: a
/// bigger suffix on a negative value means a more negative quantity. Zero
/// carries no signed magnitude, so when either side is exactly zero the
/// ranks compare unmultiplied. Matches sort before non-matches; two
/// non-matches fall back to raw byte comparison.
pub fn compare_human_numeric(a: &str, b: &str) -> Ordering {
    match (parse_human_numeric(a), parse_human_numeric(b)) {
        (Some((a_val, a_rank)), Some((b_val, b_rank))) => {
            let (a_sign, b_sign) = (sign_of(a_val), sign_of(b_val));
            if a_sign != b_sign {
                return a_sign.cmp(&b_sign);
            }

            if a_rank != b_rank {
                if a_val == 0.0 || b_val == 0.0 {
                    return a_rank.cmp(&b_rank);
                }
                return (a_rank * a_sign).cmp(&(b_rank * b_sign));
            }

            a_val.partial_cmp(&b_val).unwrap_or(Ordering::Equal)
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Parse a human-numeric token into (signed value, suffix rank)
fn parse_human_numeric(s: &str) -> Option<(f64, i64)> {
    let caps = HUMAN_NUMERIC_RE.captures(s)?;
    let value: f64 = caps[1].parse().ok()?;
    let rank = caps.get(2).map_or(0, |m| suffix_rank(m.as_str()));
    Some((value, rank))
}

/// Magnitude rank of an SI suffix letter (K=1 .. Q=10), 0 when absent
fn suffix_rank(suffix: &str) -> i64 {
    suffix
        .chars()
        .next()
        .map(|c| c.to_ascii_lowercase())
        .and_then(|c| SI_SUFFIXES.iter().position(|&s| s == c))
        .map_or(0, |i| (i + 1) as i64)
}

/// Sign classification used by human-numeric ordering.
/// `-0` parses to -0.0, which compares equal to zero, so it lands in the
/// zero bucket just like `0`.
fn sign_of(value: f64) -> i64 {
    if value < 0.0 {
        -1
    } else if value == 0.0 {
        0
    } else {
        1
    }
}
