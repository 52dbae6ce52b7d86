//! Lightweight Unix sort implementation in Rust
//!
//! This crate reimplements a practical subset of the classic Unix sort
//! utility for in-memory text: lexicographic, numeric, month and
//! human-numeric comparison, field-restricted keys, and the reverse,
//! unique and check modifiers.

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod config;

// Core sorting implementations
pub mod compare;
pub mod core_sort;
pub mod field;
pub mod modifier;

// Re-export commonly used types
pub use config::{SortMode, SortOptions};
pub use error::{SortError, SortResult};
pub use modifier::Modifier;

/// Exit codes matching GNU sort
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Sort a newline-joined block of text according to `options`.
///
/// Validates the options, stable-sorts the lines under the selected
/// comparison mode, then applies the reverse and unique passes in that
/// order. Line content and the newline-joining convention are preserved
/// exactly; on error no output is produced.
pub fn sort(text: &str, options: &SortOptions) -> SortResult<String> {
    core_sort::sort(text, options)
}
