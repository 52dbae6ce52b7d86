//! Configuration management for sort operations

use crate::error::{SortError, SortResult};
use crate::modifier::Modifier;

/// Requested sort behavior, assembled by the CLI (or by library callers)
/// and validated before any sorting happens.
///
/// The three mode flags are mutually exclusive; `validate` rejects any
/// combination that sets more than one. `key` records whether a field was
/// requested at all, so that an explicit `-k 0` can be distinguished from
/// "no -k flag" and rejected.
#[derive(Debug, Clone, Default)]
pub struct SortOptions {
    /// 1-based field index to sort by (0 when no field was requested)
    pub field: usize,
    /// True iff a field was explicitly requested (-k)
    pub key: bool,
    /// Numeric comparison (-n)
    pub numeric: bool,
    /// Calendar month comparison (-M)
    pub month: bool,
    /// Human-readable numeric comparison with SI suffixes (-h)
    pub human_numeric: bool,
    /// Reverse the result after sorting (-r)
    pub reverse: bool,
    /// Strip trailing blanks before comparison (-b)
    pub ignore_blanks: bool,
    /// Drop duplicate lines after sorting (-u)
    pub unique: bool,
    /// Verify the input is already sorted (-c); handled by the CLI
    pub check: bool,
}

/// Comparison mode enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Case-folded lexicographic sorting (the default)
    #[default]
    Lexicographic,
    /// Numeric sorting (signed integers and decimals)
    Numeric,
    /// Month name sorting (Jan..Dec)
    Month,
    /// Human-readable numeric sorting (with suffixes like K, M, G)
    HumanNumeric,
}

impl SortOptions {
    /// Create a new options record with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sort by the given 1-based field
    pub fn with_field(mut self, field: usize) -> Self {
        self.field = field;
        self.key = true;
        self
    }

    /// Set the comparison mode
    pub fn with_mode(mut self, mode: SortMode) -> Self {
        self.numeric = mode == SortMode::Numeric;
        self.month = mode == SortMode::Month;
        self.human_numeric = mode == SortMode::HumanNumeric;
        self
    }

    /// Enable reverse output
    pub fn with_reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    /// Enable trailing-blank stripping before comparison
    pub fn with_ignore_blanks(mut self, ignore_blanks: bool) -> Self {
        self.ignore_blanks = ignore_blanks;
        self
    }

    /// Enable duplicate removal
    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    /// Enable check mode
    pub fn with_check(mut self, check: bool) -> Self {
        self.check = check;
        self
    }

    /// Validate the options for consistency.
    ///
    /// Runs before every sort; on failure no processing takes place.
    pub fn validate(&self) -> SortResult<()> {
        if self.key && self.field < 1 {
            return Err(SortError::invalid_field(self.field));
        }

        let modes = [self.numeric, self.month, self.human_numeric]
            .iter()
            .filter(|&&m| m)
            .count();
        if modes > 1 {
            return Err(SortError::ConflictingModes);
        }

        Ok(())
    }

    /// The effective comparison mode. Only meaningful after `validate`;
    /// with conflicting flags the first set mode wins.
    pub fn mode(&self) -> SortMode {
        if self.numeric {
            SortMode::Numeric
        } else if self.month {
            SortMode::Month
        } else if self.human_numeric {
            SortMode::HumanNumeric
        } else {
            SortMode::Lexicographic
        }
    }

    /// The pre-comparison text transform selected by these options
    pub fn modifier(&self) -> Modifier {
        if self.ignore_blanks {
            Modifier::TrimTrailingBlanks
        } else {
            Modifier::Identity
        }
    }
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortMode::Lexicographic => "lexicographic",
            SortMode::Numeric => "numeric",
            SortMode::Month => "month",
            SortMode::HumanNumeric => "human-numeric",
        };
        write!(f, "{name}")
    }
}
