//! End-to-end tests of the public sort entry point

use lite_sort::{sort, SortError, SortMode, SortOptions};

#[test]
fn default_sort_orders_lexicographically() {
    let opts = SortOptions::default();
    assert_eq!(sort("cherry\napple\nbanana", &opts).unwrap(), "apple\nbanana\ncherry");
}

#[test]
fn stability_keeps_equal_lines_in_input_order() {
    let opts = SortOptions::default();
    assert_eq!(sort("b1\nb2\na", &opts).unwrap(), "a\nb1\nb2");
}

#[test]
fn numeric_sort_orders_numbers_before_text() {
    let opts = SortOptions::new().with_mode(SortMode::Numeric);
    assert_eq!(sort("10\n2\n-3\nabc", &opts).unwrap(), "-3\n2\n10\nabc");
}

#[test]
fn month_sort_places_non_months_first() {
    let opts = SortOptions::new().with_mode(SortMode::Month);
    assert_eq!(sort("xyz\nFeb\nabc\nJan", &opts).unwrap(), "abc\nxyz\nJan\nFeb");
}

#[test]
fn human_numeric_sign_and_suffix_order() {
    let opts = SortOptions::new().with_mode(SortMode::HumanNumeric);
    assert_eq!(sort("-1M\n-1K\n1K\n1M", &opts).unwrap(), "-1M\n-1K\n1K\n1M");
    assert_eq!(
        sort("2M\n-2\n1K\n0\n-1K", &opts).unwrap(),
        "-1K\n-2\n0\n1K\n2M"
    );
}

#[test]
fn field_sort_falls_back_to_token_count_for_short_lines() {
    let opts = SortOptions::new().with_field(3);
    assert_eq!(sort("a\nb c\nd e f", &opts).unwrap(), "a\nb c\nd e f");
}

#[test]
fn unique_runs_after_reverse() {
    // sorted "a a b", reversed "b a a", then unique keeps "b a":
    // the survivor per key is the last occurrence of the sorted run
    let opts = SortOptions::new().with_reverse(true).with_unique(true);
    assert_eq!(sort("a\nb\na", &opts).unwrap(), "b\na");
}

#[test]
fn unique_without_reverse_keeps_first_occurrence() {
    let opts = SortOptions::new().with_unique(true);
    assert_eq!(sort("a\nb\na", &opts).unwrap(), "a\nb");
}

#[test]
fn unique_by_field_uses_raw_field_text() {
    let opts = SortOptions::new().with_field(2).with_unique(true);
    assert_eq!(
        sort("apple red\nbanana yellow\ngrape red", &opts).unwrap(),
        "apple red\nbanana yellow"
    );
}

#[test]
fn invalid_field_produces_no_output() {
    let opts = SortOptions {
        key: true,
        field: 0,
        ..Default::default()
    };
    assert!(matches!(
        sort("b\na", &opts),
        Err(SortError::InvalidField { field: 0 })
    ));
}

#[test]
fn conflicting_modes_produce_no_output() {
    let opts = SortOptions {
        numeric: true,
        month: true,
        ..Default::default()
    };
    assert!(matches!(sort("b\na", &opts), Err(SortError::ConflictingModes)));

    let opts = SortOptions {
        numeric: true,
        human_numeric: true,
        ..Default::default()
    };
    assert!(matches!(sort("b\na", &opts), Err(SortError::ConflictingModes)));
}

#[test]
fn sorting_twice_is_idempotent_for_every_mode() {
    let input = "10\n2\nFeb\n-1K\nabc\nJan\n1M\n-3";
    for mode in [
        SortMode::Lexicographic,
        SortMode::Numeric,
        SortMode::Month,
        SortMode::HumanNumeric,
    ] {
        let opts = SortOptions::new().with_mode(mode);
        let once = sort(input, &opts).unwrap();
        let twice = sort(&once, &opts).unwrap();
        assert_eq!(once, twice, "mode {mode:?} not idempotent");
    }
}

#[test]
fn trailing_newline_convention_is_preserved() {
    let opts = SortOptions::default();
    // the trailing empty line sorts first and nothing is stripped
    assert_eq!(sort("b\na\n", &opts).unwrap(), "\na\nb");
    // no trailing newline in, none out
    assert_eq!(sort("b\na", &opts).unwrap(), "a\nb");
}

#[test]
fn ignore_blanks_never_alters_output_text() {
    let opts = SortOptions::new().with_ignore_blanks(true);
    assert_eq!(sort("b\t\na  ", &opts).unwrap(), "a  \nb\t");
}

#[test]
fn check_contract_compares_byte_for_byte() {
    // the check collaborator is expected to diff the sort result against
    // the raw input; already-sorted input round-trips unchanged
    let opts = SortOptions::default();
    let input = "a\nb\nc";
    assert_eq!(sort(input, &opts).unwrap(), input);

    let unsorted = "b\na";
    assert_ne!(sort(unsorted, &opts).unwrap(), unsorted);
}
