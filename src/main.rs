//! Lightweight Unix sort implementation in Rust
//!
//! Command-line boundary: flag parsing, file/stdin reading, check-mode
//! diffing and stdout writing. All ordering semantics live in the library.

use std::fs::File;
use std::io::Read;
use std::process;

use clap::{Arg, Command};
use memmap2::Mmap;

use lite_sort::{
    error::{SortError, SortResult},
    sort, SortOptions, EXIT_SUCCESS,
};

fn main() {
    let result = run();
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("sort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();

    let opts = parse_options_from_matches(&matches);

    let input = match matches.get_one::<String>("file") {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };

    let result = sort(&input, &opts)?;

    if opts.check {
        if input != result {
            return Err(SortError::NotSorted);
        }
        return Ok(EXIT_SUCCESS);
    }

    println!("{result}");
    Ok(EXIT_SUCCESS)
}

fn build_cli() -> Command {
    Command::new("sort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("sort [OPTION]... [FILE]")
        .about("Sort lines of text")
        .disable_help_flag(true) // We use -h for human-numeric-sort
        .arg(
            Arg::new("file")
                .help("Input file to sort (omit for stdin)")
                .value_name("FILE"),
        )
        // Sort modes (mutually exclusive, checked by the library)
        .arg(
            Arg::new("key")
                .short('k')
                .long("key")
                .help("Sort via the N-th whitespace-delimited field (origin 1)")
                .value_name("N")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("numeric")
                .short('n')
                .long("numeric")
                .help("Compare according to string numerical value")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("month-sort")
                .short('M')
                .long("month-sort")
                .help("Compare by month names")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("human-numeric-sort")
                .short('h')
                .long("human-numeric-sort")
                .help("Compare human readable numbers (e.g., 2K 1G)")
                .action(clap::ArgAction::SetTrue),
        )
        // Sort modifiers
        .arg(
            Arg::new("reverse")
                .short('r')
                .long("reverse")
                .help("Reverse the result of comparisons")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ignore-trailing-blanks")
                .short('b')
                .long("ignore-trailing-blanks")
                .help("Ignore trailing blanks when comparing")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("unique")
                .short('u')
                .long("unique")
                .help("Output only the first of an equal run")
                .action(clap::ArgAction::SetTrue),
        )
        // Operation modes
        .arg(
            Arg::new("check")
                .short('c')
                .long("check")
                .help("Check for sorted input; do not sort")
                .action(clap::ArgAction::SetTrue),
        )
        // Explicit help option since we disabled the automatic one
        .arg(
            Arg::new("help")
                .long("help")
                .help("Display this help and exit")
                .action(clap::ArgAction::Help),
        )
}

/// Build sort options from command line matches.
///
/// `key` is true whenever -k appeared, even as `-k 0`, so the library can
/// reject field indices below 1.
fn parse_options_from_matches(matches: &clap::ArgMatches) -> SortOptions {
    let field = matches.get_one::<usize>("key").copied();

    SortOptions {
        field: field.unwrap_or(0),
        key: field.is_some(),
        numeric: matches.get_flag("numeric"),
        month: matches.get_flag("month-sort"),
        human_numeric: matches.get_flag("human-numeric-sort"),
        reverse: matches.get_flag("reverse"),
        ignore_blanks: matches.get_flag("ignore-trailing-blanks"),
        unique: matches.get_flag("unique"),
        check: matches.get_flag("check"),
    }
}

/// Read a whole input file through a memory map
fn read_file(path: &str) -> SortResult<String> {
    let file = File::open(path)?;
    // SAFETY boundary lives in memmap2; the map is read-only and dropped
    // before this function returns.
    let mmap = unsafe { Mmap::map(&file)? };
    Ok(String::from_utf8_lossy(&mmap).into_owned())
}

fn read_stdin() -> SortResult<String> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input)
}
