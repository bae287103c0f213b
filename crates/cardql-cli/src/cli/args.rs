//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Query file, or `-` for stdin (positional).
pub fn query_path_arg() -> Arg {
    Arg::new("query_path")
        .value_name("QUERY_FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("query_text")
        .help("File containing the query (`-` reads stdin)")
}

/// Inline query text (-q/--query).
pub fn query_text_arg() -> Arg {
    Arg::new("query_text")
        .short('q')
        .long("query")
        .value_name("TEXT")
        .allow_hyphen_values(true)
        .help("Inline query text")
}

/// Use the historical grouping for mixed AND/OR (--legacy-chaining).
pub fn legacy_chaining_arg() -> Arg {
    Arg::new("legacy_chaining")
        .long("legacy-chaining")
        .action(ArgAction::SetTrue)
        .help("Group mixed AND/OR as `a AND (b OR c)` instead of left to right")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty)")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log parser activity to stderr (-v for debug, -vv for trace)")
}
