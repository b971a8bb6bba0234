//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so one definition serves every
//! command that takes it.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Graph file, or `-` for stdin (positional).
pub fn graph_path_arg() -> Arg {
    Arg::new("graph_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .conflicts_with("graph_text")
        .help("Graph file (use - for stdin)")
}

/// Inline graph text (-g/--graph).
pub fn graph_text_arg() -> Arg {
    Arg::new("graph_text")
        .short('g')
        .long("graph")
        .value_name("TEXT")
        .help("Inline graph text")
}

/// Subgraph name prefixed to every process (--subgraph).
pub fn subgraph_arg() -> Arg {
    Arg::new("subgraph")
        .long("subgraph")
        .value_name("NAME")
        .help("Parse as the body of subgraph NAME (processes become NAME_process)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Include whitespace and character-level nodes (--raw).
pub fn raw_arg() -> Arg {
    Arg::new("raw")
        .long("raw")
        .action(ArgAction::SetTrue)
        .help("Include whitespace and character-level nodes")
}

/// Show byte spans (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show byte spans")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty)")
}

/// Verbosity level (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v also shows rule entry, actions and backtracking)")
}
