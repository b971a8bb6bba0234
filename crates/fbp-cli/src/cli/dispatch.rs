//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use fbp_lib::engine::Verbosity;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::graph::GraphArgs;
use crate::commands::source_loader::GraphInput;
use crate::commands::trace::TraceArgs;

/// Input fields every command extracts.
pub struct InputParams {
    pub graph_path: Option<PathBuf>,
    pub graph_text: Option<String>,
    pub subgraph: Option<String>,
}

impl InputParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            graph_path: m.get_one::<PathBuf>("graph_path").cloned(),
            graph_text: m.get_one::<String>("graph_text").cloned(),
            subgraph: m.get_one::<String>("subgraph").cloned(),
        }
    }
}

impl From<InputParams> for GraphInput {
    fn from(p: InputParams) -> Self {
        Self {
            graph_path: p.graph_path,
            graph_text: p.graph_text,
            subgraph: p.subgraph,
        }
    }
}

pub struct AstParams {
    pub input: InputParams,
    pub raw: bool,
    pub spans: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            raw: m.get_flag("raw"),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input: p.input.into(),
            raw: p.raw,
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input: InputParams,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input.into(),
            color: p.color.should_colorize(),
        }
    }
}

pub struct GraphParams {
    pub input: InputParams,
    pub compact: bool,
    pub color: ColorChoice,
}

impl GraphParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<GraphParams> for GraphArgs {
    fn from(p: GraphParams) -> Self {
        Self {
            input: p.input.into(),
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub input: InputParams,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: InputParams::from_matches(m),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            _ => Verbosity::Verbose,
        };

        Self {
            input: p.input.into(),
            verbosity,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
