//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use fbp_lib::engine::Verbosity;

use super::*;
use crate::cli::commands::{ast_command, check_command, graph_command, trace_command};
use crate::commands::trace::TraceArgs;

#[test]
fn cli_definition_is_consistent() {
    build_cli().debug_assert();
}

#[test]
fn check_takes_positional_path() {
    let m = check_command()
        .try_get_matches_from(["check", "app.fbp"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.input.graph_path, Some(PathBuf::from("app.fbp")));
    assert_eq!(params.input.graph_text, None);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn check_accepts_stdin_dash() {
    let m = check_command().try_get_matches_from(["check", "-"]).unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.input.graph_path, Some(PathBuf::from("-")));
}

#[test]
fn inline_text_and_path_conflict() {
    let result = check_command().try_get_matches_from(["check", "app.fbp", "-g", "A OUT -> IN B"]);
    assert!(result.is_err());
}

#[test]
fn graph_extracts_subgraph_and_compact() {
    let m = graph_command()
        .try_get_matches_from([
            "graph",
            "-g",
            "A OUT -> IN B",
            "--subgraph",
            "Main",
            "--compact",
            "--color",
            "never",
        ])
        .unwrap();
    let params = GraphParams::from_matches(&m);

    assert_eq!(params.input.graph_text.as_deref(), Some("A OUT -> IN B"));
    assert_eq!(params.input.subgraph.as_deref(), Some("Main"));
    assert!(params.compact);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn ast_flags() {
    let m = ast_command()
        .try_get_matches_from(["ast", "app.fbp", "--raw", "--spans"])
        .unwrap();
    let params = AstParams::from_matches(&m);

    assert!(params.raw);
    assert!(params.spans);
}

#[test]
fn ast_rejects_trace_flags() {
    let result = ast_command().try_get_matches_from(["ast", "app.fbp", "-v"]);
    assert!(result.is_err());
}

#[test]
fn trace_verbosity_from_count() {
    let m = trace_command()
        .try_get_matches_from(["trace", "app.fbp"])
        .unwrap();
    let args: TraceArgs = TraceParams::from_matches(&m).into();
    assert_eq!(args.verbosity, Verbosity::Default);

    let m = trace_command()
        .try_get_matches_from(["trace", "app.fbp", "-vv"])
        .unwrap();
    let params = TraceParams::from_matches(&m);
    assert_eq!(params.verbose, 2);
    let args: TraceArgs = params.into();
    assert_eq!(args.verbosity, Verbosity::Verbose);
}

#[test]
fn color_choice_resolution() {
    assert!(ColorChoice::Always.should_colorize());
    assert!(!ColorChoice::Never.should_colorize());

    let m = check_command()
        .try_get_matches_from(["check", "app.fbp", "--color", "always"])
        .unwrap();
    assert_eq!(CheckParams::from_matches(&m).color, ColorChoice::Always);
}

#[test]
fn unknown_color_value_rejected() {
    let result = check_command().try_get_matches_from(["check", "app.fbp", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn subcommand_required() {
    let result = build_cli().try_get_matches_from(["fbp"]);
    assert!(result.is_err());
}
