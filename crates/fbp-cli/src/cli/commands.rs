//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Input arguments shared by every command.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(graph_path_arg())
        .arg(graph_text_arg())
        .arg(subgraph_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("fbp")
        .about("Parser for the FBP dataflow notation")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(graph_command())
        .subcommand(trace_command())
}

/// Show the parse tree of a graph.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the parse tree of a graph")
        .override_usage(
            "\
  fbp ast <FILE>
  fbp ast -g <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  fbp ast app.fbp                     # rule tree
  fbp ast app.fbp --raw --spans       # with whitespace nodes and byte spans
  fbp ast -g "A OUT -> IN B"          # inline graph"#,
        )
        .arg(raw_arg())
        .arg(spans_arg());

    with_input_args(cmd)
}

/// Validate a graph.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a graph")
        .override_usage(
            "\
  fbp check <FILE>
  fbp check -g <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  fbp check app.fbp                   # silent on success
  cat app.fbp | fbp check -           # from stdin
  fbp check -g "'5s' -> IN Tick"      # inline graph"#,
        );

    with_input_args(cmd)
}

/// Parse a graph and print it as JSON.
pub fn graph_command() -> Command {
    let cmd = Command::new("graph")
        .about("Parse a graph and print it as JSON")
        .override_usage(
            "\
  fbp graph <FILE> [--subgraph <NAME>]
  fbp graph -g <TEXT> [--subgraph <NAME>]",
        )
        .after_help(
            r#"EXAMPLES:
  fbp graph app.fbp                   # pretty JSON
  fbp graph app.fbp --compact         # one line
  fbp graph app.fbp --subgraph Main   # processes become Main_<name>"#,
        )
        .arg(compact_arg());

    with_input_args(cmd)
}

/// Trace grammar matching for debugging.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace grammar matching")
        .override_usage(
            "\
  fbp trace <FILE> [-v]
  fbp trace -g <TEXT> [-v]",
        )
        .after_help(
            r#"EXAMPLES:
  fbp trace app.fbp                   # matches and failures
  fbp trace -g "A OUT -> IN B" -v     # also entries, actions, backtracking"#,
        )
        .arg(verbose_arg());

    with_input_args(cmd)
}
