//! Parse a graph and print it as JSON.

use super::source_loader::{GraphInput, exit_with, load_or_exit, parse_or_exit};

pub struct GraphArgs {
    pub input: GraphInput,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: GraphArgs) {
    let source = load_or_exit(&args.input);
    let graph = match parse_or_exit(&args.input, &source, args.color).validated() {
        Ok(graph) => graph,
        Err(err) => exit_with(&err, &source, args.color),
    };

    let output = if args.compact {
        serde_json::to_string(&graph)
    } else {
        serde_json::to_string_pretty(&graph)
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: failed to serialize graph: {}", e);
            std::process::exit(1);
        }
    }
}
