//! Trace grammar matching for debugging.

use fbp_core::Colors;
use fbp_lib::Parser;
use fbp_lib::engine::{PrintTracer, Verbosity};

use super::source_loader::{GraphInput, exit_with, load_or_exit};

pub struct TraceArgs {
    pub input: GraphInput,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let source = load_or_exit(&args.input);
    let tracer = PrintTracer::new(&source.text)
        .verbosity(args.verbosity)
        .colored(args.color);

    let mut parser = Parser::new(&source.text).with_tracer(tracer);
    if let Some(name) = args.input.subgraph.as_deref() {
        parser = parser.with_subgraph(name);
    }

    let result = parser.parse();
    parser.tracer().print();

    let colors = Colors::new(args.color);
    match result {
        Ok(parsed) => {
            let graph = parsed.graph();
            println!(
                "{}---{} {} records, {} processes, {} connections",
                colors.dim,
                colors.reset,
                parsed.records().len(),
                graph.processes().len(),
                graph.connections().len()
            );
        }
        Err(err) => {
            println!("{}---{} no match", colors.dim, colors.reset);
            exit_with(&err, &source, args.color);
        }
    }
}
