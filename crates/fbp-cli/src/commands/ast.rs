//! Show the parse tree of a graph.

use super::source_loader::{GraphInput, load_or_exit, parse_or_exit};

pub struct AstArgs {
    pub input: GraphInput,
    pub raw: bool,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let source = load_or_exit(&args.input);
    let parsed = parse_or_exit(&args.input, &source, args.color);

    let tree = parsed.tree();
    let dump = tree
        .printer(parsed.source())
        .raw(args.raw)
        .spans(args.spans)
        .colored(args.color)
        .dump();
    print!("{}", dump);
}
