use super::source_loader::{GraphInput, exit_with, load_or_exit, parse_or_exit};

pub struct CheckArgs {
    pub input: GraphInput,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = load_or_exit(&args.input);
    let parsed = parse_or_exit(&args.input, &source, args.color);

    if let Err(err) = parsed.validate(&fbp_lib::AcceptAll) {
        exit_with(&err, &source, args.color);
    }

    // Silent on success (like cargo check)
}
