use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use fbp_lib::{Error, Parsed, Parser};

/// Where the graph text comes from, plus parse options shared by all commands.
pub struct GraphInput {
    pub graph_path: Option<PathBuf>,
    pub graph_text: Option<String>,
    pub subgraph: Option<String>,
}

/// Loaded graph text and the name shown in diagnostics.
#[derive(Debug)]
pub struct GraphSource {
    pub path: Option<String>,
    pub text: String,
}

pub fn load_graph_source(
    graph_path: Option<&Path>,
    graph_text: Option<&str>,
) -> Result<GraphSource, String> {
    if let Some(text) = graph_text {
        return Ok(GraphSource {
            path: None,
            text: text.to_string(),
        });
    }

    if let Some(path) = graph_path {
        if path.as_os_str() == "-" {
            return load_stdin();
        }
        return load_file(path);
    }

    Err("graph is required: use positional argument, - for stdin, or -g/--graph".to_string())
}

fn load_stdin() -> Result<GraphSource, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(GraphSource {
        path: Some("<stdin>".to_string()),
        text: buf,
    })
}

fn load_file(path: &Path) -> Result<GraphSource, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    Ok(GraphSource {
        path: Some(path.to_string_lossy().into_owned()),
        text,
    })
}

/// Load the input or exit with an error message.
pub fn load_or_exit(input: &GraphInput) -> GraphSource {
    match load_graph_source(input.graph_path.as_deref(), input.graph_text.as_deref()) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}

/// Parse the loaded text, printing diagnostics and exiting on failure.
pub fn parse_or_exit<'s>(input: &'s GraphInput, source: &'s GraphSource, color: bool) -> Parsed<'s> {
    let mut parser = Parser::new(&source.text);
    if let Some(name) = input.subgraph.as_deref() {
        parser = parser.with_subgraph(name);
    }

    match parser.parse() {
        Ok(parsed) => parsed,
        Err(err) => exit_with(&err, source, color),
    }
}

/// Report a library error and exit.
pub fn exit_with(err: &Error, source: &GraphSource, color: bool) -> ! {
    match err.diagnostics() {
        Some(diagnostics) => {
            let mut printer = diagnostics.printer().source(&source.text).colored(color);
            if let Some(path) = source.path.as_deref() {
                printer = printer.path(path);
            }
            eprintln!("{}", printer.render());
        }
        None => eprintln!("error: {}", err),
    }
    std::process::exit(1);
}
