//! Parser for the FBP dataflow notation.
//!
//! # Example
//!
//! ```
//! let source = "
//!     'data.txt' -> SOURCE Read(ReadFile:main)
//!     Read() OUT -> IN Display(Output)
//! ";
//!
//! let graph = fbp_lib::parse(source).expect("valid graph");
//! assert_eq!(graph.processes().len(), 2);
//! assert_eq!(graph.connections().len(), 2);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod builder;
pub mod diagnostics;
pub mod engine;
pub mod grammar;
pub mod graph;
pub mod parser;
pub mod tree;
pub mod validate;

#[cfg(test)]
mod parser_tests;

pub use fbp_core::Colors;

pub use diagnostics::{Diagnostics, DiagnosticsPrinter};
pub use graph::{Connection, ConnectionSource, Endpoint, Graph, Process};
pub use parser::{Parsed, Parser};
pub use validate::{AcceptAll, Validator};

/// Errors that can occur while parsing a document.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Match records address the input with `u32` offsets.
    #[error("input of {len} bytes is too large to parse")]
    InputTooLarge { len: usize },

    #[error("parsing failed with {} errors", .0.error_count())]
    ParseError(Diagnostics),

    #[error("graph validation failed: {0}")]
    ValidationError(String),
}

impl Error {
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            Error::ParseError(diagnostics) => Some(diagnostics),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Parse `source` and run the default validator.
pub fn parse(source: &str) -> Result<Graph> {
    Parser::new(source).parse()?.validated()
}

/// Parse `source` as the body of subgraph `name`.
pub fn parse_subgraph(source: &str, name: &str) -> Result<Graph> {
    Parser::new(source).with_subgraph(name).parse()?.validated()
}
