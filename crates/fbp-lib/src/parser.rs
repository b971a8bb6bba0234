//! Parse entry point: match, then replay.

use crate::builder::GraphBuilder;
use crate::diagnostics::Diagnostics;
use crate::engine::{MatchRecord, Matcher, NoopTracer, Tracer};
use crate::graph::Graph;
use crate::grammar;
use crate::tree::{ParseTree, order_by_depth};
use crate::validate::{AcceptAll, Validator};
use crate::{Error, Result};

/// Parser configuration for one source text.
///
/// ```
/// use fbp_lib::Parser;
///
/// let parsed = Parser::new("'5s' -> INTERVAL Ticker(core/Ticker)")
///     .with_subgraph("Clock")
///     .parse()
///     .expect("valid graph");
/// assert_eq!(parsed.graph().connections().len(), 1);
/// assert!(parsed.graph().process("Clock_Ticker").is_some());
/// ```
pub struct Parser<'s, T: Tracer = NoopTracer> {
    source: &'s str,
    subgraph: Option<&'s str>,
    tracer: T,
}

impl<'s> Parser<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            subgraph: None,
            tracer: NoopTracer,
        }
    }
}

impl<'s, T: Tracer> Parser<'s, T> {
    /// Parse as the body of subgraph `name`: process names become `{name}_{process}`.
    pub fn with_subgraph(mut self, name: &'s str) -> Self {
        self.subgraph = Some(name);
        self
    }

    pub fn with_tracer<U: Tracer>(self, tracer: U) -> Parser<'s, U> {
        Parser {
            source: self.source,
            subgraph: self.subgraph,
            tracer,
        }
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    pub fn tracer(&self) -> &T {
        &self.tracer
    }

    pub fn into_tracer(self) -> T {
        self.tracer
    }

    /// Every call starts from a clean cursor, record store and depth.
    pub fn parse(&mut self) -> Result<Parsed<'s>> {
        let source = self.source;
        if u32::try_from(source.len()).is_err() {
            return Err(Error::InputTooLarge { len: source.len() });
        }

        let mut matcher = Matcher::new(source, &mut self.tracer);
        if !grammar::start(&mut matcher) {
            let diagnostics = Diagnostics::from_failure(
                source,
                matcher.store().explored(),
                matcher.furthest_failure(),
            );
            return Err(Error::ParseError(diagnostics));
        }

        let records = matcher.into_store().into_records();
        let graph = GraphBuilder::new(source)
            .subgraph(self.subgraph)
            .replay(&records);

        Ok(Parsed {
            source,
            records,
            graph,
        })
    }
}

/// Output of a successful parse.
#[derive(Debug, Clone)]
pub struct Parsed<'s> {
    source: &'s str,
    records: Vec<MatchRecord>,
    graph: Graph,
}

impl<'s> Parsed<'s> {
    pub fn source(&self) -> &'s str {
        self.source
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Committed records in completion order.
    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn tree(&self) -> ParseTree {
        ParseTree::build(&self.records)
    }

    pub fn depth_order(&self) -> Vec<Vec<usize>> {
        order_by_depth(&self.records)
    }

    pub fn validate(&self, validator: &impl Validator) -> Result<()> {
        validator
            .validate(&self.graph)
            .map_err(Error::ValidationError)
    }

    /// Run the default validator and hand out the graph.
    pub fn validated(self) -> Result<Graph> {
        self.validate(&AcceptAll)?;
        Ok(self.into_graph())
    }
}
