//! Replays committed match records into a [`Graph`].
//!
//! Matching never touches the graph. After a successful parse the committed
//! records are walked once, left to right; `Text` records remember the most
//! recent capture and action records consume it.
//!
//! A chain `A OUT -> IN B OUT -> IN C` is built by threading a pending source
//! endpoint through the segments: a leftlet sets it, a middlet emits a
//! connection into its in-port and reseeds it from its out-port, a rightlet
//! emits the final connection and clears it.

use std::ops::Range;

use indexmap::IndexMap;

use crate::engine::{MatchRecord, Rule};
use crate::graph::{Connection, Endpoint, Graph, Process};

/// Transient state of the chain being built.
#[derive(Debug, Default)]
struct Scratch {
    port: String,
    in_port: String,
    out_port: String,
    node_name: String,
    component: Option<String>,
    metadata: Option<String>,
    iip: Option<String>,
    pending_source: Option<Endpoint>,
}

pub struct GraphBuilder<'s> {
    source: &'s str,
    subgraph: Option<&'s str>,
    text: Range<usize>,
    scratch: Scratch,
    graph: Graph,
}

impl<'s> GraphBuilder<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            subgraph: None,
            text: 0..0,
            scratch: Scratch::default(),
            graph: Graph::new(),
        }
    }

    /// Prefix every process name with `{subgraph}_`.
    pub fn subgraph(mut self, name: Option<&'s str>) -> Self {
        self.subgraph = name.filter(|n| !n.is_empty());
        self
    }

    pub fn replay<'r>(mut self, records: impl IntoIterator<Item = &'r MatchRecord>) -> Graph {
        for record in records {
            self.apply(record);
        }
        self.graph
    }

    fn apply(&mut self, record: &MatchRecord) {
        match record.rule {
            Rule::Text => self.text = record.range(),
            Rule::ExportInport => {
                if let Some((name, endpoint)) = self.exported_port() {
                    self.graph.set_inport(name, endpoint);
                }
            }
            Rule::ExportOutport => {
                if let Some((name, endpoint)) = self.exported_port() {
                    self.graph.set_outport(name, endpoint);
                }
            }
            Rule::MarkInPort => self.scratch.in_port = std::mem::take(&mut self.scratch.port),
            Rule::MarkOutPort => self.scratch.out_port = std::mem::take(&mut self.scratch.port),
            Rule::EmitMiddlet => self.middlet(),
            Rule::EmitLeftlet => self.leftlet(),
            Rule::EmitRightlet => self.rightlet(),
            Rule::CaptureIip => self.scratch.iip = Some(unescape_iip(self.captured())),
            Rule::CaptureNodeName => self.scratch.node_name = self.captured().to_string(),
            Rule::EmitNode => self.node(),
            Rule::CaptureComponent => self.scratch.component = Some(self.captured().to_string()),
            Rule::CaptureMeta => self.scratch.metadata = Some(self.captured().to_string()),
            Rule::CapturePort => self.scratch.port = self.captured().to_string(),
            Rule::CloseChain => self.scratch = Scratch::default(),
            _ => {}
        }
    }

    fn captured(&self) -> &'s str {
        self.source.get(self.text.clone()).unwrap_or("")
    }

    fn qualify(&self, name: &str) -> String {
        match self.subgraph {
            Some(prefix) => format!("{prefix}_{name}"),
            None => name.to_string(),
        }
    }

    fn endpoint(&self, node: &str, port: &str) -> Endpoint {
        Endpoint::new(self.qualify(node), port)
    }

    fn leftlet(&mut self) {
        let node = std::mem::take(&mut self.scratch.node_name);
        let port = std::mem::take(&mut self.scratch.port);
        self.scratch.pending_source = Some(self.endpoint(&node, &port));
    }

    fn rightlet(&mut self) {
        let node = std::mem::take(&mut self.scratch.node_name);
        let port = std::mem::take(&mut self.scratch.port);
        let target = self.endpoint(&node, &port);
        self.connect(target);
    }

    /// Emit into the in-port first, then reseed the chain from the out-port.
    fn middlet(&mut self) {
        let in_port = std::mem::take(&mut self.scratch.in_port);
        let target = self.endpoint(&self.scratch.node_name, &in_port);
        self.connect(target);

        self.scratch.port = std::mem::take(&mut self.scratch.out_port);
        self.leftlet();
    }

    /// Connect the pending source, or else the pending IIP, to `target`.
    /// Consumes both.
    fn connect(&mut self, target: Endpoint) {
        let source = self.scratch.pending_source.take();
        let iip = self.scratch.iip.take();
        let connection = match (source, iip) {
            (Some(source), _) => Connection::between(source, target),
            (None, Some(data)) => Connection::data(data, target),
            // A bare `IN B` line has nothing to connect.
            (None, None) => return,
        };
        self.graph.add_connection(connection);
    }

    fn node(&mut self) {
        let component = self.scratch.component.take();
        let metadata = self.scratch.metadata.take();

        let Some(component) = component.filter(|c| !c.is_empty()) else {
            return;
        };
        let name = self.qualify(&self.scratch.node_name);
        if self.graph.has_process(&name) {
            return;
        }

        let metadata = metadata.as_deref().map(parse_metadata).unwrap_or_default();
        self.graph
            .add_process(Process::new(name, component).with_metadata(metadata));
    }

    /// `process.port:exportedName`. Anything else is ignored.
    fn exported_port(&self) -> Option<(String, Endpoint)> {
        let (endpoint, name) = split_exactly_once(self.captured(), ':')?;
        let (process, port) = split_exactly_once(endpoint, '.')?;
        let endpoint = self.endpoint(process.trim(), port.trim());
        Some((name.trim().to_string(), endpoint))
    }
}

fn split_exactly_once(text: &str, separator: char) -> Option<(&str, &str)> {
    let (head, tail) = text.split_once(separator)?;
    if tail.contains(separator) {
        return None;
    }
    Some((head, tail))
}

/// `key=value` pairs separated by commas. A pair without `=` maps to `""`.
pub fn parse_metadata(text: &str) -> IndexMap<String, String> {
    text.split(',')
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
            None => (pair.trim().to_string(), String::new()),
        })
        .collect()
}

fn unescape_iip(text: &str) -> String {
    text.replace("\\'", "'")
}
