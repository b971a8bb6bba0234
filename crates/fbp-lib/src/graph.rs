//! Graph model produced by a successful parse.
//!
//! Serializes to the common FBP JSON shape:
//!
//! ```json
//! {
//!   "processes": { "Read": { "component": "ReadFile" } },
//!   "connections": [ { "data": "file.txt", "tgt": { "process": "Read", "port": "IN" } } ],
//!   "inports": {},
//!   "outports": {}
//! }
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// A named instance of a component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Process {
    #[serde(skip)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub metadata: IndexMap<String, String>,
}

impl Process {
    pub fn new(name: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            component: Some(component.into()),
            metadata: IndexMap::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: IndexMap<String, String>) -> Self {
        self.metadata = metadata;
        self
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({})",
            self.name,
            self.component.as_deref().unwrap_or("")
        )
    }
}

/// A port on a process.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Endpoint {
    pub process: String,
    pub port: String,
}

impl Endpoint {
    pub fn new(process: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            process: process.into(),
            port: port.into(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.process, self.port)
    }
}

/// Where a connection's packets come from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum ConnectionSource {
    #[serde(rename = "src")]
    Process(Endpoint),
    /// Initial information packet.
    #[serde(rename = "data")]
    Data(String),
}

/// One arrow of a chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Connection {
    #[serde(flatten)]
    pub source: ConnectionSource,
    #[serde(rename = "tgt")]
    pub target: Endpoint,
}

impl Connection {
    pub fn between(source: Endpoint, target: Endpoint) -> Self {
        Self {
            source: ConnectionSource::Process(source),
            target,
        }
    }

    pub fn data(data: impl Into<String>, target: Endpoint) -> Self {
        Self {
            source: ConnectionSource::Data(data.into()),
            target,
        }
    }

    pub fn source_endpoint(&self) -> Option<&Endpoint> {
        match &self.source {
            ConnectionSource::Process(endpoint) => Some(endpoint),
            ConnectionSource::Data(_) => None,
        }
    }

    pub fn data_payload(&self) -> Option<&str> {
        match &self.source {
            ConnectionSource::Process(_) => None,
            ConnectionSource::Data(data) => Some(data),
        }
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            ConnectionSource::Process(source) => write!(f, "({} -> {})", source, self.target),
            ConnectionSource::Data(data) => write!(f, "('{}' -> {})", data, self.target),
        }
    }
}

/// Processes, connections and exported ports of one FBP document.
///
/// Processes keep declaration order and are unique by name. Connections keep
/// chain order. Exported ports are keyed by their exported name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    processes: IndexMap<String, Process>,
    connections: Vec<Connection>,
    inports: IndexMap<String, Endpoint>,
    outports: IndexMap<String, Endpoint>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
            && self.connections.is_empty()
            && self.inports.is_empty()
            && self.outports.is_empty()
    }

    pub fn processes(&self) -> impl ExactSizeIterator<Item = &Process> {
        self.processes.values()
    }

    pub fn process(&self, name: &str) -> Option<&Process> {
        self.processes.get(name)
    }

    pub fn has_process(&self, name: &str) -> bool {
        self.processes.contains_key(name)
    }

    /// Returns `false` and keeps the existing entry when the name is taken.
    pub fn add_process(&mut self, process: Process) -> bool {
        if self.processes.contains_key(&process.name) {
            return false;
        }
        self.processes.insert(process.name.clone(), process);
        true
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn add_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    pub fn inports(&self) -> &IndexMap<String, Endpoint> {
        &self.inports
    }

    pub fn outports(&self) -> &IndexMap<String, Endpoint> {
        &self.outports
    }

    /// Later declarations of the same exported name replace earlier ones.
    pub fn set_inport(&mut self, name: impl Into<String>, endpoint: Endpoint) {
        self.inports.insert(name.into(), endpoint);
    }

    pub fn set_outport(&mut self, name: impl Into<String>, endpoint: Endpoint) {
        self.outports.insert(name.into(), endpoint);
    }
}
