//! Rule tags carried by match records.

use std::fmt;

/// Every tag the grammar can commit to the match store.
///
/// Grammar productions come first, then `Text` for `<...>` captures, then the
/// zero-width action markers that drive the graph builder on replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rule {
    Start,
    Line,
    LineTerminator,
    Comment,
    Anychar,
    Connection,
    Bridge,
    Leftlet,
    Rightlet,
    Iip,
    Iipchar,
    Node,
    Component,
    CompMeta,
    Port,
    PortWithIndex,
    /// `_`: zero or more blanks.
    Ws,
    /// `__`: one or more blanks.
    Ws1,

    Text,

    ExportInport,
    ExportOutport,
    MarkInPort,
    MarkOutPort,
    EmitMiddlet,
    EmitLeftlet,
    EmitRightlet,
    CaptureIip,
    CaptureNodeName,
    EmitNode,
    CaptureComponent,
    CaptureMeta,
    CapturePort,
    CloseChain,
}

impl Rule {
    pub fn name(self) -> &'static str {
        match self {
            Rule::Start => "start",
            Rule::Line => "line",
            Rule::LineTerminator => "LineTerminator",
            Rule::Comment => "comment",
            Rule::Anychar => "anychar",
            Rule::Connection => "connection",
            Rule::Bridge => "bridge",
            Rule::Leftlet => "leftlet",
            Rule::Rightlet => "rightlet",
            Rule::Iip => "iip",
            Rule::Iipchar => "iipchar",
            Rule::Node => "node",
            Rule::Component => "component",
            Rule::CompMeta => "compMeta",
            Rule::Port => "port",
            Rule::PortWithIndex => "portWithIndex",
            Rule::Ws => "_",
            Rule::Ws1 => "__",
            Rule::Text => "Text",
            Rule::ExportInport => "ExportInport",
            Rule::ExportOutport => "ExportOutport",
            Rule::MarkInPort => "MarkInPort",
            Rule::MarkOutPort => "MarkOutPort",
            Rule::EmitMiddlet => "EmitMiddlet",
            Rule::EmitLeftlet => "EmitLeftlet",
            Rule::EmitRightlet => "EmitRightlet",
            Rule::CaptureIip => "CaptureIip",
            Rule::CaptureNodeName => "CaptureNodeName",
            Rule::EmitNode => "EmitNode",
            Rule::CaptureComponent => "CaptureComponent",
            Rule::CaptureMeta => "CaptureMeta",
            Rule::CapturePort => "CapturePort",
            Rule::CloseChain => "CloseChain",
        }
    }

    /// Action markers are zero-width and carry no grammar structure.
    pub fn is_action(self) -> bool {
        self > Rule::Text
    }

    /// Blank runs and single-character helpers: noise in tree dumps and
    /// diagnostics.
    pub fn is_trivia(self) -> bool {
        matches!(self, Rule::Ws | Rule::Ws1 | Rule::Anychar | Rule::Iipchar)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
