use std::fmt;
use std::ops::Range;

use fbp_core::{LineIndex, Position};

use crate::engine::{MatchRecord, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    /// The rightmost character no alternative could consume.
    UnexpectedInput,
    /// The last match at one nesting depth before the parse gave up.
    NearRule,
}

impl DiagnosticKind {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnexpectedInput => "unexpected input",
            Self::NearRule => "parse error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    pub(crate) rule: Option<Rule>,
    pub(crate) depth: Option<u32>,
    /// Byte range shown to the user.
    pub(crate) range: Range<usize>,
    pub(crate) begin: Position,
    pub(crate) end: Position,
    pub(crate) text: String,
    pub(crate) message: String,
}

impl DiagnosticMessage {
    pub(crate) fn unexpected(source: &str, index: &LineIndex<'_>, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let found = source[offset..].chars().next();
        let end = offset + found.map_or(0, char::len_utf8);
        let message = match found {
            Some(c) => format!("unexpected {:?}", c),
            None => "unexpected end of input".to_string(),
        };

        Self {
            kind: DiagnosticKind::UnexpectedInput,
            rule: None,
            depth: None,
            range: offset..end,
            begin: index.position(offset),
            end: index.position(end),
            text: source[offset..end].to_string(),
            message,
        }
    }

    pub(crate) fn near(source: &str, index: &LineIndex<'_>, record: &MatchRecord) -> Self {
        let kind = DiagnosticKind::NearRule;
        Self {
            kind,
            rule: Some(record.rule),
            depth: Some(record.depth),
            range: record.range(),
            begin: index.position(record.begin as usize),
            end: index.position(record.end as usize),
            text: record.text(source).to_string(),
            message: format!("{} near {}", kind.fallback_message(), record.rule),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn rule(&self) -> Option<Rule> {
        self.rule
    }

    pub fn depth(&self) -> Option<u32> {
        self.depth
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn begin(&self) -> Position {
        self.begin
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::UnexpectedInput => {
                write!(f, "{} at {}", self.message, self.begin)
            }
            DiagnosticKind::NearRule => write!(
                f,
                "{} ({} - {}): {:?}",
                self.message, self.begin, self.end, self.text
            ),
        }
    }
}
