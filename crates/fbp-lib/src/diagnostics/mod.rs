//! Parse failure diagnostics.
//!
//! A failed parse leaves the records of every abandoned attempt in the match
//! store. Grouping them by depth and taking the last one at each depth gives
//! the furthest partial matches, reported deepest first after the offending
//! character itself.

mod message;
mod printer;

#[cfg(test)]
mod tests;

use fbp_core::LineIndex;

pub use message::{DiagnosticKind, DiagnosticMessage};
pub use printer::DiagnosticsPrinter;

use crate::engine::MatchRecord;
use crate::tree::order_by_depth;

/// Collection of diagnostic messages from one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<DiagnosticMessage>);

impl Diagnostics {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// `explored` is the match store up to its high-water mark;
    /// `furthest` the rightmost offset where matching failed.
    pub(crate) fn from_failure(source: &str, explored: &[MatchRecord], furthest: usize) -> Self {
        let index = LineIndex::new(source);
        let mut diagnostics = Self::new();
        diagnostics.push(DiagnosticMessage::unexpected(source, &index, furthest));

        for level in order_by_depth(explored).iter().rev() {
            let last = level
                .iter()
                .rev()
                .map(|&i| &explored[i])
                .find(|r| !r.rule.is_action() && !r.rule.is_trivia());
            if let Some(record) = last {
                diagnostics.push(DiagnosticMessage::near(source, &index, record));
            }
        }

        diagnostics
    }

    pub fn push(&mut self, msg: DiagnosticMessage) {
        self.0.push(msg);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[DiagnosticMessage] {
        &self.0
    }

    /// Every diagnostic is an error; there are no warnings in this grammar.
    pub fn error_count(&self) -> usize {
        self.0.len()
    }

    pub fn has_errors(&self) -> bool {
        !self.0.is_empty()
    }

    /// The first unexpected-input entry, if any.
    pub fn primary(&self) -> Option<&DiagnosticMessage> {
        self.0
            .iter()
            .find(|d| d.kind == DiagnosticKind::UnexpectedInput)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer().source(source).render()
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.printer().source(source).colored(colored).render()
    }
}

impl IntoIterator for Diagnostics {
    type Item = DiagnosticMessage;
    type IntoIter = std::vec::IntoIter<DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticMessage;
    type IntoIter = std::slice::Iter<'a, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
