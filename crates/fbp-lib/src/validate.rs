//! Post-parse validation hook.
//!
//! A grammatically valid document can still describe a graph a runtime
//! cannot execute. Checks of that kind plug in here; the default accepts
//! every graph.

use crate::graph::Graph;

pub trait Validator {
    fn validate(&self, graph: &Graph) -> Result<(), String>;
}

/// Accepts every graph.
#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl Validator for AcceptAll {
    fn validate(&self, _graph: &Graph) -> Result<(), String> {
        Ok(())
    }
}

impl<F> Validator for F
where
    F: Fn(&Graph) -> Result<(), String>,
{
    fn validate(&self, graph: &Graph) -> Result<(), String> {
        self(graph)
    }
}
