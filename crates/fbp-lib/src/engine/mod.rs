//! Backtracking match engine.
//!
//! Grammar productions drive a [`Matcher`], which appends one [`MatchRecord`]
//! per completed rule to a flat [`MatchStore`]. Nothing is interpreted during
//! matching; the committed records are replayed afterwards.

mod checkpoint;
mod cursor;
mod rule;
mod store;
mod trace;

#[cfg(test)]
mod trace_tests;

pub use checkpoint::{Checkpoint, CheckpointStack};
pub use cursor::Matcher;
pub use rule::Rule;
pub use store::{MatchRecord, MatchStore};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
