pub mod ast;
pub mod check;
pub mod graph;
pub mod source_loader;
pub mod trace;

#[cfg(test)]
mod source_loader_tests;
