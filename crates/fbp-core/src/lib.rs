#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Shared building blocks for the FBP toolchain.
//!
//! - [`LineIndex`]: byte offsets to 1-based line/column positions
//! - [`Colors`]: ANSI palette for CLI and trace output

mod colors;
mod position;

#[cfg(test)]
mod position_tests;

pub use colors::Colors;
pub use position::{LineIndex, Position};
