//! CLI Tooling
//!
//! Command-line interface components.

pub mod cli;
