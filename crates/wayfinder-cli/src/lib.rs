//! Campus wayfinder CLI library.
//!
//! This crate provides the pieces of the `wayfinder` command-line interface
//! that are worth testing without spawning a process: document source
//! resolution and output formatting.

pub mod config;
pub mod output;
