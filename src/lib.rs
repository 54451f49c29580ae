//! SauceView: render reverse image search results in a terminal.
//!
//! The library half of the binary: bootstrap (config, tracing, wiring),
//! the terminal rendering adapters and the CLI entry point.

pub mod bootstrap;
pub mod cli;
pub mod terminal;
