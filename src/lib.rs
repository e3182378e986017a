//! callmap - static call-graph extraction for Go-style module projects.
//!
//! callmap builds a function-level call graph for a single Go module (and,
//! optionally, selected dependencies resolved through the module cache): it
//! indexes every declared function and method, then attributes resolved
//! call sites back to the function that encloses them, and emits the result
//! as JSON. It can also serve that JSON alongside a static visualizer
//! directory over HTTP.
//!
//! ## Module Structure
//!
//! - `cli`: command-line interface layer
//! - `core`: the analysis engine (manifest/dependency resolution, source
//!   walking, the two-pass indexer/extractor pipeline, aggregation)
//! - `error`: the fatal error taxonomy
//! - `server`: the read-only HTTP static-serve adapter
//! - `utils`: shared utility functions

pub mod cli;
pub mod core;
pub mod error;
pub mod server;
pub mod utils;
