//! Core analysis engine: manifest/dependency resolution, source walking,
//! and the two-pass definition-index-then-call-site-extraction pipeline.
//!
//! ## Module Structure
//!
//! - `manifest`: C1, reads `go.mod`
//! - `depend`: C2, resolves dependency targets against the module cache
//! - `walker`: C3, collects analyzable `.go` files
//! - `parse`: shared `tree-sitter-go` parsing wrapper
//! - `pkgpath`: full package path computation
//! - `definitions`: C4, Pass 1 — builds the frozen definition index
//! - `callsites`: C5, Pass 2 — extracts and attributes call sites
//! - `aggregate`: C6, joins and serializes the result
//! - `analyzer`: orchestrates C1-C6 across every target
//! - `model`: the output data model

pub mod aggregate;
pub mod analyzer;
pub mod callsites;
pub mod definitions;
pub mod depend;
pub mod manifest;
pub mod model;
pub mod parse;
pub mod pkgpath;
pub mod walker;

pub use model::{AnalysisTarget, CallSite, Definition, Mapping};
