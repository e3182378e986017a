//! Output data model.
//!
//! Mirrors the JSON contract byte-for-byte: lower-camelCase fields, a
//! top-level array of [`Mapping`]s, no mapping with an empty `call_sites`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single declared function or method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    /// `fullPkgPath.name` for a free function, `fullPkgPath.recv.name` for a method.
    pub id: String,
    pub name: String,
    pub package: String,
    pub file_path: PathBuf,
    pub line: u32,
}

/// A resolved call site attributed to its innermost enclosing declared function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSite {
    pub file_path: PathBuf,
    pub line: u32,
    pub caller_id: String,
}

/// A definition together with every call site that resolved to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    pub definition: Definition,
    pub call_sites: Vec<CallSite>,
}

/// One root to analyze: a filesystem directory paired with the module path
/// declared by the `go.mod` at its root (or reachable through it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTarget {
    pub fs_root: PathBuf,
    pub module_path: String,
}

/// Sorts a mapping's call sites by `(file_path, line, caller_id)` so output
/// is deterministic regardless of traversal/merge order.
pub fn sort_call_sites(call_sites: &mut [CallSite]) {
    call_sites.sort_by(|a, b| {
        (&a.file_path, a.line, &a.caller_id).cmp(&(&b.file_path, b.line, &b.caller_id))
    });
}
