//! C1 — Module Resolver.
//!
//! Reads a `go.mod` file and extracts the module's own import path plus its
//! declared requirements. Only the forms needed downstream are recognized;
//! `replace` directives are parsed so they don't confuse the requirement
//! scanner but are never consulted.

use std::fs;
use std::path::Path;

use crate::error::AnalysisError;

/// One `require` entry: a module path paired with its pinned version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub module_path: String,
    pub version: String,
}

/// The parsed contents of a `go.mod` file relevant to call-graph analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub module_path: String,
    pub requirements: Vec<Requirement>,
}

/// Reads and parses `<dir>/go.mod`.
pub fn load(dir: &Path) -> Result<Manifest, AnalysisError> {
    let path = dir.join("go.mod");
    let contents = fs::read_to_string(&path).map_err(|_| AnalysisError::ManifestNotFound(path.clone()))?;
    parse(&contents).ok_or(AnalysisError::ManifestMalformed { path })
}

fn parse(contents: &str) -> Option<Manifest> {
    let mut module_path = None;
    let mut requirements = Vec::new();
    let mut in_require_block = false;

    for raw_line in contents.lines() {
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("module ") {
            module_path = Some(rest.trim().to_string());
            continue;
        }

        if line == "require (" {
            in_require_block = true;
            continue;
        }
        if in_require_block {
            if line == ")" {
                in_require_block = false;
                continue;
            }
            if let Some(req) = parse_requirement_tokens(line) {
                requirements.push(req);
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("require ") {
            if let Some(req) = parse_requirement_tokens(rest) {
                requirements.push(req);
            }
        }
    }

    module_path.map(|module_path| Manifest { module_path, requirements })
}

/// Strips a trailing `//` line comment (used for `// indirect` markers, which
/// are simply dropped — indirect-ness doesn't affect resolution).
fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn parse_requirement_tokens(text: &str) -> Option<Requirement> {
    let mut tokens = text.split_whitespace();
    let module_path = tokens.next()?.to_string();
    let version = tokens.next()?.to_string();
    Some(Requirement { module_path, version })
}
