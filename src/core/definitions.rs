//! C4 — Definition Indexer, Pass 1.
//!
//! Parses every admitted file once, in parallel, and collects its top-level
//! function and method declarations. Results are merged sequentially into
//! one frozen index so that ID collisions are resolved deterministically
//! (last writer wins, in file-list order) instead of racing across threads —
//! the same parallel-collect/sequential-merge shape used for Phase 1
//! collection elsewhere in this pipeline.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tree_sitter::Node;

use crate::core::model::{AnalysisTarget, Definition};
use crate::core::parse::parse_go;
use crate::core::pkgpath::{file_package_path, relative_slash_path};
use crate::utils::{verbose_warn, warn};

pub type DefinitionIndex = HashMap<String, Definition>;

/// Parses `files` under `target` in parallel and merges the resulting
/// definitions into one index.
///
/// Per-file read/parse failures and per-definition id collisions only
/// print their detail line under `--verbose`; a summary-level count of
/// each always prints when nonzero.
pub fn build_index(target: &AnalysisTarget, files: &[PathBuf], verbose: bool) -> DefinitionIndex {
    let per_file: Vec<(Vec<Definition>, bool)> =
        files.par_iter().map(|file| extract_file(target, file, verbose)).collect();

    let mut index = DefinitionIndex::new();
    let mut parse_errors = 0usize;
    let mut collisions = 0usize;
    for (defs, failed) in per_file {
        if failed {
            parse_errors += 1;
        }
        for def in defs {
            if let Some(prev) = index.get(&def.id) {
                collisions += 1;
                verbose_warn(
                    verbose,
                    format!(
                        "definition id collision: {} redefined at {}:{} (previously defined at {}:{})",
                        def.id,
                        def.file_path.display(),
                        def.line,
                        prev.file_path.display(),
                        prev.line
                    ),
                );
            }
            index.insert(def.id.clone(), def);
        }
    }
    if parse_errors > 0 {
        warn(format!("{parse_errors} file(s) failed to read or parse and were skipped; rerun with --verbose for detail"));
    }
    if collisions > 0 {
        warn(format!("{collisions} definition id collision(s); rerun with --verbose for detail"));
    }
    index
}

/// Returns the file's definitions plus whether the file itself failed to
/// read or parse (contributing nothing).
fn extract_file(target: &AnalysisTarget, file: &Path, verbose: bool) -> (Vec<Definition>, bool) {
    let source = match fs::read_to_string(file) {
        Ok(s) => s,
        Err(err) => {
            verbose_warn(verbose, format!("failed to read {}: {err}", file.display()));
            return (Vec::new(), true);
        }
    };
    let Some(tree) = parse_go(&source) else {
        verbose_warn(verbose, format!("failed to parse {}", file.display()));
        return (Vec::new(), true);
    };

    let pkg = file_package_path(target, file);
    let rel_file = relative_slash_path(target, file);
    let mut defs = Vec::new();
    let mut cursor = tree.root_node().walk();
    for child in tree.root_node().children(&mut cursor) {
        match child.kind() {
            "function_declaration" => {
                if let Some(def) = function_definition(&child, &source, &rel_file, &pkg) {
                    defs.push(def);
                }
            }
            "method_declaration" => {
                if let Some(def) = method_definition(&child, &source, &rel_file, &pkg) {
                    defs.push(def);
                }
            }
            _ => {}
        }
    }
    (defs, false)
}

fn function_definition(node: &Node, source: &str, file: &Path, pkg: &str) -> Option<Definition> {
    let name_node = node.child_by_field_name("name")?;
    let name = node_text(&name_node, source)?.to_string();
    Some(Definition {
        id: format!("{pkg}.{name}"),
        name,
        package: pkg.to_string(),
        file_path: file.to_path_buf(),
        line: node.start_position().row as u32 + 1,
    })
}

fn method_definition(node: &Node, source: &str, file: &Path, pkg: &str) -> Option<Definition> {
    let name_node = node.child_by_field_name("name")?;
    let name = node_text(&name_node, source)?.to_string();
    let receiver_node = node.child_by_field_name("receiver")?;
    let recv = receiver_type_text(&receiver_node, source)?;
    Some(Definition {
        id: format!("{pkg}.{recv}.{name}"),
        name,
        package: pkg.to_string(),
        file_path: file.to_path_buf(),
        line: node.start_position().row as u32 + 1,
    })
}

/// Pretty-prints a method's receiver type by slicing the original source
/// text at the receiver type node's byte range, preserving pointer stars
/// and generic type parameters verbatim.
fn receiver_type_text(receiver_param_list: &Node, source: &str) -> Option<String> {
    let mut cursor = receiver_param_list.walk();
    let param_decl = receiver_param_list
        .children(&mut cursor)
        .find(|c| c.kind() == "parameter_declaration")?;
    let type_node = param_decl.child_by_field_name("type")?;
    node_text(&type_node, source).map(|s| s.trim().to_string())
}

fn node_text<'a>(node: &Node, source: &'a str) -> Option<&'a str> {
    source.get(node.byte_range())
}
