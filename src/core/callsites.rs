//! C5 — Call-Site Extractor, Pass 2.
//!
//! Re-parses each file (trees from Pass 1 are not retained, keeping peak
//! memory bounded) and walks it maintaining a per-file import-alias map and
//! an explicit caller-ID stack: pushed on entering a top-level function or
//! method declaration, popped on exit. Function literals recurse without
//! pushing, so calls inside a closure are attributed to the innermost
//! *declared* function that encloses them.
//!
//! Callee resolution is purely syntactic: a bare identifier call resolves
//! against the current package, and a single-identifier-qualified selector
//! call resolves through the import-alias map. Anything else (method calls
//! on arbitrary expressions, chained selectors, dot/blank imports) is
//! dropped without attribution — call sites are only emitted when the
//! resolved callee id is present in the frozen [`DefinitionIndex`].

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tree_sitter::Node;

use crate::core::definitions::DefinitionIndex;
use crate::core::model::{AnalysisTarget, CallSite};
use crate::core::parse::parse_go;
use crate::core::pkgpath::{file_package_path, relative_slash_path};

/// Per-callee-id call sites collected across every target.
pub type CallSiteIndex = HashMap<String, Vec<CallSite>>;

pub fn extract_call_sites(
    target: &AnalysisTarget,
    files: &[PathBuf],
    index: &DefinitionIndex,
) -> CallSiteIndex {
    let per_file: Vec<Vec<(String, CallSite)>> =
        files.par_iter().map(|file| extract_file(target, file, index)).collect();

    let mut merged = CallSiteIndex::new();
    for entries in per_file {
        for (callee_id, site) in entries {
            merged.entry(callee_id).or_default().push(site);
        }
    }
    merged
}

fn extract_file(target: &AnalysisTarget, file: &Path, index: &DefinitionIndex) -> Vec<(String, CallSite)> {
    let source = match fs::read_to_string(file) {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };
    let Some(tree) = parse_go(&source) else {
        return Vec::new();
    };

    let pkg = file_package_path(target, file);
    let rel_file = relative_slash_path(target, file);
    let imports = collect_import_aliases(&tree.root_node(), &source);

    let mut out = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    walk(&tree.root_node(), &source, &rel_file, &pkg, &imports, index, &mut stack, &mut out);
    out
}

/// Builds the alias -> import path map for one file's `import` declarations.
/// The blank identifier (`_`) is excluded; an explicit alias is honored,
/// otherwise the import path's final segment is used as the default alias.
fn collect_import_aliases(root: &Node, source: &str) -> HashMap<String, String> {
    let mut aliases = HashMap::new();
    for spec in collect_import_specs(root) {
        let Some(path_node) = spec.child_by_field_name("path") else { continue };
        let Some(path_text) = node_text(&path_node, source) else { continue };
        let import_path = path_text.trim_matches('"').to_string();

        let alias = match spec.child_by_field_name("name") {
            Some(name_node) => node_text(&name_node, source).map(str::to_string),
            None => import_path.rsplit('/').next().map(str::to_string),
        };

        if let Some(alias) = alias {
            if alias != "_" && alias != "." {
                aliases.insert(alias, import_path);
            }
        }
    }
    aliases
}

fn collect_import_specs<'a>(node: &Node<'a>) -> Vec<Node<'a>> {
    let mut specs = Vec::new();
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "import_declaration" {
            collect_import_specs_rec(&child, &mut specs);
        }
    }
    specs
}

fn collect_import_specs_rec<'a>(node: &Node<'a>, out: &mut Vec<Node<'a>>) {
    if node.kind() == "import_spec" {
        out.push(*node);
        return;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect_import_specs_rec(&child, out);
    }
}

#[allow(clippy::too_many_arguments)]
fn walk(
    node: &Node,
    source: &str,
    file: &Path,
    pkg: &str,
    imports: &HashMap<String, String>,
    index: &DefinitionIndex,
    stack: &mut Vec<String>,
    out: &mut Vec<(String, CallSite)>,
) {
    match node.kind() {
        "function_declaration" => {
            if let Some(id) = top_level_function_id(node, source, pkg) {
                stack.push(id);
                walk_children(node, source, file, pkg, imports, index, stack, out);
                stack.pop();
                return;
            }
        }
        "method_declaration" => {
            if let Some(id) = top_level_method_id(node, source, pkg) {
                stack.push(id);
                walk_children(node, source, file, pkg, imports, index, stack, out);
                stack.pop();
                return;
            }
        }
        "call_expression" => {
            if let Some(callee_id) = resolve_callee(node, source, pkg, imports) {
                if index.contains_key(&callee_id) {
                    // A call at file-top-level scope (empty stack, e.g. a
                    // package-scope var initializer) has no caller to
                    // attribute to. Dropped silently, per spec's
                    // MissingCaller policy.
                    if let Some(caller_id) = stack.last() {
                        out.push((
                            callee_id,
                            CallSite {
                                file_path: file.to_path_buf(),
                                line: node.start_position().row as u32 + 1,
                                caller_id: caller_id.clone(),
                            },
                        ));
                    }
                }
            }
        }
        _ => {}
    }
    walk_children(node, source, file, pkg, imports, index, stack, out);
}

#[allow(clippy::too_many_arguments)]
fn walk_children(
    node: &Node,
    source: &str,
    file: &Path,
    pkg: &str,
    imports: &HashMap<String, String>,
    index: &DefinitionIndex,
    stack: &mut Vec<String>,
    out: &mut Vec<(String, CallSite)>,
) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(&child, source, file, pkg, imports, index, stack, out);
    }
}

fn top_level_function_id(node: &Node, source: &str, pkg: &str) -> Option<String> {
    let name = node_text(&node.child_by_field_name("name")?, source)?;
    Some(format!("{pkg}.{name}"))
}

fn top_level_method_id(node: &Node, source: &str, pkg: &str) -> Option<String> {
    let name = node_text(&node.child_by_field_name("name")?, source)?;
    let receiver = node.child_by_field_name("receiver")?;
    let mut cursor = receiver.walk();
    let param_decl = receiver.children(&mut cursor).find(|c| c.kind() == "parameter_declaration")?;
    let type_node = param_decl.child_by_field_name("type")?;
    let recv = node_text(&type_node, source)?.trim();
    Some(format!("{pkg}.{recv}.{name}"))
}

/// Resolves a call expression's callee to a definition id, if its shape is
/// one of the two syntactic forms this tool understands.
fn resolve_callee(call: &Node, source: &str, pkg: &str, imports: &HashMap<String, String>) -> Option<String> {
    let function_node = call.child_by_field_name("function")?;
    match function_node.kind() {
        "identifier" => {
            let name = node_text(&function_node, source)?;
            Some(format!("{pkg}.{name}"))
        }
        "selector_expression" => {
            let operand = function_node.child_by_field_name("operand")?;
            if operand.kind() != "identifier" {
                return None;
            }
            let alias = node_text(&operand, source)?;
            let import_path = imports.get(alias)?;
            let field = function_node.child_by_field_name("field")?;
            let name = node_text(&field, source)?;
            Some(format!("{import_path}.{name}"))
        }
        _ => None,
    }
}

fn node_text<'a>(node: &Node, source: &'a str) -> Option<&'a str> {
    source.get(node.byte_range())
}
