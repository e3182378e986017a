//! Thin `tree-sitter-go` parsing wrapper shared by both passes.

use tree_sitter::{Parser, Tree};

/// Parses Go source text. Returns `None` only if the grammar itself cannot
/// be loaded (should never happen); a syntactically broken file still
/// produces a tree with `ERROR` nodes, which callers simply yield fewer
/// declarations/call sites from.
pub fn parse_go(source: &str) -> Option<Tree> {
    let mut parser = Parser::new();
    parser.set_language(&tree_sitter_go::LANGUAGE.into()).ok()?;
    parser.parse(source, None)
}
