//! C3 — Source Walker.
//!
//! Walks a filesystem root collecting `.go` files, excluding `_test.go`
//! files and anything matching a `--skip` substring.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Collects every admitted `.go` file under `root`, depth-first.
///
/// A `skip` entry prunes a whole directory subtree if it matches anywhere
/// in that directory's path relative to `root`, or excludes a single file
/// if it matches anywhere in the file's relative path — not just the
/// final path component, so a substring spanning a `/` (e.g. `pkg/gen`)
/// still prunes. Empty skip substrings are ignored.
pub fn collect_go_files(root: &Path, skip: &[String]) -> Vec<PathBuf> {
    let skip: Vec<&str> = skip.iter().map(String::as_str).filter(|s| !s.is_empty()).collect();

    let mut files = Vec::new();
    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        if entry.path() == root {
            return true;
        }
        let rel = relative_traversal_path(root, entry.path());
        !skip.iter().any(|pattern| rel.contains(pattern))
    });

    for entry in walker.filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !name.ends_with(".go") || name.ends_with("_test.go") {
            continue;
        }
        files.push(entry.into_path());
    }

    files
}

/// `path`'s position relative to `root`, slash-joined regardless of host
/// OS, so skip substrings match against the whole traversal path rather
/// than a single component.
fn relative_traversal_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, "/")
}
