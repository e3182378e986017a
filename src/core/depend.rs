//! C2 — Dependency Locator.
//!
//! Matches each manifest requirement against the user's `--analyze-deps`
//! prefixes, resolves a cache directory for the ones that match, and skips
//! (with a warning) anything that doesn't exist on disk.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::core::manifest::Requirement;
use crate::core::model::AnalysisTarget;
use crate::error::AnalysisError;
use crate::utils::{escape_module_path, verbose_warn, warn};

/// Discovers the module cache root: `--gopath` if given, else `go env
/// GOMODCACHE`, else the `GOMODCACHE` environment variable if it points at
/// an existing directory.
pub fn discover_cache_root(explicit: Option<&Path>) -> Result<PathBuf, AnalysisError> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }

    match Command::new("go").args(["env", "GOMODCACHE"]).output() {
        Ok(out) if out.status.success() => {
            let text = String::from_utf8_lossy(&out.stdout).trim().to_string();
            if !text.is_empty() {
                return Ok(PathBuf::from(text));
            }
        }
        _ => {}
    }

    if let Ok(env_path) = env::var("GOMODCACHE") {
        let candidate = PathBuf::from(env_path);
        if candidate.is_dir() {
            return Ok(candidate);
        }
    }

    Err(AnalysisError::ModuleCacheUndiscoverable {
        reason: "no --gopath given, `go env GOMODCACHE` did not succeed, and GOMODCACHE is unset or not a directory".into(),
    })
}

/// Resolves the on-disk directory for one requirement, or `None` if it
/// doesn't exist.
pub fn resolve_requirement_dir(cache_root: &Path, req: &Requirement) -> Option<PathBuf> {
    let escaped = escape_module_path(&req.module_path);
    let dir = cache_root.join(format!("{escaped}@{}", req.version));
    dir.is_dir().then_some(dir)
}

/// Builds the list of dependency [`AnalysisTarget`]s: every requirement
/// whose module path starts with one of `prefixes` and whose cache
/// directory exists.
///
/// Per-dependency skip detail only prints under `--verbose`; a
/// summary-level count of how many were skipped always prints when
/// `skipped > 0`.
pub fn resolve_targets(
    requirements: &[Requirement],
    prefixes: &[String],
    cache_root: &Path,
    verbose: bool,
) -> Vec<AnalysisTarget> {
    let mut targets = Vec::new();
    let mut skipped = 0usize;
    for req in requirements {
        let matched = prefixes.iter().any(|p| req.module_path.starts_with(p.trim()));
        if !matched {
            continue;
        }
        match resolve_requirement_dir(cache_root, req) {
            Some(fs_root) => targets.push(AnalysisTarget { fs_root, module_path: req.module_path.clone() }),
            None => {
                skipped += 1;
                verbose_warn(
                    verbose,
                    format!(
                        "dependency {} {} not found in module cache, skipping",
                        req.module_path, req.version
                    ),
                );
            }
        }
    }
    if skipped > 0 {
        warn(format!("{skipped} dependenc{} skipped (not found in module cache); rerun with --verbose for detail", if skipped == 1 { "y" } else { "ies" }));
    }
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn req(path: &str, version: &str) -> Requirement {
        Requirement { module_path: path.into(), version: version.into() }
    }

    #[test]
    fn resolve_requirement_dir_escapes_uppercase() {
        let dir = tempdir().unwrap();
        let escaped_dir = dir.path().join("github.com/!burnt!sushi/toml@v1.0.0");
        std::fs::create_dir_all(&escaped_dir).unwrap();

        let resolved =
            resolve_requirement_dir(dir.path(), &req("github.com/BurntSushi/toml", "v1.0.0"));
        assert_eq!(resolved, Some(escaped_dir));
    }

    #[test]
    fn resolve_targets_skips_missing_and_unmatched() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("github.com/a/b@v1.0.0")).unwrap();

        let reqs = vec![
            req("github.com/a/b", "v1.0.0"),
            req("github.com/a/c", "v2.0.0"), // matches prefix, missing on disk
            req("golang.org/x/sync", "v0.1.0"), // doesn't match prefix
        ];
        let targets = resolve_targets(&reqs, &["github.com/a".to_string()], dir.path(), false);
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].module_path, "github.com/a/b");
    }
}
