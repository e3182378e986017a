//! Computes a file's full package path: the owning [`AnalysisTarget`]'s
//! module path plus the file's directory relative to the target's
//! filesystem root, joined with forward slashes regardless of platform
//! (Go import paths are always `/`-separated).

use std::path::{Path, PathBuf};

use crate::core::model::AnalysisTarget;

pub fn file_package_path(target: &AnalysisTarget, file: &Path) -> String {
    let rel_dir = file
        .strip_prefix(&target.fs_root)
        .ok()
        .and_then(|rel| rel.parent())
        .filter(|p| !p.as_os_str().is_empty());

    match rel_dir {
        Some(dir) => {
            let dir_str = dir.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/");
            format!("{}/{}", target.module_path, dir_str)
        }
        None => target.module_path.clone(),
    }
}

/// Normalizes `file` to a slash-separated path relative to `target.fs_root`,
/// as required of every `filePath` in the emitted output (spec.md invariant
/// 4). Falls back to the path as given, slash-normalized, if it isn't
/// actually under the target root.
pub fn relative_slash_path(target: &AnalysisTarget, file: &Path) -> PathBuf {
    let rel = file.strip_prefix(&target.fs_root).unwrap_or(file);
    PathBuf::from(rel.to_string_lossy().replace(std::path::MAIN_SEPARATOR, "/"))
}
