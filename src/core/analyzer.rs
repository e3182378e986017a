//! Orchestrates the full pipeline: resolves targets (C1/C2), walks sources
//! (C3), runs the two-pass index-then-extract analysis (C4/C5) across every
//! target, and aggregates the result (C6).
//!
//! Pass 1 runs to completion and its index is frozen before any target
//! begins Pass 2, so a call site in one target can resolve against a
//! definition declared in another (e.g. a call into an analyzed dependency).

use std::path::{Path, PathBuf};

use crate::core::callsites::{extract_call_sites, CallSiteIndex};
use crate::core::definitions::{build_index, DefinitionIndex};
use crate::core::depend;
use crate::core::manifest;
use crate::core::model::{AnalysisTarget, Mapping};
use crate::core::walker::collect_go_files;
use crate::error::AnalysisError;
use crate::utils::{verbose_warn, warn};

pub struct AnalysisOptions {
    pub gopath: Option<PathBuf>,
    pub analyze_deps: Vec<String>,
    pub skip: Vec<String>,
    pub verbose: bool,
}

/// Resolves the primary target plus every matched, on-disk dependency.
pub fn resolve_targets(root: &Path, options: &AnalysisOptions) -> Result<Vec<AnalysisTarget>, AnalysisError> {
    let manifest = manifest::load(root)?;
    let mut targets = vec![AnalysisTarget { fs_root: root.to_path_buf(), module_path: manifest.module_path }];

    if !options.analyze_deps.is_empty() {
        let cache_root = depend::discover_cache_root(options.gopath.as_deref())?;
        targets.extend(depend::resolve_targets(
            &manifest.requirements,
            &options.analyze_deps,
            &cache_root,
            options.verbose,
        ));
    }

    Ok(targets)
}

pub struct AnalysisResult {
    pub mappings: Vec<Mapping>,
    pub target_count: usize,
}

pub fn analyze(targets: &[AnalysisTarget], skip: &[String], verbose: bool) -> AnalysisResult {
    let files_by_target: Vec<(&AnalysisTarget, Vec<PathBuf>)> = targets
        .iter()
        .map(|target| (target, collect_go_files(&target.fs_root, skip)))
        .collect();

    let mut index = DefinitionIndex::new();
    let mut cross_target_collisions = 0usize;
    for (target, files) in &files_by_target {
        for (id, def) in build_index(target, files, verbose) {
            if let Some(prev) = index.get(&id) {
                cross_target_collisions += 1;
                verbose_warn(
                    verbose,
                    format!(
                        "definition id collision across targets: {} redefined at {}:{} (previously {}:{})",
                        id,
                        def.file_path.display(),
                        def.line,
                        prev.file_path.display(),
                        prev.line
                    ),
                );
            }
            index.insert(id, def);
        }
    }
    if cross_target_collisions > 0 {
        warn(format!(
            "{cross_target_collisions} definition id collision(s) across targets; rerun with --verbose for detail"
        ));
    }

    let mut call_sites = CallSiteIndex::new();
    for (target, files) in &files_by_target {
        for (id, mut sites) in extract_call_sites(target, files, &index) {
            call_sites.entry(id).or_default().append(&mut sites);
        }
    }

    let mappings = crate::core::aggregate::build_mappings(&index, &call_sites);
    AnalysisResult { mappings, target_count: targets.len() }
}
