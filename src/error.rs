//! Fatal error taxonomy.
//!
//! Only the conditions that abort a run are represented here. Everything
//! recoverable (a skipped dependency, a file that failed to parse, an
//! unresolvable call site) is logged through [`crate::utils::warn`] and never
//! constructs an `AnalysisError`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("manifest at {path} has no `module` directive")]
    ManifestMalformed { path: PathBuf },

    #[error("could not determine the module cache root (no --gopath, GOMODCACHE unset, and `go env GOMODCACHE` failed: {reason})")]
    ModuleCacheUndiscoverable { reason: String },

    #[error("failed to write output to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to bind server to {addr}: {source}")]
    ServerBind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}
