//! CLI argument definitions using clap's derive API.
//!
//! Flat flags, no subcommands: every run does the same thing (analyze, then
//! optionally serve).

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about = "Static call-graph extraction for Go-style module projects", long_about = None)]
pub struct Arguments {
    /// Project root to analyze.
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Where to write the generated call-graph JSON.
    #[arg(long, default_value = "codemap.json")]
    pub out: PathBuf,

    /// Address to serve the codemap and visualizer on after analysis, e.g. 127.0.0.1:8787.
    /// Leave unset to skip serving.
    #[arg(long)]
    pub serve: Option<String>,

    /// Directory of static visualizer assets, served by --serve.
    #[arg(long, default_value = "./visualizer")]
    pub viz_dir: PathBuf,

    /// Module cache root override. Auto-discovered via `go env GOMODCACHE` (falling back to
    /// the GOMODCACHE environment variable) when not given.
    #[arg(long)]
    pub gopath: Option<PathBuf>,

    /// Comma-separated module path prefixes to analyze in addition to the primary module.
    #[arg(long, value_delimiter = ',', default_value = "")]
    pub analyze_deps: Vec<String>,

    /// Comma-separated substrings; a matching directory is pruned, a matching file is skipped.
    #[arg(long, value_delimiter = ',', default_value = "")]
    pub skip: Vec<String>,

    /// Enable verbose per-file/per-dependency diagnostics.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    pub fn analyze_deps(&self) -> Vec<String> {
        self.analyze_deps.iter().filter(|s| !s.is_empty()).cloned().collect()
    }

    pub fn skip(&self) -> Vec<String> {
        self.skip.iter().filter(|s| !s.is_empty()).cloned().collect()
    }
}
