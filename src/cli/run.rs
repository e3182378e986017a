//! Top-level run: resolve targets, analyze, write output, optionally serve.

use anyhow::Result;

use super::args::Arguments;
use crate::core::analyzer::{self, AnalysisOptions};
use crate::core::aggregate;

pub struct RunSummary {
    /// Number of emitted mappings, i.e. definitions with at least one
    /// observed caller — not the total number of declared functions/methods.
    pub mapped_definition_count: usize,
    pub call_site_count: usize,
    pub target_count: usize,
    pub out_path: std::path::PathBuf,
}

pub fn run(args: Arguments) -> Result<RunSummary> {
    let options = AnalysisOptions {
        gopath: args.gopath.clone(),
        analyze_deps: args.analyze_deps(),
        skip: args.skip(),
        verbose: args.verbose,
    };

    let targets = analyzer::resolve_targets(&args.path, &options)?;
    let result = analyzer::analyze(&targets, &options.skip, options.verbose);

    aggregate::write_json(&result.mappings, &args.out)?;

    let call_site_count = result.mappings.iter().map(|m| m.call_sites.len()).sum();
    let summary = RunSummary {
        mapped_definition_count: result.mappings.len(),
        call_site_count,
        target_count: result.target_count,
        out_path: args.out.clone(),
    };

    if let Some(addr) = &args.serve {
        serve(addr, &args.out, &args.viz_dir)?;
    }

    Ok(summary)
}

fn serve(addr: &str, out_path: &std::path::Path, viz_dir: &std::path::Path) -> Result<()> {
    let app = crate::server::build_app(out_path.to_path_buf(), viz_dir);
    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(crate::server::run_server(addr, app))?;
    Ok(())
}
