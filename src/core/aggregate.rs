//! C6 — Aggregator / Serializer.
//!
//! Joins the frozen definition index with the collected call sites into the
//! output [`Mapping`] list, drops any mapping with no call sites, and
//! serializes the result as a two-space-indented UTF-8 JSON array.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::core::callsites::CallSiteIndex;
use crate::core::definitions::DefinitionIndex;
use crate::core::model::{sort_call_sites, Mapping};
use crate::error::AnalysisError;

pub fn build_mappings(index: &DefinitionIndex, call_sites: &CallSiteIndex) -> Vec<Mapping> {
    let mut mappings: Vec<Mapping> = index
        .values()
        .filter_map(|definition| {
            let mut sites = call_sites.get(&definition.id).cloned().unwrap_or_default();
            if sites.is_empty() {
                return None;
            }
            sort_call_sites(&mut sites);
            Some(Mapping { definition: definition.clone(), call_sites: sites })
        })
        .collect();

    mappings.sort_by(|a, b| a.definition.id.cmp(&b.definition.id));
    mappings
}

pub fn write_json(mappings: &[Mapping], out_path: &Path) -> Result<(), AnalysisError> {
    let file = File::create(out_path)
        .map_err(|source| AnalysisError::OutputWrite { path: out_path.to_path_buf(), source })?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, mappings)
        .map_err(|err| AnalysisError::OutputWrite { path: out_path.to_path_buf(), source: err.into() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{CallSite, Definition};

    fn def(id: &str) -> Definition {
        Definition { id: id.into(), name: "F".into(), package: "p".into(), file_path: "f.go".into(), line: 1 }
    }

    #[test]
    fn drops_mappings_with_no_call_sites() {
        let mut index = DefinitionIndex::new();
        index.insert("p.F".into(), def("p.F"));
        index.insert("p.G".into(), def("p.G"));

        let mut call_sites = CallSiteIndex::new();
        call_sites.insert(
            "p.F".into(),
            vec![CallSite { file_path: "f.go".into(), line: 3, caller_id: "p.Main".into() }],
        );

        let mappings = build_mappings(&index, &call_sites);
        assert_eq!(mappings.len(), 1);
        assert_eq!(mappings[0].definition.id, "p.F");
    }
}
