use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{SpecSection, TocEntry};

/// A TOC entry with no counterpart among the parsed sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingSection {
    pub section_id: String,
    pub title: String,
}

/// Cross-validation summary of the TOC index against the parsed sections.
///
/// A derived, read-only view: it holds raw counts of both collections and
/// the set difference of their section ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub toc_count: usize,
    pub parsed_count: usize,
    /// TOC ids absent from the parsed sections, sorted lexicographically.
    pub missing: Vec<MissingSection>,
}

impl ValidationReport {
    /// Compute `missing = toc_ids − parsed_ids` over the two collections.
    ///
    /// Counts are raw collection lengths (duplicates included); the
    /// difference is set-based. Titles come from the first TOC occurrence
    /// of each missing id, empty when no occurrence is found.
    pub fn compute(toc_entries: &[TocEntry], sections: &[SpecSection]) -> Self {
        let toc_ids: BTreeSet<&str> = toc_entries.iter().map(|e| e.section_id.as_str()).collect();
        let parsed_ids: BTreeSet<&str> = sections
            .iter()
            .map(|s| s.entry.section_id.as_str())
            .collect();

        // BTreeSet difference iterates in sorted order already.
        let missing = toc_ids
            .difference(&parsed_ids)
            .map(|id| MissingSection {
                section_id: (*id).to_string(),
                title: toc_entries
                    .iter()
                    .find(|e| e.section_id == *id)
                    .map(|e| e.title.clone())
                    .unwrap_or_default(),
            })
            .collect();

        Self {
            toc_count: toc_entries.len(),
            parsed_count: sections.len(),
            missing,
        }
    }

    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }
}
