use serde::{Deserialize, Serialize};

pub mod backend;
pub mod config;
pub mod validate;

// Re-export for convenience
pub use backend::{BackendError, PageSource, PdfBackend};
pub use config::PipelineConfig;
pub use validate::{MissingSection, ValidationReport};

/// A single table-of-contents entry parsed from the document's TOC pages.
///
/// Entries appear in document page order; duplicate `section_id`s are kept
/// as-is rather than deduplicated, preserving document fidelity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    pub doc_title: String,
    /// Dotted-numeral section identifier, e.g. `"2.3.1"`.
    pub section_id: String,
    pub title: String,
    /// 1-based page number as printed in the TOC.
    pub page: u32,
    /// Nesting depth: number of dots in `section_id` plus one.
    pub level: u32,
    /// `section_id` with its last dot-segment removed; `None` at top level.
    pub parent_id: Option<String>,
    /// `"{section_id} {title}"`.
    pub full_path: String,
}

/// A TOC entry augmented with keyword-derived tags.
///
/// Derived once from a [`TocEntry`] plus the text of the entry's page
/// range; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecSection {
    #[serde(flatten)]
    pub entry: TocEntry,
    /// Assigned tags, in tag-map insertion order.
    pub tags: Vec<String>,
}

/// The document metadata record.
///
/// All fields except `raw_header` are static configuration values; see
/// [`config::PipelineConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocMetadata {
    pub doc_title: String,
    pub revision: String,
    pub version: String,
    pub release_date: String,
    pub publisher: String,
    /// Raw text of the document's first page; empty when extraction fails.
    pub raw_header: String,
}
