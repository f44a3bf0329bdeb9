use std::path::Path;

use thiserror::Error;

pub mod metadata;
pub mod slicer;
pub mod tags;
pub mod toc;

pub use metadata::MetadataCollector;
pub use slicer::{section_page_range, slice_sections};
pub use tags::TagMap;
pub use toc::{TocExtractor, TocLine, build_toc_entries, parse_toc_line};
// Re-export domain types from core (canonical definitions live there)
pub use pdspec_core::{BackendError, DocMetadata, PageSource, PdfBackend, SpecSection, TocEntry};

#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("backend error: {0}")]
    Backend(#[from] pdspec_core::BackendError),
}

/// Extract the hierarchical TOC index from a PDF file.
///
/// Pipeline:
/// 1. Open the document via `backend`
/// 2. Gather non-empty trimmed lines from the TOC pages
/// 3. Parse each line against the `<id> <title> <page>` pattern
/// 4. Derive level, parent id, and full path per matched line
///
/// Non-matching lines (page headers, footers, dot-leader noise) are
/// dropped silently; only the document open can fail.
pub fn extract_toc(
    pdf_path: &Path,
    backend: &dyn PdfBackend,
    doc_title: &str,
    start_page: u32,
    end_page: u32,
) -> Result<Vec<TocEntry>, ParsingError> {
    let source = backend.open(pdf_path)?;
    Ok(TocExtractor::new(doc_title).extract(source.as_ref(), start_page, end_page))
}

/// Slice a PDF into per-section page ranges and classify keyword tags.
///
/// `progress` is invoked once per TOC entry before its pages are read.
/// Per-page extraction failures degrade to empty text; only the document
/// open can fail.
pub fn extract_sections(
    pdf_path: &Path,
    backend: &dyn PdfBackend,
    entries: &[TocEntry],
    tag_map: &TagMap,
    progress: impl FnMut(usize, &TocEntry),
) -> Result<Vec<SpecSection>, ParsingError> {
    let source = backend.open(pdf_path)?;
    Ok(slice_sections(entries, source.as_ref(), tag_map, progress))
}
