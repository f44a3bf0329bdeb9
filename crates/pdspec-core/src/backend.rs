use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    Open(String),
    #[error("failed to extract text: {0}")]
    Extraction(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// An opened paginated document with per-page text access.
///
/// Page indices are 0-based. A failed `page_text` call on one page must
/// not poison the source; callers are free to continue with other pages.
pub trait PageSource {
    fn page_count(&self) -> usize;

    /// Extract the text of the page at `index`.
    fn page_text(&self, index: usize) -> Result<String, BackendError>;
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level open/extract step; the structure
/// pipeline (TOC parsing, section slicing, tagging) lives in
/// `pdspec-parsing`.
pub trait PdfBackend: Send + Sync {
    /// Open a document for page-wise text extraction.
    fn open(&self, path: &Path) -> Result<Box<dyn PageSource>, BackendError>;
}
