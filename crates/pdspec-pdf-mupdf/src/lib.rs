use std::path::Path;

use mupdf::{Document, TextPageFlags};

use pdspec_core::{BackendError, PageSource, PdfBackend};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island: it isolates the mupdf dependency
/// (which is AGPL-3.0) so the parsing and reporting crates do not
/// transitively depend on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for MupdfBackend {
    fn open(&self, path: &Path) -> Result<Box<dyn PageSource>, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::Open("invalid path encoding".into()))?;

        let document = Document::open(path_str).map_err(|e| BackendError::Open(e.to_string()))?;
        let page_count = document
            .page_count()
            .map_err(|e| BackendError::Open(e.to_string()))? as usize;

        Ok(Box::new(MupdfPageSource {
            document,
            page_count,
        }))
    }
}

struct MupdfPageSource {
    document: Document,
    page_count: usize,
}

impl PageSource for MupdfPageSource {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn page_text(&self, index: usize) -> Result<String, BackendError> {
        let page = self
            .document
            .load_page(index as i32)
            .map_err(|e| BackendError::Extraction(e.to_string()))?;
        let text_page = page
            .to_text_page(TextPageFlags::empty())
            .map_err(|e| BackendError::Extraction(e.to_string()))?;

        // Block/line iteration preserves the line breaks the TOC line
        // parser depends on.
        let mut page_text = String::new();
        for block in text_page.blocks() {
            for line in block.lines() {
                let line_text: String = line
                    .chars()
                    .map(|c| c.char().unwrap_or('\u{FFFD}'))
                    .collect();
                page_text.push_str(&line_text);
                page_text.push('\n');
            }
        }
        Ok(page_text)
    }
}
