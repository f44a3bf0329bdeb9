use std::path::Path;

use pdspec_core::{BackendError, DocMetadata, PdfBackend, PipelineConfig};

/// Collects the document metadata record.
///
/// Collection never fails: if the document cannot be opened or the first
/// page yields no text, `raw_header` is left empty and the condition is
/// logged. All other fields are static values from the configuration.
pub struct MetadataCollector<'a> {
    config: &'a PipelineConfig,
}

impl<'a> MetadataCollector<'a> {
    pub fn new(config: &'a PipelineConfig) -> Self {
        Self { config }
    }

    pub fn collect(&self, backend: &dyn PdfBackend, pdf_path: &Path) -> DocMetadata {
        let raw_header = match first_page_text(backend, pdf_path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(
                    path = %pdf_path.display(),
                    error = %err,
                    "failed to extract first-page header text"
                );
                String::new()
            }
        };

        DocMetadata {
            doc_title: self.config.doc_title.clone(),
            revision: self.config.revision.clone(),
            version: self.config.version.clone(),
            release_date: self.config.release_date.clone(),
            publisher: self.config.publisher.clone(),
            raw_header,
        }
    }
}

fn first_page_text(backend: &dyn PdfBackend, path: &Path) -> Result<String, BackendError> {
    let source = backend.open(path)?;
    if source.page_count() == 0 {
        return Ok(String::new());
    }
    source.page_text(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pdspec_core::PageSource;

    fn config() -> PipelineConfig {
        PipelineConfig::default()
    }

    struct FixedBackend {
        pages: Vec<String>,
    }

    struct FixedSource {
        pages: Vec<String>,
    }

    impl PageSource for FixedSource {
        fn page_count(&self) -> usize {
            self.pages.len()
        }

        fn page_text(&self, index: usize) -> Result<String, BackendError> {
            self.pages
                .get(index)
                .cloned()
                .ok_or_else(|| BackendError::Extraction("out of bounds".to_string()))
        }
    }

    impl PdfBackend for FixedBackend {
        fn open(&self, _path: &Path) -> Result<Box<dyn PageSource>, BackendError> {
            Ok(Box::new(FixedSource {
                pages: self.pages.clone(),
            }))
        }
    }

    struct FailingBackend;

    impl PdfBackend for FailingBackend {
        fn open(&self, path: &Path) -> Result<Box<dyn PageSource>, BackendError> {
            Err(BackendError::Open(format!("no such file: {}", path.display())))
        }
    }

    #[test]
    fn test_collect_reads_first_page() {
        let config = config();
        let backend = FixedBackend {
            pages: vec!["Universal Serial Bus\nPower Delivery Specification".to_string()],
        };
        let meta = MetadataCollector::new(&config).collect(&backend, Path::new("spec.pdf"));
        assert_eq!(meta.doc_title, config.doc_title);
        assert_eq!(meta.revision, "3.2");
        assert_eq!(meta.version, "1.1");
        assert_eq!(meta.release_date, "October 2024");
        assert_eq!(meta.publisher, "USB-IF");
        assert!(meta.raw_header.starts_with("Universal Serial Bus"));
    }

    #[test]
    fn test_collect_degrades_on_open_failure() {
        let config = config();
        let meta =
            MetadataCollector::new(&config).collect(&FailingBackend, Path::new("missing.pdf"));
        assert_eq!(meta.raw_header, "");
        // Static fields are still populated.
        assert_eq!(meta.publisher, "USB-IF");
    }

    #[test]
    fn test_collect_handles_empty_document() {
        let config = config();
        let backend = FixedBackend { pages: Vec::new() };
        let meta = MetadataCollector::new(&config).collect(&backend, Path::new("empty.pdf"));
        assert_eq!(meta.raw_header, "");
    }
}
