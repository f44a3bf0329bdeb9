use std::path::PathBuf;

/// Configuration for a full extraction run.
///
/// One instance is built by the driver and passed into each stage; no
/// stage reads process-wide state.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub pdf_path: PathBuf,
    /// Directory receiving intermediate record files and the report.
    pub output_dir: PathBuf,
    /// Document title stamped into every emitted record.
    pub doc_title: String,
    /// 1-based first page of the table of contents.
    pub toc_start_page: u32,
    /// 1-based last page of the table of contents (inclusive).
    pub toc_end_page: u32,
    pub revision: String,
    pub version: String,
    pub release_date: String,
    pub publisher: String,
}

impl Default for PipelineConfig {
    /// Defaults target the USB PD Rev 3.2 V1.1 (October 2024) release.
    fn default() -> Self {
        Self {
            pdf_path: PathBuf::from("data/USB_PD_R3_2 V1_1_2024_10.pdf"),
            output_dir: PathBuf::from("output"),
            doc_title: "USB Power Delivery Specification Rev 3.2 V1.1 2024-10".to_string(),
            toc_start_page: 13,
            toc_end_page: 18,
            revision: "3.2".to_string(),
            version: "1.1".to_string(),
            release_date: "October 2024".to_string(),
            publisher: "USB-IF".to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn metadata_path(&self) -> PathBuf {
        self.output_dir.join("usb_pd_metadata.jsonl")
    }

    pub fn toc_path(&self) -> PathBuf {
        self.output_dir.join("usb_pd_toc.jsonl")
    }

    pub fn sections_path(&self) -> PathBuf {
        self.output_dir.join("usb_pd_spec.jsonl")
    }

    pub fn report_path(&self) -> PathBuf {
        self.output_dir.join("validation_report.csv")
    }
}
