use thiserror::Error;

pub mod jsonl;
pub mod report;

pub use jsonl::{read_records, write_records};
pub use report::write_validation_report;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),
}
