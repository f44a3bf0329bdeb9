use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ReportError;

/// Write records as line-delimited JSON, one object per line, UTF-8.
pub fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), ReportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a line-delimited JSON record file produced by a prior stage.
///
/// A missing file is a hard error: downstream stages have no fallback
/// reconstruction path. Blank lines are tolerated.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ReportError> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    Ok(records)
}
