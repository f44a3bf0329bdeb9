use std::io::Write;
use std::path::Path;

use pdspec_core::ValidationReport;

use crate::ReportError;

/// Write the cross-validation report as a single-sheet CSV spreadsheet.
///
/// Layout: a header row, a summary row with the raw counts, a blank
/// separator row, a missing-sections header, then one `section_id,title`
/// row per missing entry.
pub fn write_validation_report(report: &ValidationReport, path: &Path) -> Result<(), ReportError> {
    let mut out = String::from("Check,TOC Count,Parsed Count,Missing Count\n");
    out.push_str(&format!(
        "Section Count,{},{},{}\n",
        report.toc_count,
        report.parsed_count,
        report.missing_count()
    ));
    out.push('\n');
    out.push_str("Missing TOC Sections in Parsed\n");
    for missing in &report.missing {
        out.push_str(&format!(
            "{},{}\n",
            csv_escape(&missing.section_id),
            csv_escape(&missing.title)
        ));
    }

    let mut file = std::fs::File::create(path)?;
    file.write_all(out.as_bytes())?;
    Ok(())
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
