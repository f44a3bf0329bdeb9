use once_cell::sync::Lazy;
use regex::Regex;

use pdspec_core::{PageSource, TocEntry};

/// `<section id> <title> <page>` with a dotted-numeral id. The title group
/// is lazy so the trailing page number is not swallowed into it.
static TOC_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+(?:\.\d+)*)\s+(.+?)\s+(\d+)$").unwrap());

/// Runs of two or more dots are visual fillers between title and page number.
static DOT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.{2,}").unwrap());

/// A matched TOC line before hierarchy derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocLine {
    pub section_id: String,
    pub title: String,
    pub page: u32,
}

/// Parse one stripped text line as a TOC entry.
///
/// Returns `None` for anything that does not fit the pattern: running
/// headers, page footers, wrapped title fragments, lines without a
/// trailing page number, or lines whose title is empty once dot leaders
/// are removed. Malformed lines are expected noise in page-extracted TOC
/// text, so a non-match is never an error.
pub fn parse_toc_line(line: &str) -> Option<TocLine> {
    // Ellipsis glyphs (and their mojibake byte form from mis-decoded
    // extractions) stand in for dot leaders; normalize to spaces first.
    let normalized = line.trim().replace("â€¦", " ").replace('…', " ");
    let caps = TOC_LINE_RE.captures(&normalized)?;

    let title = DOT_RUN_RE.replace_all(&caps[2], "").trim().to_string();
    if title.is_empty() {
        return None;
    }
    let page: u32 = caps[3].parse().ok()?;

    Some(TocLine {
        section_id: caps[1].to_string(),
        title,
        page,
    })
}

/// Derive hierarchical entries from matched lines, preserving input order.
///
/// `level` is the dot count plus one; `parent_id` drops the final
/// dot-segment. Duplicate section ids are kept as they appear.
pub fn build_toc_entries<I>(lines: I, doc_title: &str) -> Vec<TocEntry>
where
    I: IntoIterator<Item = TocLine>,
{
    lines
        .into_iter()
        .map(|line| {
            let level = line.section_id.matches('.').count() as u32 + 1;
            let parent_id = line
                .section_id
                .rsplit_once('.')
                .map(|(parent, _)| parent.to_string());
            let full_path = format!("{} {}", line.section_id, line.title);
            TocEntry {
                doc_title: doc_title.to_string(),
                section_id: line.section_id,
                title: line.title,
                page: line.page,
                level,
                parent_id,
                full_path,
            }
        })
        .collect()
}

/// Extracts and parses the table of contents from a document's TOC pages.
pub struct TocExtractor<'a> {
    doc_title: &'a str,
}

impl<'a> TocExtractor<'a> {
    pub fn new(doc_title: &'a str) -> Self {
        Self { doc_title }
    }

    /// Extract TOC entries from pages `start_page..=end_page` (1-based).
    ///
    /// Bounds are clamped to the document; a page whose extraction fails
    /// is skipped with a warning rather than aborting the scan.
    pub fn extract(
        &self,
        source: &dyn PageSource,
        start_page: u32,
        end_page: u32,
    ) -> Vec<TocEntry> {
        let lines = collect_page_lines(source, start_page, end_page);
        let parsed = lines.iter().filter_map(|line| parse_toc_line(line));
        build_toc_entries(parsed, self.doc_title)
    }
}

fn collect_page_lines(source: &dyn PageSource, start_page: u32, end_page: u32) -> Vec<String> {
    let mut lines = Vec::new();
    let page_count = source.page_count();
    if page_count == 0 || end_page < start_page {
        return lines;
    }

    let start = (start_page.max(1) - 1) as usize;
    let end = ((end_page.max(1) - 1) as usize).min(page_count - 1);
    if start > end {
        return lines;
    }

    for index in start..=end {
        let text = match source.page_text(index) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(page = index + 1, error = %err, "failed to extract TOC page, skipping");
                continue;
            }
        };
        lines.extend(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string),
        );
    }
    lines
}
