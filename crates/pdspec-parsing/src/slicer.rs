use pdspec_core::{PageSource, SpecSection, TocEntry};

use crate::tags::TagMap;

/// Compute the 0-based inclusive page range for the entry at `index`.
///
/// A section runs from its own start page to the page before the next
/// entry's start page; the final entry extends through the document's
/// last page. Both ends are clamped into `[0, last_page_index]`, and an
/// inverted range collapses to the single start page so that no entry is
/// ever skipped.
pub fn section_page_range(
    entries: &[TocEntry],
    index: usize,
    last_page_index: usize,
) -> (usize, usize) {
    let entry = &entries[index];
    let mut start = entry.page.saturating_sub(1) as usize;
    let mut end = match entries.get(index + 1) {
        Some(next) => (next.page as usize).saturating_sub(2),
        None => last_page_index,
    };

    if start > last_page_index {
        start = last_page_index;
    }
    if end > last_page_index {
        end = last_page_index;
    }
    if end < start {
        end = start;
    }
    (start, end)
}

/// Slice the document into per-section text ranges and classify tags.
///
/// Page text is lower-cased and newline-joined before classification;
/// pages that fail to extract contribute empty text. `progress` is
/// invoked once per entry before its pages are read.
pub fn slice_sections(
    entries: &[TocEntry],
    source: &dyn PageSource,
    tag_map: &TagMap,
    mut progress: impl FnMut(usize, &TocEntry),
) -> Vec<SpecSection> {
    let page_count = source.page_count();
    let mut sections = Vec::with_capacity(entries.len());

    for (index, entry) in entries.iter().enumerate() {
        progress(index, entry);

        let tags = if page_count == 0 {
            Vec::new()
        } else {
            let (start, end) = section_page_range(entries, index, page_count - 1);
            let text = collect_range_text(source, start, end);
            tag_map.classify(&text)
        };

        sections.push(SpecSection {
            entry: entry.clone(),
            tags,
        });
    }
    sections
}

fn collect_range_text(source: &dyn PageSource, start: usize, end: usize) -> String {
    let mut pages = Vec::with_capacity(end - start + 1);
    for index in start..=end {
        let text = match source.page_text(index) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(page = index + 1, error = %err, "failed to extract page text, substituting empty");
                String::new()
            }
        };
        if !text.is_empty() {
            pages.push(text.to_lowercase());
        }
    }
    pages.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    use pdspec_core::BackendError;

    fn entry(section_id: &str, page: u32) -> TocEntry {
        TocEntry {
            doc_title: "Doc".to_string(),
            section_id: section_id.to_string(),
            title: "Title".to_string(),
            page,
            level: section_id.matches('.').count() as u32 + 1,
            parent_id: section_id.rsplit_once('.').map(|(p, _)| p.to_string()),
            full_path: format!("{} Title", section_id),
        }
    }

    struct FakeSource {
        pages: Vec<Option<String>>,
    }

    impl FakeSource {
        fn of(pages: &[&str]) -> Self {
            Self {
                pages: pages.iter().map(|p| Some((*p).to_string())).collect(),
            }
        }
    }

    impl PageSource for FakeSource {
        fn page_count(&self) -> usize {
            self.pages.len()
        }

        fn page_text(&self, index: usize) -> Result<String, BackendError> {
            match self.pages.get(index) {
                Some(Some(text)) => Ok(text.clone()),
                Some(None) => Err(BackendError::Extraction("bad page".to_string())),
                None => Err(BackendError::Extraction("out of bounds".to_string())),
            }
        }
    }

    #[test]
    fn test_ranges_end_before_next_section() {
        let entries = vec![entry("1", 5), entry("2", 9), entry("3", 12)];
        assert_eq!(section_page_range(&entries, 0, 19), (4, 7));
        assert_eq!(section_page_range(&entries, 1, 19), (8, 10));
    }

    #[test]
    fn test_last_section_extends_to_last_page() {
        let entries = vec![entry("1", 5), entry("2", 12)];
        // The final section reaches the last page index, not the one before.
        assert_eq!(section_page_range(&entries, 1, 19), (11, 19));
    }

    #[test]
    fn test_inverted_range_collapses_to_start_page() {
        // Next entry starts on an earlier page than this one.
        let entries = vec![entry("1", 10), entry("2", 7)];
        assert_eq!(section_page_range(&entries, 0, 19), (9, 9));
    }

    #[test]
    fn test_out_of_bounds_range_is_clamped() {
        let entries = vec![entry("1", 50)];
        assert_eq!(section_page_range(&entries, 0, 19), (19, 19));
    }

    #[test]
    fn test_adjacent_sections_share_single_page() {
        // Two sections starting on the same page both get that page.
        let entries = vec![entry("1", 5), entry("1.1", 5)];
        assert_eq!(section_page_range(&entries, 0, 9), (4, 4));
        assert_eq!(section_page_range(&entries, 1, 9), (4, 9));
    }

    #[test]
    fn test_slice_assigns_tags_case_insensitively() {
        let entries = vec![entry("1", 1), entry("2", 2)];
        let source = FakeSource::of(&["This Section Covers BATTERY Safety", "No keywords here"]);
        let mut map = TagMap::new();
        map.insert("charging", ["charge", "battery"]);

        let sections = slice_sections(&entries, &source, &map, |_, _| {});
        assert_eq!(sections[0].tags, vec!["charging"]);
        assert!(sections[1].tags.is_empty());
    }

    #[test]
    fn test_slice_absorbs_failed_pages() {
        let entries = vec![entry("1", 1)];
        let source = FakeSource {
            pages: vec![None, Some("battery".to_string())],
        };
        let mut map = TagMap::new();
        map.insert("charging", ["battery"]);

        // Page 0 fails but the range continues through page 1.
        let sections = slice_sections(&entries, &source, &map, |_, _| {});
        assert_eq!(sections[0].tags, vec!["charging"]);
    }

    #[test]
    fn test_slice_empty_document_keeps_entries() {
        let entries = vec![entry("1", 1), entry("2", 9)];
        let source = FakeSource { pages: Vec::new() };
        let sections = slice_sections(&entries, &source, &TagMap::new(), |_, _| {});
        assert_eq!(sections.len(), 2);
        assert!(sections.iter().all(|s| s.tags.is_empty()));
    }

    #[test]
    fn test_slice_reports_progress_per_entry() {
        let entries = vec![entry("1", 1), entry("2", 1), entry("3", 1)];
        let source = FakeSource::of(&["text"]);
        let mut seen = Vec::new();
        slice_sections(&entries, &source, &TagMap::new(), |index, entry| {
            seen.push((index, entry.section_id.clone()));
        });
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[2], (2, "3".to_string()));
    }
}
