/// Ordered tag vocabulary: each tag owns a set of keyword phrases.
///
/// Insertion order is significant: a section's tag list comes out in the
/// order tags were registered, not alphabetically. Matching is plain
/// case-insensitive substring containment with no stemming or
/// tokenization, so a keyword can match inside an unrelated word.
#[derive(Debug, Clone, Default)]
pub struct TagMap {
    entries: Vec<(String, Vec<String>)>,
}

impl TagMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The USB PD tagging vocabulary.
    pub fn usb_pd() -> Self {
        let mut map = Self::new();
        map.insert("contracts", ["contract", "operational contract", "negotiation"]);
        map.insert("negotiation", ["negotiation", "negotiate"]);
        map.insert("epr", ["extended power range", "epr"]);
        map.insert("spr", ["standard power range", "spr"]);
        map.insert("pps", ["programmable power supply", "pps"]);
        map.insert("avs", ["adjustable voltage supply", "avs"]);
        map.insert("usb4", ["usb4"]);
        map.insert("charging", ["charge", "charging", "battery"]);
        map.insert("hub", ["hub", "hubs"]);
        map
    }

    /// Register a tag with its keyword phrases, after any existing tags.
    /// Keywords are normalized to lowercase at insertion.
    pub fn insert<T, K, I>(&mut self, tag: T, keywords: I)
    where
        T: Into<String>,
        K: AsRef<str>,
        I: IntoIterator<Item = K>,
    {
        let keywords = keywords
            .into_iter()
            .map(|kw| kw.as_ref().to_lowercase())
            .collect();
        self.entries.push((tag.into(), keywords));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Assign tags to `text` by substring containment, in insertion order.
    pub fn classify(&self, text: &str) -> Vec<String> {
        let haystack = text.to_lowercase();
        self.entries
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|kw| haystack.contains(kw.as_str())))
            .map(|(tag, _)| tag.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_assigns_tag() {
        let mut map = TagMap::new();
        map.insert("charging", ["charge", "battery"]);
        let tags = map.classify("this section covers battery safety");
        assert_eq!(tags, vec!["charging"]);
    }

    #[test]
    fn test_no_keyword_no_tags() {
        let mut map = TagMap::new();
        map.insert("charging", ["charge", "battery"]);
        assert!(map.classify("nothing relevant in here").is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let mut map = TagMap::new();
        map.insert("charging", ["BATTERY"]);
        assert_eq!(map.classify("Battery Safety"), vec!["charging"]);
    }

    #[test]
    fn test_substring_containment_inside_words() {
        // Intentionally crude: "charge" matches inside "discharged".
        let mut map = TagMap::new();
        map.insert("charging", ["charge"]);
        assert_eq!(map.classify("fully discharged cell"), vec!["charging"]);
    }

    #[test]
    fn test_tags_come_out_in_insertion_order() {
        let mut map = TagMap::new();
        map.insert("zeta", ["power"]);
        map.insert("alpha", ["power"]);
        map.insert("mid", ["absent keyword"]);
        map.insert("beta", ["power"]);
        assert_eq!(map.classify("power rules"), vec!["zeta", "alpha", "beta"]);
    }

    #[test]
    fn test_usb_pd_vocabulary_order() {
        let map = TagMap::usb_pd();
        assert_eq!(map.len(), 9);
        // "negotiation" keyword belongs to both contracts and negotiation;
        // contracts was registered first.
        let tags = map.classify("explicit negotiation of a contract");
        assert_eq!(tags, vec!["contracts", "negotiation"]);
    }
}
