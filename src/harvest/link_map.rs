//! Label -> links mapping produced by the multi-page collector

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered URLs scraped from one page, in document order, duplicates kept
pub type LinkSet = Vec<String>;

/// Mapping from a page label to the links scraped from that page
///
/// Labels iterate in the order they were first inserted. Inserting a label
/// that already exists replaces its links but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledLinkMap {
    entries: Vec<(String, LinkSet)>,
}

impl LabeledLinkMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `label -> links`, returning the links previously stored under `label`
    pub fn insert(&mut self, label: String, links: LinkSet) -> Option<LinkSet> {
        match self.entries.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, slot)) => Some(std::mem::replace(slot, links)),
            None => {
                self.entries.push((label, links));
                None
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<&LinkSet> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, links)| links)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LinkSet)> {
        self.entries.iter().map(|(label, links)| (label.as_str(), links))
    }

    /// Total number of links across all labels
    pub fn total_links(&self) -> usize {
        self.entries.iter().map(|(_, links)| links.len()).sum()
    }
}

impl Serialize for LabeledLinkMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, links) in &self.entries {
            map.serialize_entry(label, links)?;
        }
        map.end()
    }
}
