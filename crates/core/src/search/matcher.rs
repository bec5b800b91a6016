//! Destination matcher
//!
//! A destination matches when its normalized label contains the normalized
//! query, when any normalized alias contains the query, or when the query
//! contains any normalized alias. An empty query matches everything.
//! Results keep catalog order; there is no ranking and no cap.

use rhai_domain::{normalize, Destination};

/// Catalog entry with its search keys normalized once.
#[derive(Debug, Clone)]
struct IndexedDestination<'a> {
    destination: &'a Destination,
    label: String,
    aliases: Vec<String>,
}

impl<'a> IndexedDestination<'a> {
    fn new(destination: &'a Destination) -> Self {
        Self {
            destination,
            label: normalize(destination.label),
            aliases: destination.aliases.iter().map(|alias| normalize(alias)).collect(),
        }
    }

    /// `query` must already be normalized and non-empty.
    fn matches(&self, query: &str) -> bool {
        self.label.contains(query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.contains(query) || query.contains(alias.as_str()))
    }
}

/// Matcher over a catalog with cached normalized labels and aliases.
#[derive(Debug, Clone)]
pub struct DestinationMatcher<'a> {
    entries: Vec<IndexedDestination<'a>>,
}

impl<'a> DestinationMatcher<'a> {
    pub fn new(catalog: &'a [Destination]) -> Self {
        Self { entries: catalog.iter().map(IndexedDestination::new).collect() }
    }

    /// Destinations matching `query`, in catalog order.
    pub fn matches(&self, query: &str) -> Vec<&'a Destination> {
        let query = normalize(query);
        self.entries
            .iter()
            .filter(|entry| query.is_empty() || entry.matches(&query))
            .map(|entry| entry.destination)
            .collect()
    }
}

/// One-off match without keeping the normalized index around.
pub fn match_destinations<'a>(query: &str, catalog: &'a [Destination]) -> Vec<&'a Destination> {
    DestinationMatcher::new(catalog).matches(query)
}
