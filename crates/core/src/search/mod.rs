//! Destination search
//!
//! Matches free-text queries against the fixed destination catalog and
//! derives what the search box shows and where a submit navigates.

pub mod matcher;

pub use matcher::{match_destinations, DestinationMatcher};
use rhai_domain::Destination;

/// Result count for the search box live region ("1 resultado", "3 resultados").
pub fn result_count_label(count: usize) -> String {
    if count == 1 {
        "1 resultado".to_string()
    } else {
        format!("{count} resultados")
    }
}

/// Landing path for a search submit: the first match, if any.
pub fn first_match_route(matches: &[&Destination]) -> Option<String> {
    matches.first().map(|destination| destination.path())
}
