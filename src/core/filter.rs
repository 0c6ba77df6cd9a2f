//! # Filtering
//!
//! Substring matching over the collection. The result is a list of indices
//! into the collection, so the filtered view never copies or reorders names.

use crate::core::log_group::LogGroupCollection;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    #[default]
    CaseInsensitive,
    CaseSensitive,
}

impl MatchPolicy {
    pub fn from_case_sensitive(case_sensitive: bool) -> Self {
        if case_sensitive {
            MatchPolicy::CaseSensitive
        } else {
            MatchPolicy::CaseInsensitive
        }
    }

    pub fn matches(self, haystack: &str, needle: &str) -> bool {
        match self {
            MatchPolicy::CaseSensitive => haystack.contains(needle),
            MatchPolicy::CaseInsensitive => haystack.to_lowercase().contains(&needle.to_lowercase()),
        }
    }
}

/// Indices of every name containing `filter`, in collection order.
/// An empty filter selects everything.
pub fn filter_indices(collection: &LogGroupCollection, filter: &str, policy: MatchPolicy) -> Vec<usize> {
    if filter.is_empty() {
        return (0..collection.len()).collect();
    }
    collection
        .iter()
        .enumerate()
        .filter(|(_, name)| policy.matches(name.as_str(), filter))
        .map(|(i, _)| i)
        .collect()
}
