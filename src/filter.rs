//! Search-as-you-type filtering over named items.

use serde::{Deserialize, Serialize};

use crate::domain::Named;

/// The free-text term typed into a search menu.
///
/// Matching is a case-insensitive substring test against an item's name.
/// The lowercased form is cached so each keystroke folds case only once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SearchQuery {
    raw: String,
    folded: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(term: impl Into<String>) -> Self {
        let raw = term.into();
        let folded = raw.to_lowercase();
        Self { raw, folded }
    }

    /// The term exactly as typed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether `name` contains this term, ignoring case.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.folded.is_empty() || name.to_lowercase().contains(&self.folded)
    }

    /// Items whose name matches, in their original order.
    #[must_use]
    pub fn apply<'a, T: Named>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(item.name())).collect()
    }
}

impl From<String> for SearchQuery {
    fn from(term: String) -> Self {
        Self::new(term)
    }
}

impl From<&str> for SearchQuery {
    fn from(term: &str) -> Self {
        Self::new(term)
    }
}

impl From<SearchQuery> for String {
    fn from(query: SearchQuery) -> Self {
        query.raw
    }
}

/// Items whose name contains `query` case-insensitively, in original order.
///
/// An empty query yields every item.
#[must_use]
pub fn filter<T: Named + Clone>(items: &[T], query: &str) -> Vec<T> {
    SearchQuery::new(query)
        .apply(items)
        .into_iter()
        .cloned()
        .collect()
}
