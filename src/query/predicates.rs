//! Building blocks shared by every collection filter.
//!
//! Three kinds of predicate exist: a free-text keyword match over a fixed set
//! of fields, a categorical selection where "nothing selected" means "no
//! filter", and an inclusive numeric lower bound.

use std::collections::BTreeSet;

/// Returns true when `query` is empty or appears, case-insensitively, as a
/// substring of at least one of `fields`.
///
/// The query is used verbatim: it is not trimmed and not tokenized, so
/// `"ai "` only matches fields containing `ai` followed by a space.
///
/// # Examples
///
/// ```
/// use aecintel::query::predicates::contains_keyword;
///
/// assert!(contains_keyword("", ["anything"]));
/// assert!(contains_keyword("METRO", ["Sydney Metro extension"]));
/// assert!(!contains_keyword("metro", ["Airport", "Rail"]));
/// ```
pub fn contains_keyword<'a, I>(query: &str, fields: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    if query.is_empty() {
        return true;
    }
    let needle = fold_case(query);
    fields
        .into_iter()
        .any(|field| fold_case(field).contains(&needle))
}

/// Lowercases one character at a time, without context rules.
///
/// Keyword matching and match highlighting both fold through this, so a
/// record that matches always has highlight ranges to show.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Inclusive lower bound: a value exactly at the threshold passes.
#[must_use]
pub fn meets_threshold(value: f64, threshold: f64) -> bool {
    value >= threshold
}

/// A set of selected categorical values.
///
/// An empty selection admits everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T: Ord> {
    values: BTreeSet<T>,
}

impl<T: Ord> Default for Selection<T> {
    fn default() -> Self {
        Self {
            values: BTreeSet::new(),
        }
    }
}

impl<T: Ord> Selection<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True if nothing is selected or `value` is selected.
    pub fn admits(&self, value: &T) -> bool {
        self.values.is_empty() || self.values.contains(value)
    }

    /// True if nothing is selected or any of `values` is selected.
    ///
    /// Used for list-valued fields such as news categories.
    pub fn admits_any<'a, I>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        self.values.is_empty() || values.into_iter().any(|v| self.values.contains(v))
    }

    /// Adds `value` if absent, removes it if present. Returns whether it is
    /// now selected.
    pub fn toggle(&mut self, value: T) -> bool {
        if self.values.remove(&value) {
            false
        } else {
            self.values.insert(value);
            true
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.values.contains(value)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }
}

impl<T: Ord> FromIterator<T> for Selection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
