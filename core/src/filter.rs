//! Title filtering over a note mapping.
//!
//! Filtering is a pure function of the mapping, a query, and an optional tag,
//! so it can run against any `IndexMap` without a store.

use crate::models::Note;
use indexmap::IndexMap;

/// A title query plus an optional tag restriction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    query: String,
    tag: Option<String>,
}

impl NoteFilter {
    pub fn new(query: &str, tag: Option<&str>) -> Self {
        Self {
            query: query.to_lowercase(),
            tag: tag.map(str::to_string),
        }
    }

    /// True when the title contains the query (ignoring case) and the note
    /// carries the tag, if one is set. An empty query matches every title.
    pub fn matches(&self, title: &str, note: &Note) -> bool {
        let matches_query = title.to_lowercase().contains(&self.query);
        let matches_tag = self.tag.as_deref().map_or(true, |tag| note.has_tag(tag));
        matches_query && matches_tag
    }

    /// Matching titles in the mapping's iteration order
    pub fn apply(&self, notes: &IndexMap<String, Note>) -> Vec<String> {
        notes
            .iter()
            .filter(|(title, note)| self.matches(title, note))
            .map(|(title, _)| title.clone())
            .collect()
    }
}

/// Shorthand for `NoteFilter::new(query, tag).apply(notes)`
pub fn filter_titles(notes: &IndexMap<String, Note>, query: &str, tag: Option<&str>) -> Vec<String> {
    NoteFilter::new(query, tag).apply(notes)
}

/// Sort titles for a note list: case-insensitive, raw title as tiebreak.
pub fn sort_for_display(titles: &mut [String]) {
    titles.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });
}
