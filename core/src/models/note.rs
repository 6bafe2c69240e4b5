use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A note body as stored under its title.
///
/// The title is the key of the owning map, so it is not repeated here.
/// `content` is opaque to the store and may hold rich-text markup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Note {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    /// Create a note with the given content and tags
    pub fn new(content: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            content: content.into(),
            tags,
        }
    }

    /// Check whether the note carries `tag` (exact, case-sensitive match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Trim a user-entered title, rejecting titles that are blank.
pub fn normalize_title(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput("Note title cannot be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_default_is_empty() {
        let note = Note::default();
        assert_eq!(note.content, "");
        assert!(note.tags.is_empty());
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        let note = Note::new("body", vec!["Work".to_string()]);
        assert!(note.has_tag("Work"));
        assert!(!note.has_tag("work"));
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let note: Note = serde_json::from_str(r#"{"content": "only content"}"#).unwrap();
        assert_eq!(note.content, "only content");
        assert!(note.tags.is_empty());

        let note: Note = serde_json::from_str("{}").unwrap();
        assert_eq!(note, Note::default());
    }

    #[test]
    fn test_normalize_title() {
        assert_eq!(normalize_title("  Groceries ").unwrap(), "Groceries");
        assert!(matches!(normalize_title("   "), Err(Error::InvalidInput(_))));
        assert!(normalize_title("").is_err());
    }
}
