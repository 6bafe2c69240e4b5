use super::JsonFile;
use crate::filter::NoteFilter;
use crate::models::Note;
use crate::{Error, Result};
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::path::Path;

/// File-backed notes keyed by title.
///
/// The store loads its file once when opened. Every mutation rewrites the
/// whole file before returning. Only one process may use a given file.
pub struct NoteStore {
    file: JsonFile,
    notes: IndexMap<String, Note>,
}

impl NoteStore {
    /// Open the store at `path`.
    ///
    /// Never fails: a missing or unreadable file yields an empty store.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let mut store = Self {
            file: JsonFile::new(path),
            notes: IndexMap::new(),
        };
        store.load();
        store
    }

    /// Reload the mapping from disk, falling back to empty on any failure
    pub fn load(&mut self) {
        self.notes = match self.read_notes() {
            Ok(notes) => notes,
            Err(err) => {
                tracing::warn!(
                    path = %self.file.path().display(),
                    error = %err,
                    "failed to load notes, starting empty"
                );
                IndexMap::new()
            }
        };
    }

    fn read_notes(&self) -> Result<IndexMap<String, Note>> {
        if !self.file.exists() {
            tracing::debug!(path = %self.file.path().display(), "no notes file yet");
            return Ok(IndexMap::new());
        }
        let notes: IndexMap<String, Note> = self.file.read()?;
        tracing::debug!(path = %self.file.path().display(), count = notes.len(), "loaded notes");
        Ok(notes)
    }

    /// Write the mapping to disk, logging instead of returning any failure.
    /// The in-memory notes stay as they are either way.
    pub fn save(&self) {
        if let Err(err) = self.try_save() {
            tracing::error!(
                path = %self.file.path().display(),
                error = %err,
                "failed to save notes"
            );
        }
    }

    /// Write the mapping to disk
    pub fn try_save(&self) -> Result<()> {
        self.file.write(&self.notes)?;
        tracing::debug!(path = %self.file.path().display(), count = self.notes.len(), "saved notes");
        Ok(())
    }

    /// All titles in iteration order
    pub fn titles(&self) -> Vec<String> {
        self.notes.keys().cloned().collect()
    }

    /// A copy of the note, or an empty note if the title is unknown
    pub fn get(&self, title: &str) -> Note {
        self.notes.get(title).cloned().unwrap_or_default()
    }

    pub fn note(&self, title: &str) -> Option<&Note> {
        self.notes.get(title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.notes.contains_key(title)
    }

    /// Add a new note. Fails without touching the store if the title exists.
    pub fn add(&mut self, title: &str, content: &str, tags: Vec<String>) -> Result<()> {
        if self.notes.contains_key(title) {
            return Err(Error::DuplicateTitle(title.to_string()));
        }
        self.notes.insert(title.to_string(), Note::new(content, tags));
        self.save();
        Ok(())
    }

    /// Replace the content and tags of an existing note.
    ///
    /// Returns `false` without saving if there is no such note.
    pub fn update(&mut self, title: &str, content: &str, tags: Vec<String>) -> bool {
        match self.notes.get_mut(title) {
            Some(note) => {
                *note = Note::new(content, tags);
                self.save();
                true
            }
            None => false,
        }
    }

    /// Remove a note. Returns `false` without saving if there is no such note.
    pub fn delete(&mut self, title: &str) -> bool {
        if self.notes.shift_remove(title).is_none() {
            return false;
        }
        self.save();
        true
    }

    /// Titles containing `query` (case-insensitive) that carry `tag`, if given
    pub fn filter(&self, query: &str, tag: Option<&str>) -> Vec<String> {
        NoteFilter::new(query, tag).apply(&self.notes)
    }

    /// Every distinct tag in the store, sorted
    pub fn all_tags(&self) -> Vec<String> {
        collect_tags(self.notes.values())
    }

    /// Distinct tags of the given titles, sorted. Unknown titles are skipped.
    pub fn tags_of<I, S>(&self, titles: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        collect_tags(
            titles
                .into_iter()
                .filter_map(|t| self.notes.get(t.as_ref())),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Note)> {
        self.notes.iter()
    }

    /// Read-only view of the whole mapping
    pub fn notes(&self) -> &IndexMap<String, Note> {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Copy the notes file to `backup_path`
    pub fn backup<P: AsRef<Path>>(&self, backup_path: P) -> Result<()> {
        self.file.backup(backup_path)
    }
}

fn collect_tags<'a>(notes: impl Iterator<Item = &'a Note>) -> Vec<String> {
    notes
        .flat_map(|note| note.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
