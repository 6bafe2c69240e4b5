//! Note storage and filtering engine for smartnotes.
//!
//! Notes and settings live in small JSON files. Each store loads its file
//! once when opened, never fails on a missing or corrupt file, and writes the
//! whole mapping back after every mutation.

pub mod error;
pub mod filter;
pub mod models;
pub mod storage;

pub use error::{Error, Result};
pub use filter::{filter_titles, sort_for_display, NoteFilter};
pub use models::{Note, SettingValue};
pub use storage::{JsonFile, NoteStore, SettingsStore};
