mod json_file;
mod note_store;
mod settings_store;

pub use json_file::JsonFile;
pub use note_store::NoteStore;
pub use settings_store::{SettingsStore, DARK_THEME};
