use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// A JSON document on disk backing one store
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Create a handle for the given path. Nothing is read or written yet.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole document
    pub fn read<T: DeserializeOwned>(&self) -> Result<T> {
        let data = fs::read(&self.path)?;
        Ok(serde_json::from_slice(&data)?)
    }

    /// Replace the document with `value`.
    ///
    /// The JSON is written with a 4-space indent to a temporary file next to
    /// the target, which is then renamed over it. A crash mid-write leaves
    /// the previous document in place. An existing file keeps its permissions.
    pub fn write<T: Serialize>(&self, value: &T) -> Result<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(&dir)?;

        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        value.serialize(&mut serializer)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(&buf)?;
        // Keep the mode of the file being replaced.
        if let Ok(meta) = fs::metadata(&self.path) {
            tmp.as_file().set_permissions(meta.permissions())?;
        }
        tmp.persist(&self.path)?;
        Ok(())
    }

    /// Copy the current document to `backup_path`
    pub fn backup<P: AsRef<Path>>(&self, backup_path: P) -> Result<()> {
        fs::copy(&self.path, backup_path)?;
        Ok(())
    }

    // A bare file name has an empty parent, which means the working directory.
    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}
