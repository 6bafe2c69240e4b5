use super::JsonFile;
use crate::models::SettingValue;
use crate::Result;
use indexmap::IndexMap;
use std::path::Path;

pub const DARK_THEME: &str = "dark_theme";

/// File-backed flat key/value preferences
pub struct SettingsStore {
    file: JsonFile,
    settings: IndexMap<String, SettingValue>,
}

impl SettingsStore {
    /// Open the store at `path`.
    ///
    /// A missing or unreadable file, or one that is not a JSON object, yields the
    /// defaults (`dark_theme = false`).
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let mut store = Self {
            file: JsonFile::new(path),
            settings: IndexMap::new(),
        };
        store.load();
        store
    }

    /// The mapping used when nothing valid is on disk
    pub fn defaults() -> IndexMap<String, SettingValue> {
        let mut settings = IndexMap::new();
        settings.insert(DARK_THEME.to_string(), SettingValue::Bool(false));
        settings
    }

    /// Reload from disk, falling back to the defaults on any failure
    pub fn load(&mut self) {
        if !self.file.exists() {
            tracing::debug!(path = %self.file.path().display(), "no settings file yet, using defaults");
            self.settings = Self::defaults();
            return;
        }

        self.settings = match self.file.read::<IndexMap<String, SettingValue>>() {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(
                    path = %self.file.path().display(),
                    error = %err,
                    "failed to load settings, using defaults"
                );
                Self::defaults()
            }
        };
    }

    /// Write settings to disk; failures are logged, not returned
    pub fn save(&self) {
        if let Err(err) = self.try_save() {
            tracing::error!(
                path = %self.file.path().display(),
                error = %err,
                "failed to save settings"
            );
        }
    }

    pub fn try_save(&self) -> Result<()> {
        self.file.write(&self.settings)?;
        tracing::debug!(path = %self.file.path().display(), "saved settings");
        Ok(())
    }

    /// The stored value, or `default` if the key is absent
    pub fn get(&self, key: &str, default: SettingValue) -> SettingValue {
        self.settings.get(key).cloned().unwrap_or(default)
    }

    /// The stored boolean, or `default` if absent or not a boolean
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.settings
            .get(key)
            .and_then(SettingValue::as_bool)
            .unwrap_or(default)
    }

    /// Insert or overwrite a setting and save immediately
    pub fn set(&mut self, key: &str, value: impl Into<SettingValue>) {
        self.settings.insert(key.to_string(), value.into());
        self.save();
    }

    pub fn dark_theme(&self) -> bool {
        self.get_bool(DARK_THEME, false)
    }

    /// Flip the theme flag, save, and return the new value
    pub fn toggle_dark_theme(&mut self) -> bool {
        let dark = !self.dark_theme();
        self.set(DARK_THEME, dark);
        dark
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SettingValue)> {
        self.settings.iter()
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::open(dir.path().join("settings.json"));

        assert_eq!(store.get(DARK_THEME, SettingValue::Bool(true)), SettingValue::Bool(false));
        assert!(!store.get_bool(DARK_THEME, false));
        assert!(!store.dark_theme());
    }

    #[test]
    fn test_corrupt_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        fs::write(&path, "dark_theme = true").unwrap();
        let store = SettingsStore::open(&path);
        assert_eq!(store.iter().count(), 1);
        assert!(!store.dark_theme());

        fs::write(&path, r#"["dark_theme"]"#).unwrap();
        assert!(!SettingsStore::open(&path).dark_theme());
    }

    #[test]
    fn test_null_and_nested_values_do_not_discard_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"dark_theme": true, "last_note": null, "window": {"w": 800}}"#).unwrap();

        let mut store = SettingsStore::open(&path);
        assert!(store.dark_theme());
        assert!(store.get("last_note", SettingValue::from("unset")).is_null());

        store.set("font_size", 12_i64);
        let reloaded = SettingsStore::open(&path);
        assert!(reloaded.dark_theme());
        assert!(reloaded.get("last_note", SettingValue::from("unset")).is_null());
        assert_eq!(
            reloaded.get("window", SettingValue::Null),
            SettingValue::Other(serde_json::json!({"w": 800}))
        );
    }

    #[test]
    fn test_integers_survive_rewrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"dark_theme": false, "font_size": 14, "big": 9007199254740993}"#).unwrap();

        let mut store = SettingsStore::open(&path);
        store.set(DARK_THEME, true);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"font_size\": 14,"));
        assert!(text.contains("\"big\": 9007199254740993"));
        assert!(!text.contains("14.0"));
        assert_eq!(SettingsStore::open(&path).get("font_size", SettingValue::Null).as_i64(), Some(14));
    }

    #[test]
    fn test_persist_failure_keeps_in_memory_change() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let mut store = SettingsStore::open(blocker.join("settings.json"));
        store.set(DARK_THEME, true);
        store.set("font_family", "Mono");

        assert!(store.dark_theme());
        assert_eq!(store.get("font_family", SettingValue::Null), SettingValue::from("Mono"));
        assert!(store.try_save().is_err());
        assert!(!blocker.join("settings.json").exists());
    }

    #[test]
    fn test_valid_file_is_used_as_is() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"font_size": 14}"#).unwrap();

        let store = SettingsStore::open(&path);
        assert_eq!(store.get("font_size", SettingValue::from(0_i64)), SettingValue::from(14_i64));
        assert_eq!(
            store.get(DARK_THEME, SettingValue::from("unset")),
            SettingValue::from("unset")
        );
    }

    #[test]
    fn test_set_persists_heterogeneous_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut store = SettingsStore::open(&path);
        store.set(DARK_THEME, true);
        store.set("font_family", "Segoe UI");
        store.set("font_size", 13_i64);

        let reloaded = SettingsStore::open(&path);
        assert!(reloaded.dark_theme());
        assert_eq!(reloaded.get("font_family", SettingValue::from("")), SettingValue::from("Segoe UI"));
        assert_eq!(reloaded.get("font_size", SettingValue::from(0_i64)), SettingValue::from(13_i64));
    }

    #[test]
    fn test_get_bool_ignores_other_types() {
        let dir = tempdir().unwrap();
        let mut store = SettingsStore::open(dir.path().join("settings.json"));
        store.set("flag", "yes");
        assert!(store.get_bool("flag", true));
        assert!(!store.get_bool("flag", false));
    }

    #[test]
    fn test_toggle_dark_theme() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut store = SettingsStore::open(&path);
        assert!(store.toggle_dark_theme());
        assert!(SettingsStore::open(&path).dark_theme());
        assert!(!store.toggle_dark_theme());
        assert!(!SettingsStore::open(&path).dark_theme());
    }
}
