//! # Settings File
//!
//! A [`SettingsStore`] persisted as one JSON object mapping each key to its
//! value. Writes go to memory; call [`JsonSettingsStore::save`] to flush.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tenney_core::{SettingValue, SettingsStore};

#[derive(Debug)]
pub struct JsonSettingsStore {
    path: PathBuf,
    values: BTreeMap<String, SettingValue>,
    dirty: bool,
}

impl JsonSettingsStore {
    /// Opens the settings file at `path`.
    ///
    /// A missing file is not an error: the store starts empty and the file
    /// is created on the first [`save`](Self::save).
    ///
    /// Entries whose value is not a bool, number or string (for example a
    /// `null`) are dropped with a warning instead of failing the whole file.
    ///
    /// # Returns
    /// * `Ok(store)` - Loaded (or empty) store
    /// * `Err(e)` - The file exists but could not be read or is not a JSON object
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(data) => {
                let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(&data)
                    .with_context(|| format!("Invalid settings file {}", path.display()))?;
                decode_entries(raw)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file yet");
                BTreeMap::new()
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read settings file {}", path.display()));
            }
        };
        Ok(Self {
            path,
            values,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are changes not yet written to disk.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Writes all values to disk, creating parent directories as needed.
    pub fn save(&mut self) -> Result<()> {
        write_json(&self.path, &self.values)?;
        self.dirty = false;
        tracing::debug!(path = %self.path.display(), keys = self.values.len(), "saved settings");
        Ok(())
    }
}

fn decode_entries(raw: BTreeMap<String, serde_json::Value>) -> BTreeMap<String, SettingValue> {
    raw.into_iter()
        .filter_map(|(key, value)| match serde_json::from_value(value) {
            Ok(value) => Some((key, value)),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "dropping undecodable setting");
                None
            }
        })
        .collect()
}

impl SettingsStore for JsonSettingsStore {
    fn get(&self, key: &str) -> Option<SettingValue> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: SettingValue) {
        match value {
            SettingValue::Double(v) if !v.is_finite() => {
                tracing::warn!(key, value = v, "ignoring non-finite setting");
                return;
            }
            _ => {}
        }
        self.values.insert(key.to_owned(), value);
        self.dirty = true;
    }

    fn remove(&mut self, key: &str) -> Option<SettingValue> {
        let removed = self.values.remove(key);
        self.dirty |= removed.is_some();
        removed
    }

    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

/// Serializes `value` as pretty JSON to `path`.
pub(crate) fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    let json_string = serde_json::to_string_pretty(value)?;
    fs::write(path, json_string).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
