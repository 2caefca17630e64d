//! # Custom Theme File
//!
//! Custom themes persisted as a JSON array. The file is read on every
//! [`load_all`](CustomThemeStore::load_all) so edits made elsewhere are
//! picked up; the resolver's cache keeps this off the hot path.

use crate::settings_file::write_json;
use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tenney_core::{CustomTheme, CustomThemeStore};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct JsonCustomThemeStore {
    path: PathBuf,
}

impl JsonCustomThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all themes, treating a missing file as an empty list.
    pub fn read(&self) -> Result<Vec<CustomTheme>> {
        match fs::read_to_string(&self.path) {
            Ok(data) => serde_json::from_str(&data)
                .with_context(|| format!("Invalid theme file {}", self.path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read theme file {}", self.path.display())),
        }
    }

    /// Inserts `theme` or replaces the stored theme with the same id.
    pub fn save_theme(&self, theme: &CustomTheme) -> Result<()> {
        let mut themes = self.read()?;
        match themes.iter_mut().find(|t| t.id == theme.id) {
            Some(existing) => *existing = theme.clone(),
            None => themes.push(theme.clone()),
        }
        write_json(&self.path, &themes)?;
        tracing::info!(id = %theme.id, name = %theme.name, "saved custom theme");
        Ok(())
    }

    /// Removes the theme with `id`.
    ///
    /// # Returns
    /// * `Ok(true)` - A theme was removed
    /// * `Ok(false)` - No theme had that id; the file is left untouched
    pub fn delete_theme(&self, id: Uuid) -> Result<bool> {
        let mut themes = self.read()?;
        let before = themes.len();
        themes.retain(|t| t.id != id);
        if themes.len() == before {
            return Ok(false);
        }
        write_json(&self.path, &themes)?;
        tracing::info!(%id, "deleted custom theme");
        Ok(true)
    }
}

impl CustomThemeStore for JsonCustomThemeStore {
    fn load_all(&self) -> Vec<CustomTheme> {
        self.read().unwrap_or_else(|e| {
            tracing::warn!("Could not load custom themes: {e:#}");
            Vec::new()
        })
    }
}
