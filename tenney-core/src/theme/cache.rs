//! Memoized theme resolutions.
//!
//! Entries are never evicted on their own. Callers drop them explicitly when
//! the underlying definition changes (a custom theme edited or deleted).

use super::resolved::ResolvedTheme;
use super::{ColorMixBasis, ColorMixMode, ScopeColorMode, ThemeModes};
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Everything a resolution depends on, normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeCacheKey {
    /// Canonical raw id (`classic`, `custom:<uuid>`, ...).
    pub theme_id: String,
    pub is_dark: bool,
    pub mix_basis: ColorMixBasis,
    pub mix_mode: ColorMixMode,
    pub scope_mode: ScopeColorMode,
}

impl ThemeCacheKey {
    pub fn new(theme_id: impl Into<String>, is_dark: bool, modes: ThemeModes) -> Self {
        Self {
            theme_id: theme_id.into(),
            is_dark,
            mix_basis: modes.mix_basis,
            mix_mode: modes.mix_mode,
            scope_mode: modes.scope_mode,
        }
    }
}

/// Thread-safe map from [`ThemeCacheKey`] to a shared resolution.
#[derive(Debug, Default)]
pub struct ThemeCache {
    entries: Mutex<FxHashMap<ThemeCacheKey, Arc<ResolvedTheme>>>,
}

impl ThemeCache {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave a half-written entry
    // behind, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, FxHashMap<ThemeCacheKey, Arc<ResolvedTheme>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, key: &ThemeCacheKey) -> Option<Arc<ResolvedTheme>> {
        self.lock().get(key).cloned()
    }

    pub fn insert(&self, key: ThemeCacheKey, theme: Arc<ResolvedTheme>) {
        self.lock().insert(key, theme);
    }

    /// Drops every entry for `theme_id`, across schemes and modes.
    pub fn remove_theme(&self, theme_id: &str) -> usize {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|key, _| key.theme_id != theme_id);
        before - entries.len()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
