//! One-time migration of split light/dark appearance keys.
//!
//! Older versions stored some appearance settings twice, once per color
//! scheme. They are now single values. On first launch after upgrading each
//! unified key is seeded from the light value, else the dark value, else the
//! built-in default. Once any unified key exists the migration never runs
//! again. Legacy keys are left untouched.

use crate::settings::{keys, SettingValue, SettingsStore};
use once_cell::sync::Lazy;

/// One unified key and the legacy keys it replaces.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyKeyMigration {
    pub unified: &'static str,
    pub light: &'static str,
    pub dark: &'static str,
    pub default: SettingValue,
}

/// Where a migrated value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationSource {
    Light,
    Dark,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MigrationReport {
    /// True when a unified key already existed and nothing was written.
    pub skipped: bool,
    pub migrated: Vec<(&'static str, MigrationSource)>,
}

/// Appearance keys that used to be stored per color scheme.
pub static APPEARANCE_MIGRATIONS: Lazy<Vec<LegacyKeyMigration>> = Lazy::new(|| {
    vec![
        LegacyKeyMigration {
            unified: keys::THEME_ID,
            light: keys::LEGACY_THEME_ID_LIGHT,
            dark: keys::LEGACY_THEME_ID_DARK,
            default: SettingValue::from("classic"),
        },
        LegacyKeyMigration {
            unified: keys::SURFACE_TINT_STRENGTH,
            light: keys::LEGACY_SURFACE_TINT_STRENGTH_LIGHT,
            dark: keys::LEGACY_SURFACE_TINT_STRENGTH_DARK,
            default: SettingValue::Double(0.12),
        },
        LegacyKeyMigration {
            unified: keys::GRID_STRENGTH,
            light: keys::LEGACY_GRID_STRENGTH_LIGHT,
            dark: keys::LEGACY_GRID_STRENGTH_DARK,
            default: SettingValue::Double(0.40),
        },
        LegacyKeyMigration {
            unified: keys::LABEL_DENSITY,
            light: keys::LEGACY_LABEL_DENSITY_LIGHT,
            dark: keys::LEGACY_LABEL_DENSITY_DARK,
            default: SettingValue::Double(0.65),
        },
    ]
});

/// Runs the appearance-key migration on `store`.
pub fn migrate_appearance_keys<S: SettingsStore + ?Sized>(store: &mut S) -> MigrationReport {
    migrate_legacy_keys(store, &APPEARANCE_MIGRATIONS)
}

/// Seeds each unified key in `table` from its legacy variants.
///
/// # Returns
/// * A report with `skipped = true` if any unified key was already present,
///   otherwise the source used for every key
pub fn migrate_legacy_keys<S: SettingsStore + ?Sized>(
    store: &mut S,
    table: &[LegacyKeyMigration],
) -> MigrationReport {
    if table.iter().any(|entry| store.contains(entry.unified)) {
        tracing::debug!("appearance keys already unified, skipping migration");
        return MigrationReport {
            skipped: true,
            migrated: Vec::new(),
        };
    }

    let mut report = MigrationReport::default();
    for entry in table {
        let (value, source) = if let Some(v) = store.get(entry.light) {
            (v, MigrationSource::Light)
        } else if let Some(v) = store.get(entry.dark) {
            (v, MigrationSource::Dark)
        } else {
            (entry.default.clone(), MigrationSource::Default)
        };
        store.set(entry.unified, value);
        report.migrated.push((entry.unified, source));
    }
    tracing::info!(keys = report.migrated.len(), "migrated legacy appearance keys");
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettingsStore;

    #[test]
    fn light_value_wins_over_dark() {
        let mut store: MemorySettingsStore = [
            (keys::LEGACY_THEME_ID_LIGHT, "aurora"),
            (keys::LEGACY_THEME_ID_DARK, "ember"),
        ]
        .into_iter()
        .collect();
        let report = migrate_appearance_keys(&mut store);
        assert!(!report.skipped);
        assert_eq!(store.get_string(keys::THEME_ID).as_deref(), Some("aurora"));
        assert!(report
            .migrated
            .contains(&(keys::THEME_ID, MigrationSource::Light)));
    }

    #[test]
    fn legacy_keys_are_preserved() {
        let mut store: MemorySettingsStore =
            [(keys::LEGACY_GRID_STRENGTH_DARK, 0.85)].into_iter().collect();
        migrate_appearance_keys(&mut store);
        assert_eq!(store.get_f64(keys::GRID_STRENGTH), Some(0.85));
        assert_eq!(store.get_f64(keys::LEGACY_GRID_STRENGTH_DARK), Some(0.85));
    }

    #[test]
    fn every_unified_key_is_written() {
        let mut store = MemorySettingsStore::new();
        let report = migrate_appearance_keys(&mut store);
        assert_eq!(report.migrated.len(), APPEARANCE_MIGRATIONS.len());
        for entry in APPEARANCE_MIGRATIONS.iter() {
            assert_eq!(store.get(entry.unified), Some(entry.default.clone()));
        }
    }
}
