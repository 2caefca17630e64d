//! Typed views over the settings store.
//!
//! These structs are the only place that reads theme and slider settings
//! by key, so every default lives here.

use crate::color::Rgba;
use crate::detent::{GRID_STRENGTH, HEADROOM, LABEL_DENSITY};
use crate::settings::{keys, read_enum, write_enum, SettingValue, SettingsStore};
use crate::theme::builtin::DEFAULT_MONOCHROME_TINT;
use crate::theme::custom::CustomThemeStore;
use crate::theme::resolved::ResolvedTheme;
use crate::theme::resolver::ThemeResolver;
use crate::theme::{ColorMixBasis, ColorMixMode, ColorScheme, ScopeColorMode, ThemeId, ThemeModes};
use std::sync::Arc;

/// Theme selection and color modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemePreferences {
    pub theme: ThemeId,
    pub modes: ThemeModes,
    pub monochrome_tint: Rgba,
}

impl Default for ThemePreferences {
    fn default() -> Self {
        Self {
            theme: ThemeId::default(),
            modes: ThemeModes::default(),
            monochrome_tint: DEFAULT_MONOCHROME_TINT,
        }
    }
}

impl ThemePreferences {
    pub fn load<S: SettingsStore + ?Sized>(store: &S) -> Self {
        let theme = store
            .get_string(keys::THEME_ID)
            .map(|raw| ThemeId::parse(&raw))
            .unwrap_or_default();
        let monochrome_tint = store
            .get_string(keys::MONOCHROME_TINT)
            .and_then(|hex| Rgba::from_hex(&hex))
            .unwrap_or(DEFAULT_MONOCHROME_TINT);
        Self {
            theme,
            modes: ThemeModes {
                mix_basis: read_enum::<ColorMixBasis, _>(store, keys::COLOR_MIX_BASIS),
                mix_mode: read_enum::<ColorMixMode, _>(store, keys::COLOR_MIX_MODE),
                scope_mode: read_enum::<ScopeColorMode, _>(store, keys::SCOPE_COLOR_MODE),
            },
            monochrome_tint,
        }
    }

    pub fn save<S: SettingsStore + ?Sized>(&self, store: &mut S) {
        store.set(keys::THEME_ID, SettingValue::from(self.theme.to_string()));
        write_enum(store, keys::COLOR_MIX_BASIS, self.modes.mix_basis);
        write_enum(store, keys::COLOR_MIX_MODE, self.modes.mix_mode);
        write_enum(store, keys::SCOPE_COLOR_MODE, self.modes.scope_mode);
        store.set(
            keys::MONOCHROME_TINT,
            SettingValue::from(self.monochrome_tint.to_hex()),
        );
    }

    /// Pushes the saved tint into `resolver` and resolves the saved theme.
    pub fn resolve<T: CustomThemeStore>(
        &self,
        resolver: &ThemeResolver<T>,
        scheme: ColorScheme,
    ) -> Arc<ResolvedTheme> {
        resolver.set_monochrome_tint(self.monochrome_tint);
        resolver.resolve_id(self.theme, scheme, self.modes)
    }
}

/// Detented slider values, snapped on load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderPreferences {
    pub label_density: f64,
    pub grid_strength: f64,
    pub headroom: f64,
}

impl Default for SliderPreferences {
    fn default() -> Self {
        Self {
            label_density: 0.65,
            grid_strength: 0.40,
            headroom: 0.24,
        }
    }
}

impl SliderPreferences {
    pub fn load<S: SettingsStore + ?Sized>(store: &S) -> Self {
        let defaults = Self::default();
        let read = |key: &str, fallback: f64| store.get_f64(key).unwrap_or(fallback);
        Self {
            label_density: LABEL_DENSITY.snap(read(keys::LABEL_DENSITY, defaults.label_density)),
            grid_strength: GRID_STRENGTH.snap(read(keys::GRID_STRENGTH, defaults.grid_strength)),
            headroom: HEADROOM.snap(read(keys::OUTPUT_HEADROOM, defaults.headroom)),
        }
    }

    pub fn save<S: SettingsStore + ?Sized>(&self, store: &mut S) {
        store.set(keys::LABEL_DENSITY, SettingValue::Double(self.label_density));
        store.set(keys::GRID_STRENGTH, SettingValue::Double(self.grid_strength));
        store.set(keys::OUTPUT_HEADROOM, SettingValue::Double(self.headroom));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MemorySettingsStore;
    use crate::theme::BuiltinTheme;

    #[test]
    fn empty_store_loads_defaults() {
        let store = MemorySettingsStore::new();
        assert_eq!(ThemePreferences::load(&store), ThemePreferences::default());
        assert_eq!(SliderPreferences::load(&store), SliderPreferences::default());
    }

    #[test]
    fn unknown_raw_values_fall_back_individually() {
        let store: MemorySettingsStore = [
            (keys::THEME_ID, "ember"),
            (keys::COLOR_MIX_BASIS, "bogus"),
            (keys::COLOR_MIX_MODE, "dominant"),
        ]
        .into_iter()
        .collect();
        let prefs = ThemePreferences::load(&store);
        assert_eq!(prefs.theme, ThemeId::Builtin(BuiltinTheme::Ember));
        assert_eq!(prefs.modes.mix_basis, ColorMixBasis::ComplexityWeighted);
        assert_eq!(prefs.modes.mix_mode, ColorMixMode::Dominant);
    }

    #[test]
    fn theme_preferences_round_trip() {
        let prefs = ThemePreferences {
            theme: ThemeId::Builtin(BuiltinTheme::Paper),
            modes: ThemeModes {
                mix_basis: ColorMixBasis::Uniform,
                mix_mode: ColorMixMode::Dominant,
                scope_mode: ScopeColorMode::RatioHue,
            },
            monochrome_tint: Rgba::from_rgb_u32(0x336699),
        };
        let mut store = MemorySettingsStore::new();
        prefs.save(&mut store);
        assert_eq!(ThemePreferences::load(&store), prefs);
    }

    #[test]
    fn slider_values_snap_on_load() {
        let store: MemorySettingsStore = [
            (keys::LABEL_DENSITY, 0.7),
            (keys::GRID_STRENGTH, 0.2),
            (keys::OUTPUT_HEADROOM, 0.5),
        ]
        .into_iter()
        .collect();
        let sliders = SliderPreferences::load(&store);
        assert_eq!(sliders.label_density, 0.65);
        assert_eq!(sliders.grid_strength, 0.25);
        assert_eq!(sliders.headroom, 0.36);
    }
}
