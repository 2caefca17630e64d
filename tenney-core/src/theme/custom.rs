//! User-authored themes and the store they are loaded from.

use super::{
    BuiltinTheme, ColorMixBasis, ColorMixMode, ColorScheme, ScopeColorMode, ThemeModes,
    THEMED_PRIMES,
};
use crate::color::Rgba;
use crate::settings::{decode_or_default, RawEnum};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

/// A theme created in the theme editor.
///
/// Colors are kept as hex strings exactly as persisted. They are decoded
/// during resolution, where anything unparseable falls back to the
/// corresponding classic color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTheme {
    pub id: Uuid,
    pub name: String,
    /// Prime to hex color.
    #[serde(default)]
    pub prime_colors: BTreeMap<u32, String>,
    pub light_tint: String,
    pub light_tint_strength: f32,
    pub dark_tint: String,
    pub dark_tint_strength: f32,
    pub needle_color: String,
    pub needle_opacity: f32,
    pub tick_color: String,
    pub tick_opacity: f32,
    pub in_tune_color: String,
    pub in_tune_strength: f32,
    pub scope_color: String,
    #[serde(default)]
    pub default_mix_basis: Option<String>,
    #[serde(default)]
    pub default_mix_mode: Option<String>,
    #[serde(default)]
    pub default_scope_mode: Option<String>,
}

impl CustomTheme {
    /// Starts a new custom theme as a copy of a built-in one.
    ///
    /// Light-scheme prime colors are used as the base palette.
    pub fn from_builtin(source: BuiltinTheme, name: impl Into<String>) -> Self {
        let base = if source.is_live_tinted() {
            BuiltinTheme::Classic
        } else {
            source
        };
        let prime_colors = THEMED_PRIMES
            .iter()
            .filter_map(|&p| {
                base.prime_color(p, ColorScheme::Light)
                    .map(|c| (p, c.to_hex()))
            })
            .collect();
        let (light_tint, light_tint_strength) = source.tint(ColorScheme::Light);
        let (dark_tint, dark_tint_strength) = source.tint(ColorScheme::Dark);
        let (needle, needle_opacity) = source.needle();
        let (tick, tick_opacity) = source.tick();
        let (in_tune, in_tune_strength) = source.in_tune();
        let modes = source.default_modes();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            prime_colors,
            light_tint: light_tint.to_hex(),
            light_tint_strength,
            dark_tint: dark_tint.to_hex(),
            dark_tint_strength,
            needle_color: needle.to_hex(),
            needle_opacity,
            tick_color: tick.to_hex(),
            tick_opacity,
            in_tune_color: in_tune.to_hex(),
            in_tune_strength,
            scope_color: source.scope_color().to_hex(),
            default_mix_basis: Some(modes.mix_basis.raw().to_owned()),
            default_mix_mode: Some(modes.mix_mode.raw().to_owned()),
            default_scope_mode: Some(modes.scope_mode.raw().to_owned()),
        }
    }

    /// Parsed color of `prime`, if the theme defines a valid one.
    pub fn prime_color(&self, prime: u32) -> Option<Rgba> {
        self.prime_colors
            .get(&prime)
            .and_then(|hex| Rgba::from_hex(hex))
    }

    /// Modes the author picked, each defaulting independently.
    pub fn default_modes(&self) -> ThemeModes {
        ThemeModes {
            mix_basis: decode_or_default::<ColorMixBasis>(self.default_mix_basis.as_deref()),
            mix_mode: decode_or_default::<ColorMixMode>(self.default_mix_mode.as_deref()),
            scope_mode: decode_or_default::<ScopeColorMode>(self.default_scope_mode.as_deref()),
        }
    }
}

/// Source of persisted custom themes.
///
/// Implementations are free to hit disk on every call; the resolver only
/// calls into the store on a cache miss.
pub trait CustomThemeStore {
    fn load_all(&self) -> Vec<CustomTheme>;

    fn find(&self, id: Uuid) -> Option<CustomTheme> {
        self.load_all().into_iter().find(|theme| theme.id == id)
    }
}

impl<T: CustomThemeStore + ?Sized> CustomThemeStore for &T {
    fn load_all(&self) -> Vec<CustomTheme> {
        (**self).load_all()
    }

    fn find(&self, id: Uuid) -> Option<CustomTheme> {
        (**self).find(id)
    }
}

impl<T: CustomThemeStore + ?Sized> CustomThemeStore for std::sync::Arc<T> {
    fn load_all(&self) -> Vec<CustomTheme> {
        (**self).load_all()
    }

    fn find(&self, id: Uuid) -> Option<CustomTheme> {
        (**self).find(id)
    }
}

/// Custom themes kept in memory.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    themes: RwLock<Vec<CustomTheme>>,
}

impl MemoryThemeStore {
    pub fn new(themes: Vec<CustomTheme>) -> Self {
        Self {
            themes: RwLock::new(themes),
        }
    }

    /// Inserts `theme`, replacing any theme with the same id.
    pub fn upsert(&self, theme: CustomTheme) {
        let mut themes = self.themes.write().unwrap_or_else(PoisonError::into_inner);
        match themes.iter_mut().find(|t| t.id == theme.id) {
            Some(existing) => *existing = theme,
            None => themes.push(theme),
        }
    }

    pub fn remove(&self, id: Uuid) -> Option<CustomTheme> {
        let mut themes = self.themes.write().unwrap_or_else(PoisonError::into_inner);
        let index = themes.iter().position(|t| t.id == id)?;
        Some(themes.remove(index))
    }
}

impl CustomThemeStore for MemoryThemeStore {
    fn load_all(&self) -> Vec<CustomTheme> {
        self.themes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_of_builtin_keeps_every_themed_prime() {
        let theme = CustomTheme::from_builtin(BuiltinTheme::Aurora, "Mine");
        assert_eq!(theme.name, "Mine");
        for prime in THEMED_PRIMES {
            assert!(theme.prime_color(prime).is_some());
        }
        assert_eq!(theme.default_modes(), BuiltinTheme::Aurora.default_modes());
    }

    #[test]
    fn unknown_mode_strings_decode_to_defaults() {
        let mut theme = CustomTheme::from_builtin(BuiltinTheme::Ember, "Odd");
        theme.default_mix_mode = Some("swirl".into());
        theme.default_scope_mode = None;
        let modes = theme.default_modes();
        assert_eq!(modes.mix_basis, ColorMixBasis::ExponentMagnitude);
        assert_eq!(modes.mix_mode, ColorMixMode::Blend);
        assert_eq!(modes.scope_mode, ScopeColorMode::Constant);
    }

    #[test]
    fn invalid_hex_has_no_prime_color() {
        let mut theme = CustomTheme::from_builtin(BuiltinTheme::Classic, "Broken");
        theme.prime_colors.insert(5, "not a color".into());
        assert_eq!(theme.prime_color(5), None);
    }

    #[test]
    fn memory_store_upserts_by_id() {
        let store = MemoryThemeStore::default();
        let mut theme = CustomTheme::from_builtin(BuiltinTheme::Paper, "A");
        store.upsert(theme.clone());
        theme.name = "B".into();
        store.upsert(theme.clone());
        assert_eq!(store.load_all(), vec![theme.clone()]);
        assert_eq!(store.find(theme.id).map(|t| t.name), Some("B".to_owned()));
        assert!(store.remove(theme.id).is_some());
        assert!(store.find(theme.id).is_none());
    }

    #[test]
    fn record_uses_camel_case_fields() {
        let theme = CustomTheme::from_builtin(BuiltinTheme::Classic, "Json");
        let json = serde_json::to_value(&theme).unwrap();
        assert!(json.get("primeColors").is_some());
        assert!(json.get("inTuneStrength").is_some());
    }
}
