//! # Theme Resolver
//!
//! Turns a persisted theme id plus the current appearance into a
//! [`ResolvedTheme`]. Resolution never fails: an unknown built-in id or a
//! custom theme that is no longer in the store resolves as the classic
//! theme, so the UI always has a palette to draw with.
//!
//! Results are memoized in a [`ThemeCache`]. The monochrome theme is the
//! one exception; its palette follows a tint that can change between calls
//! without changing the cache key, so it is rebuilt every time.

use super::builtin::{monochrome_prime_colors, DEFAULT_MONOCHROME_TINT};
use super::cache::{ThemeCache, ThemeCacheKey};
use super::custom::{CustomTheme, CustomThemeStore};
use super::resolved::{surface_colors, ResolvedTheme};
use super::{
    BuiltinTheme, ColorMixBasis, ColorMixMode, ColorScheme, ScopeColorMode, ThemeId, ThemeModes,
    THEMED_PRIMES,
};
use crate::color::Rgba;
use crate::settings::RawEnum;
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Resolves theme ids against the built-in table and a custom theme store.
#[derive(Debug)]
pub struct ThemeResolver<S> {
    store: S,
    cache: ThemeCache,
    monochrome_tint: RwLock<Rgba>,
}

impl<S: CustomThemeStore> ThemeResolver<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: ThemeCache::new(),
            monochrome_tint: RwLock::new(DEFAULT_MONOCHROME_TINT),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cache(&self) -> &ThemeCache {
        &self.cache
    }

    pub fn monochrome_tint(&self) -> Rgba {
        *self
            .monochrome_tint
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Changes the tint driving the monochrome theme. Takes effect on the
    /// next resolution.
    pub fn set_monochrome_tint(&self, tint: Rgba) {
        *self
            .monochrome_tint
            .write()
            .unwrap_or_else(PoisonError::into_inner) = tint;
    }

    /// Resolves a persisted theme id.
    ///
    /// # Arguments
    /// * `id_raw` - Built-in raw value or `custom:<uuid>`
    /// * `scheme` - Current light/dark appearance
    /// * `mix_basis`, `mix_mode`, `scope_mode` - Mode settings; `None` uses
    ///   the mode's default
    ///
    /// # Returns
    /// * The resolved theme, shared with the cache unless it is monochrome
    pub fn resolve(
        &self,
        id_raw: &str,
        scheme: ColorScheme,
        mix_basis: Option<ColorMixBasis>,
        mix_mode: Option<ColorMixMode>,
        scope_mode: Option<ScopeColorMode>,
    ) -> Arc<ResolvedTheme> {
        let modes = ThemeModes::from_options(mix_basis, mix_mode, scope_mode);
        self.resolve_id(ThemeId::parse(id_raw), scheme, modes)
    }

    /// Resolves an already parsed theme id.
    pub fn resolve_id(
        &self,
        id: ThemeId,
        scheme: ColorScheme,
        modes: ThemeModes,
    ) -> Arc<ResolvedTheme> {
        if id.is_monochrome() {
            return Arc::new(self.build_monochrome(scheme, modes));
        }

        let key = ThemeCacheKey::new(id.to_string(), scheme.is_dark(), modes);
        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }

        tracing::debug!(theme = %id, ?scheme, "resolving theme");
        let resolved = Arc::new(match id {
            ThemeId::Custom(uuid) => match self.store.find(uuid) {
                Some(custom) => build_custom(&custom, scheme, modes),
                None => {
                    tracing::warn!(%uuid, "custom theme not found, using default theme");
                    build_builtin(BuiltinTheme::DEFAULT, scheme, modes)
                }
            },
            ThemeId::Builtin(theme) => build_builtin(theme, scheme, modes),
        });
        self.cache.insert(key, Arc::clone(&resolved));
        resolved
    }

    /// Drops cached resolutions of `id`. Call after a custom theme is
    /// edited or deleted.
    pub fn invalidate(&self, id: &ThemeId) {
        let removed = self.cache.remove_theme(&id.to_string());
        tracing::debug!(theme = %id, removed, "invalidated cached theme");
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Built-in themes followed by stored custom themes, with display names.
    pub fn available_themes(&self) -> Vec<(ThemeId, String)> {
        let builtins = BuiltinTheme::all()
            .iter()
            .map(|theme| (ThemeId::Builtin(*theme), theme.display_name().to_owned()));
        let customs = self
            .store
            .load_all()
            .into_iter()
            .map(|theme| (ThemeId::Custom(theme.id), theme.name));
        builtins.chain(customs).collect()
    }

    fn build_monochrome(&self, scheme: ColorScheme, modes: ThemeModes) -> ResolvedTheme {
        let tint = self.monochrome_tint();
        let prime_colors = monochrome_prime_colors(tint, scheme);
        let mut resolved = assemble_builtin(BuiltinTheme::Monochrome, prime_colors, scheme, modes);
        resolved.scope = tint;
        resolved
    }
}

fn build_builtin(theme: BuiltinTheme, scheme: ColorScheme, modes: ThemeModes) -> ResolvedTheme {
    let prime_colors = THEMED_PRIMES
        .iter()
        .map(|&prime| (prime, classic_fallback(theme.prime_color(prime, scheme), prime, scheme)))
        .collect();
    assemble_builtin(theme, prime_colors, scheme, modes)
}

fn assemble_builtin(
    theme: BuiltinTheme,
    prime_colors: BTreeMap<u32, Rgba>,
    scheme: ColorScheme,
    modes: ThemeModes,
) -> ResolvedTheme {
    let (surface_tint, chroma_shadow) = surface_colors(prime_colors[&3], prime_colors[&5], scheme);
    let (tint, tint_strength) = theme.tint(scheme);
    let (needle, needle_opacity) = theme.needle();
    let (tick, tick_opacity) = theme.tick();
    let (in_tune, in_tune_strength) = theme.in_tune();
    ResolvedTheme {
        id: ThemeId::Builtin(theme),
        name: theme.display_name().to_owned(),
        scheme,
        modes,
        prime_colors,
        tint,
        tint_strength,
        surface_tint,
        chroma_shadow,
        needle,
        needle_opacity,
        tick,
        tick_opacity,
        in_tune,
        in_tune_strength,
        scope: theme.scope_color(),
    }
}

fn build_custom(custom: &CustomTheme, scheme: ColorScheme, modes: ThemeModes) -> ResolvedTheme {
    let classic = BuiltinTheme::Classic;
    let prime_colors: BTreeMap<u32, Rgba> = THEMED_PRIMES
        .iter()
        .map(|&prime| (prime, classic_fallback(custom.prime_color(prime), prime, scheme)))
        .collect();
    let (surface_tint, chroma_shadow) = surface_colors(prime_colors[&3], prime_colors[&5], scheme);

    let hex_or = |hex: &str, fallback: Rgba| Rgba::from_hex(hex).unwrap_or(fallback);
    let (classic_tint, _) = classic.tint(scheme);
    let (tint, tint_strength) = match scheme {
        ColorScheme::Light => (hex_or(&custom.light_tint, classic_tint), custom.light_tint_strength),
        ColorScheme::Dark => (hex_or(&custom.dark_tint, classic_tint), custom.dark_tint_strength),
    };

    ResolvedTheme {
        id: ThemeId::Custom(custom.id),
        name: custom.name.clone(),
        scheme,
        modes,
        prime_colors,
        tint,
        tint_strength,
        surface_tint,
        chroma_shadow,
        needle: hex_or(&custom.needle_color, classic.needle().0),
        needle_opacity: custom.needle_opacity,
        tick: hex_or(&custom.tick_color, classic.tick().0),
        tick_opacity: custom.tick_opacity,
        in_tune: hex_or(&custom.in_tune_color, classic.in_tune().0),
        in_tune_strength: custom.in_tune_strength,
        scope: hex_or(&custom.scope_color, classic.scope_color()),
    }
}

/// Keeps every themed prime colored: a missing color takes classic's.
fn classic_fallback(color: Option<Rgba>, prime: u32, scheme: ColorScheme) -> Rgba {
    color
        .or_else(|| BuiltinTheme::Classic.prime_color(prime, scheme))
        .unwrap_or(super::resolved::NEUTRAL_PRIME_COLOR)
}
