//! Built-in theme table.
//!
//! Every shipped theme has a light and a dark palette for the themed primes
//! plus the tuner and scope styling. `Monochrome` has no fixed palette: its
//! prime colors are derived from a tint the user can change at any time.

use super::{
    ColorMixBasis, ColorMixMode, ColorScheme, ScopeColorMode, ThemeModes, THEMED_PRIMES,
};
use crate::color::Rgba;
use crate::settings::RawEnum;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::fmt;

/// Themes shipped with the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BuiltinTheme {
    Classic,
    Aurora,
    Ember,
    Paper,
    Monochrome,
}

/// Styling for one built-in theme. Colors are packed `0xRRGGBB`; prime
/// palettes follow the order of [`THEMED_PRIMES`].
struct BuiltinSpec {
    name: &'static str,
    light_primes: [u32; 10],
    dark_primes: [u32; 10],
    light_tint: u32,
    light_tint_strength: f32,
    dark_tint: u32,
    dark_tint_strength: f32,
    needle: u32,
    needle_opacity: f32,
    tick: u32,
    tick_opacity: f32,
    in_tune: u32,
    in_tune_strength: f32,
    scope: u32,
    modes: ThemeModes,
}

const DEFAULT_MODES: ThemeModes = ThemeModes {
    mix_basis: ColorMixBasis::ComplexityWeighted,
    mix_mode: ColorMixMode::Blend,
    scope_mode: ScopeColorMode::Constant,
};

const CLASSIC: BuiltinSpec = BuiltinSpec {
    name: "Classic",
    light_primes: [
        0x2F6FDB, 0xD9482B, 0x2E9E5B, 0x9B4DCA, 0xC7901A, 0x1A9BA8, 0xC43C7A, 0x6B7D1F, 0x8A5A3C,
        0x4656A8,
    ],
    dark_primes: [
        0x6FA3FF, 0xFF7A5C, 0x5FD18D, 0xC48BF0, 0xF2BE4D, 0x4FD2DE, 0xF06FA8, 0xB0C44F, 0xC99170,
        0x8592E6,
    ],
    light_tint: 0xF4F1EA,
    light_tint_strength: 0.12,
    dark_tint: 0x1B1E26,
    dark_tint_strength: 0.22,
    needle: 0xE23B3B,
    needle_opacity: 0.95,
    tick: 0x8A8F98,
    tick_opacity: 0.6,
    in_tune: 0x34C759,
    in_tune_strength: 0.8,
    scope: 0x2F6FDB,
    modes: DEFAULT_MODES,
};

const AURORA: BuiltinSpec = BuiltinSpec {
    name: "Aurora",
    light_primes: [
        0x1E7F9E, 0x7A3FC0, 0x2BA37A, 0x3D5BC9, 0xB03FA0, 0x168F6F, 0x5A4FCF, 0x2D8FB3, 0x8C46B8,
        0x22966A,
    ],
    dark_primes: [
        0x5CD3F0, 0xB38BFF, 0x6BEBB5, 0x7F98FF, 0xEE82DC, 0x4FE0B5, 0x9C92FF, 0x6FD0F2, 0xC794F0,
        0x63DEA4,
    ],
    light_tint: 0xEEF6F7,
    light_tint_strength: 0.16,
    dark_tint: 0x0E1A24,
    dark_tint_strength: 0.3,
    needle: 0x7A3FC0,
    needle_opacity: 0.9,
    tick: 0x5F7C8A,
    tick_opacity: 0.55,
    in_tune: 0x2BD9A0,
    in_tune_strength: 0.85,
    scope: 0x5CD3F0,
    modes: ThemeModes {
        mix_basis: ColorMixBasis::ComplexityWeighted,
        mix_mode: ColorMixMode::Blend,
        scope_mode: ScopeColorMode::PrimeTint,
    },
};

const EMBER: BuiltinSpec = BuiltinSpec {
    name: "Ember",
    light_primes: [
        0xC2410C, 0xB91C1C, 0xA16207, 0x9D174D, 0xC2571A, 0x92400E, 0xBE123C, 0x854D0E, 0x7C2D12,
        0x9F1239,
    ],
    dark_primes: [
        0xFB923C, 0xF87171, 0xFACC15, 0xF472B6, 0xFDBA74, 0xF59E0B, 0xFB7185, 0xEAB308, 0xFDA47A,
        0xFDA4AF,
    ],
    light_tint: 0xFBF0E6,
    light_tint_strength: 0.18,
    dark_tint: 0x221410,
    dark_tint_strength: 0.32,
    needle: 0xFACC15,
    needle_opacity: 0.95,
    tick: 0x9A6B4F,
    tick_opacity: 0.6,
    in_tune: 0x84CC16,
    in_tune_strength: 0.75,
    scope: 0xFB923C,
    modes: ThemeModes {
        mix_basis: ColorMixBasis::ExponentMagnitude,
        mix_mode: ColorMixMode::Dominant,
        scope_mode: ScopeColorMode::Constant,
    },
};

const PAPER: BuiltinSpec = BuiltinSpec {
    name: "Paper",
    light_primes: [
        0x3B5B8C, 0x8C3B3B, 0x3B7A57, 0x6A4C8C, 0x8C6A3B, 0x3B7A7A, 0x8C3B6A, 0x5E6B3B, 0x6B4F3B,
        0x4A4F7A,
    ],
    dark_primes: [
        0x9DB4D9, 0xD99D9D, 0x9DCBB0, 0xBBA6D9, 0xD9BF9D, 0x9DCBCB, 0xD99DBF, 0xBEC79D, 0xC7AE9D,
        0xA9ADD0,
    ],
    light_tint: 0xFAF7F0,
    light_tint_strength: 0.08,
    dark_tint: 0x1E1D1A,
    dark_tint_strength: 0.18,
    needle: 0x2B2B2B,
    needle_opacity: 0.85,
    tick: 0xA8A29E,
    tick_opacity: 0.5,
    in_tune: 0x3B7A57,
    in_tune_strength: 0.7,
    scope: 0x3B5B8C,
    modes: ThemeModes {
        mix_basis: ColorMixBasis::Uniform,
        mix_mode: ColorMixMode::Blend,
        scope_mode: ScopeColorMode::Constant,
    },
};

// Prime colors are computed from the live tint; the arrays are unused.
const MONOCHROME: BuiltinSpec = BuiltinSpec {
    name: "Monochrome",
    light_primes: [0; 10],
    dark_primes: [0; 10],
    light_tint: 0xF2F2F2,
    light_tint_strength: 0.1,
    dark_tint: 0x161616,
    dark_tint_strength: 0.2,
    needle: 0xFFFFFF,
    needle_opacity: 0.9,
    tick: 0x8E8E93,
    tick_opacity: 0.55,
    in_tune: 0xFFFFFF,
    in_tune_strength: 0.7,
    scope: 0xFFFFFF,
    modes: DEFAULT_MODES,
};

/// Default tint for the monochrome theme.
pub const DEFAULT_MONOCHROME_TINT: Rgba = Rgba::from_rgb_u32(0x7F8EA3);

/// Lookup from raw id to theme.
static BUILTIN_MAP: Lazy<BTreeMap<&'static str, BuiltinTheme>> = Lazy::new(|| {
    BuiltinTheme::all()
        .iter()
        .map(|theme| (theme.raw(), *theme))
        .collect()
});

impl BuiltinTheme {
    /// All built-in themes in display order.
    pub fn all() -> &'static [BuiltinTheme] {
        const THEMES: [BuiltinTheme; 5] = [
            BuiltinTheme::Classic,
            BuiltinTheme::Aurora,
            BuiltinTheme::Ember,
            BuiltinTheme::Paper,
            BuiltinTheme::Monochrome,
        ];
        &THEMES
    }

    fn spec(self) -> &'static BuiltinSpec {
        match self {
            BuiltinTheme::Classic => &CLASSIC,
            BuiltinTheme::Aurora => &AURORA,
            BuiltinTheme::Ember => &EMBER,
            BuiltinTheme::Paper => &PAPER,
            BuiltinTheme::Monochrome => &MONOCHROME,
        }
    }

    pub fn display_name(self) -> &'static str {
        self.spec().name
    }

    /// Whether prime colors follow the live monochrome tint.
    pub fn is_live_tinted(self) -> bool {
        self == BuiltinTheme::Monochrome
    }

    /// Color of a themed prime for `scheme`.
    ///
    /// # Returns
    /// * `Some(color)` - `prime` is themed and this theme has a fixed palette
    /// * `None` - `prime` is outside [`THEMED_PRIMES`], or the theme is
    ///   [`BuiltinTheme::Monochrome`]
    pub fn prime_color(self, prime: u32, scheme: ColorScheme) -> Option<Rgba> {
        if self.is_live_tinted() {
            return None;
        }
        let index = THEMED_PRIMES.iter().position(|&p| p == prime)?;
        let spec = self.spec();
        let palette = match scheme {
            ColorScheme::Light => &spec.light_primes,
            ColorScheme::Dark => &spec.dark_primes,
        };
        Some(Rgba::from_rgb_u32(palette[index]))
    }

    /// Background tint and its strength for `scheme`.
    pub fn tint(self, scheme: ColorScheme) -> (Rgba, f32) {
        let spec = self.spec();
        match scheme {
            ColorScheme::Light => (Rgba::from_rgb_u32(spec.light_tint), spec.light_tint_strength),
            ColorScheme::Dark => (Rgba::from_rgb_u32(spec.dark_tint), spec.dark_tint_strength),
        }
    }

    /// Tuner needle color and opacity.
    pub fn needle(self) -> (Rgba, f32) {
        (Rgba::from_rgb_u32(self.spec().needle), self.spec().needle_opacity)
    }

    /// Tuner tick color and opacity.
    pub fn tick(self) -> (Rgba, f32) {
        (Rgba::from_rgb_u32(self.spec().tick), self.spec().tick_opacity)
    }

    /// Color and strength used when a pitch is in tune.
    pub fn in_tune(self) -> (Rgba, f32) {
        (Rgba::from_rgb_u32(self.spec().in_tune), self.spec().in_tune_strength)
    }

    /// Default scope trace color.
    pub fn scope_color(self) -> Rgba {
        Rgba::from_rgb_u32(self.spec().scope)
    }

    /// Modes the theme was designed for.
    pub fn default_modes(self) -> ThemeModes {
        self.spec().modes
    }
}

impl RawEnum for BuiltinTheme {
    const DEFAULT: Self = BuiltinTheme::Classic;

    fn from_raw(raw: &str) -> Option<Self> {
        BUILTIN_MAP.get(raw).copied()
    }

    fn raw(self) -> &'static str {
        match self {
            BuiltinTheme::Classic => "classic",
            BuiltinTheme::Aurora => "aurora",
            BuiltinTheme::Ember => "ember",
            BuiltinTheme::Paper => "paper",
            BuiltinTheme::Monochrome => "monochrome",
        }
    }
}

impl fmt::Display for BuiltinTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Prime palette derived from a monochrome tint.
///
/// Lower primes sit closest to the tint; higher primes drift toward the
/// scheme's background so that simple ratios stand out.
pub fn monochrome_prime_colors(tint: Rgba, scheme: ColorScheme) -> BTreeMap<u32, Rgba> {
    let steps = THEMED_PRIMES.len() as f32;
    THEMED_PRIMES
        .iter()
        .enumerate()
        .map(|(i, &prime)| {
            let amount = 0.6 * i as f32 / steps;
            let color = match scheme {
                ColorScheme::Light => tint.shade(-amount),
                ColorScheme::Dark => tint.shade(amount),
            };
            (prime, color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_lookup_covers_every_theme() {
        for theme in BuiltinTheme::all() {
            assert_eq!(BuiltinTheme::from_raw(theme.raw()), Some(*theme));
        }
        assert_eq!(BuiltinTheme::from_raw("Classic"), None);
    }

    #[test]
    fn fixed_palettes_color_every_themed_prime_in_both_schemes() {
        for theme in BuiltinTheme::all().iter().filter(|t| !t.is_live_tinted()) {
            for scheme in [ColorScheme::Light, ColorScheme::Dark] {
                for prime in THEMED_PRIMES {
                    assert!(theme.prime_color(prime, scheme).is_some(), "{theme:?} {prime}");
                }
            }
        }
    }

    #[test]
    fn unthemed_primes_have_no_builtin_color() {
        assert_eq!(BuiltinTheme::Classic.prime_color(2, ColorScheme::Light), None);
        assert_eq!(BuiltinTheme::Classic.prime_color(37, ColorScheme::Dark), None);
    }

    #[test]
    fn light_and_dark_palettes_differ() {
        for theme in BuiltinTheme::all().iter().filter(|t| !t.is_live_tinted()) {
            assert_ne!(
                theme.prime_color(3, ColorScheme::Light),
                theme.prime_color(3, ColorScheme::Dark),
                "{theme:?}"
            );
        }
    }

    #[test]
    fn monochrome_palette_starts_at_tint() {
        let colors = monochrome_prime_colors(DEFAULT_MONOCHROME_TINT, ColorScheme::Light);
        assert_eq!(colors.len(), THEMED_PRIMES.len());
        assert_eq!(colors[&3], DEFAULT_MONOCHROME_TINT);
        assert_ne!(colors[&31], DEFAULT_MONOCHROME_TINT);
    }
}
