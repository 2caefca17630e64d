//! # Theme Module
//!
//! Theme identities, color-mode settings and the resolution pipeline that
//! turns an abstract theme (built-in or user-authored) into a concrete,
//! scheme-specific palette.
//!
//! ## Layout
//! - [`builtin`]: the static table of shipped themes
//! - [`custom`]: user-authored theme records and the store boundary
//! - [`resolved`]: the output palette consumed by rendering code
//! - [`cache`]: memoized resolutions keyed by id, scheme and modes
//! - [`resolver`]: the entry point tying the above together

pub mod builtin;
pub mod cache;
pub mod custom;
pub mod resolved;
pub mod resolver;

use crate::settings::RawEnum;
use std::fmt;
use uuid::Uuid;

pub use builtin::BuiltinTheme;

/// Primes that receive an explicit color in every theme.
pub const THEMED_PRIMES: [u32; 10] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31];

/// Prefix marking a user-authored theme in its raw string encoding.
pub const CUSTOM_THEME_PREFIX: &str = "custom:";

/// Whether `prime` belongs to [`THEMED_PRIMES`].
pub fn is_themed_prime(prime: u32) -> bool {
    THEMED_PRIMES.contains(&prime)
}

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn is_dark(self) -> bool {
        self == ColorScheme::Dark
    }
}

/// Identity of a theme, parsed once from its persisted string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeId {
    Builtin(BuiltinTheme),
    Custom(Uuid),
}

impl ThemeId {
    /// Strict parse: `None` for anything that is not a known built-in raw
    /// value or `custom:` followed by a valid UUID.
    pub fn try_parse(raw: &str) -> Option<ThemeId> {
        match raw.strip_prefix(CUSTOM_THEME_PREFIX) {
            Some(uuid) => Uuid::parse_str(uuid).ok().map(ThemeId::Custom),
            None => BuiltinTheme::from_raw(raw).map(ThemeId::Builtin),
        }
    }

    /// Lenient parse used at the settings boundary: malformed or unknown
    /// ids become the default built-in theme.
    pub fn parse(raw: &str) -> ThemeId {
        Self::try_parse(raw).unwrap_or_default()
    }

    pub fn is_monochrome(&self) -> bool {
        *self == ThemeId::Builtin(BuiltinTheme::Monochrome)
    }
}

impl Default for ThemeId {
    fn default() -> Self {
        ThemeId::Builtin(BuiltinTheme::DEFAULT)
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeId::Builtin(theme) => f.write_str(theme.raw()),
            ThemeId::Custom(uuid) => write!(f, "{CUSTOM_THEME_PREFIX}{uuid}"),
        }
    }
}

/// How the colors of several primes are weighted when a ratio is tinted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMixBasis {
    ComplexityWeighted,
    Uniform,
    ExponentMagnitude,
}

impl RawEnum for ColorMixBasis {
    const DEFAULT: Self = ColorMixBasis::ComplexityWeighted;

    fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "complexityWeighted" => Some(Self::ComplexityWeighted),
            "uniform" => Some(Self::Uniform),
            "exponentMagnitude" => Some(Self::ExponentMagnitude),
            _ => None,
        }
    }

    fn raw(self) -> &'static str {
        match self {
            Self::ComplexityWeighted => "complexityWeighted",
            Self::Uniform => "uniform",
            Self::ExponentMagnitude => "exponentMagnitude",
        }
    }
}

/// How weighted prime colors are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorMixMode {
    Blend,
    Dominant,
}

impl RawEnum for ColorMixMode {
    const DEFAULT: Self = ColorMixMode::Blend;

    fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "blend" => Some(Self::Blend),
            "dominant" => Some(Self::Dominant),
            _ => None,
        }
    }

    fn raw(self) -> &'static str {
        match self {
            Self::Blend => "blend",
            Self::Dominant => "dominant",
        }
    }
}

/// Coloring of the Lissajous scope trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeColorMode {
    Constant,
    PrimeTint,
    RatioHue,
}

impl RawEnum for ScopeColorMode {
    const DEFAULT: Self = ScopeColorMode::Constant;

    fn from_raw(raw: &str) -> Option<Self> {
        match raw {
            "constant" => Some(Self::Constant),
            "primeTint" => Some(Self::PrimeTint),
            "ratioHue" => Some(Self::RatioHue),
            _ => None,
        }
    }

    fn raw(self) -> &'static str {
        match self {
            Self::Constant => "constant",
            Self::PrimeTint => "primeTint",
            Self::RatioHue => "ratioHue",
        }
    }
}

/// The three mode settings that take part in resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThemeModes {
    pub mix_basis: ColorMixBasis,
    pub mix_mode: ColorMixMode,
    pub scope_mode: ScopeColorMode,
}

impl ThemeModes {
    /// Fills absent modes with their defaults.
    pub fn from_options(
        mix_basis: Option<ColorMixBasis>,
        mix_mode: Option<ColorMixMode>,
        scope_mode: Option<ScopeColorMode>,
    ) -> Self {
        Self {
            mix_basis: mix_basis.unwrap_or(ColorMixBasis::DEFAULT),
            mix_mode: mix_mode.unwrap_or(ColorMixMode::DEFAULT),
            scope_mode: scope_mode.unwrap_or(ScopeColorMode::DEFAULT),
        }
    }
}

impl Default for ThemeModes {
    fn default() -> Self {
        Self::from_options(None, None, None)
    }
}
