// tenney-core/src/lib.rs

//! The core logic behind the Tenney lattice tuner's settings and theming.
//! This crate covers slider detents, harmonic distance, Lissajous scope
//! periods, theme resolution and caching, preference decoding, legacy key
//! migration and settings search. It is completely headless and does no
//! file I/O; persistence is plugged in through the store traits.

pub mod color;
pub mod detent;
pub mod lattice;
pub mod lissajous;
pub mod migrate;
pub mod preferences;
pub mod search;
pub mod settings;
pub mod theme;

pub use color::Rgba;
pub use detent::{nearest_detent, DetentSet};
pub use lattice::{tenney_height_delta, PrimeExponents};
pub use settings::{MemorySettingsStore, RawEnum, SettingValue, SettingsStore};
pub use theme::custom::{CustomTheme, CustomThemeStore, MemoryThemeStore};
pub use theme::resolved::ResolvedTheme;
pub use theme::resolver::ThemeResolver;
pub use theme::{
    BuiltinTheme, ColorMixBasis, ColorMixMode, ColorScheme, ScopeColorMode, ThemeId, ThemeModes,
};
