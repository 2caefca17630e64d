//! Concrete palettes handed to rendering code.

use super::{ColorScheme, ThemeId, ThemeModes};
use crate::color::Rgba;
use std::collections::BTreeMap;

/// Color shared by every prime outside the themed set.
pub const NEUTRAL_PRIME_COLOR: Rgba = Rgba::from_rgb_u32(0x8E8E93);

/// Opacity of the surface tint (light, dark).
pub const SURFACE_TINT_OPACITY: (f32, f32) = (0.06, 0.12);

/// Opacity of the chroma shadow (light, dark).
pub const CHROMA_SHADOW_OPACITY: (f32, f32) = (0.18, 0.36);

/// A theme realized for one color scheme and one set of modes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    /// Theme the palette was actually built from. A missing custom theme
    /// resolves as the default built-in and reports that id here.
    pub id: ThemeId,
    pub name: String,
    pub scheme: ColorScheme,
    pub modes: ThemeModes,
    /// One entry per themed prime.
    pub prime_colors: BTreeMap<u32, Rgba>,
    pub tint: Rgba,
    pub tint_strength: f32,
    pub surface_tint: Rgba,
    pub chroma_shadow: Rgba,
    pub needle: Rgba,
    pub needle_opacity: f32,
    pub tick: Rgba,
    pub tick_opacity: f32,
    pub in_tune: Rgba,
    pub in_tune_strength: f32,
    pub scope: Rgba,
}

impl ResolvedTheme {
    /// Color for any prime; unthemed primes get [`NEUTRAL_PRIME_COLOR`].
    pub fn color_for_prime(&self, prime: u32) -> Rgba {
        self.prime_colors
            .get(&prime)
            .copied()
            .unwrap_or(NEUTRAL_PRIME_COLOR)
    }
}

/// Surface tint and chroma shadow derived from the prime-3 and prime-5
/// colors: their midpoint at the scheme's opacities.
pub fn surface_colors(prime3: Rgba, prime5: Rgba, scheme: ColorScheme) -> (Rgba, Rgba) {
    let mid = prime3.lerp(&prime5, 0.5);
    let (surface_opacity, shadow_opacity) = match scheme {
        ColorScheme::Light => (SURFACE_TINT_OPACITY.0, CHROMA_SHADOW_OPACITY.0),
        ColorScheme::Dark => (SURFACE_TINT_OPACITY.1, CHROMA_SHADOW_OPACITY.1),
    };
    (mid.with_opacity(surface_opacity), mid.with_opacity(shadow_opacity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_scheme_uses_stronger_surface_opacity() {
        let blue = Rgba::from_rgb_u32(0x0000FF);
        let red = Rgba::from_rgb_u32(0xFF0000);
        let (light_surface, light_shadow) = surface_colors(blue, red, ColorScheme::Light);
        let (dark_surface, dark_shadow) = surface_colors(blue, red, ColorScheme::Dark);
        assert!(dark_surface.a > light_surface.a);
        assert!(dark_shadow.a > light_shadow.a);
        assert!((light_surface.r - 0.5).abs() < 1e-6);
        assert!((light_surface.b - 0.5).abs() < 1e-6);
    }
}
