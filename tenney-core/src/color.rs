//! RGBA color value used by theme palettes.

use std::fmt;

/// A linear RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a packed `0xRRGGBB` value.
    pub const fn from_rgb_u32(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`; the leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if (hex.len() != 6 && hex.len() != 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .ok()
                .map(|v| v as f32 / 255.0)
        };
        let a = if hex.len() == 8 { channel(6..8)? } else { 1.0 };
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?, a))
    }

    /// Formats as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if byte(self.a) == 255 {
            format!("#{:02X}{:02X}{:02X}", byte(self.r), byte(self.g), byte(self.b))
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(self.a)
            )
        }
    }

    /// Linear interpolation between `self` (t = 0) and `other` (t = 1).
    pub fn lerp(&self, other: &Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        Rgba {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Same color with alpha replaced by `opacity`.
    pub fn with_opacity(&self, opacity: f32) -> Rgba {
        Rgba {
            a: opacity.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Scales lightness toward white (`amount > 0`) or black (`amount < 0`).
    pub fn shade(&self, amount: f32) -> Rgba {
        let target = if amount >= 0.0 {
            Rgba::new(1.0, 1.0, 1.0, self.a)
        } else {
            Rgba::new(0.0, 0.0, 0.0, self.a)
        };
        self.lerp(&target, amount.abs())
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(Rgba::from_hex("#FF8000"), Rgba::from_hex("ff8000"));
        assert_eq!(Rgba::from_hex("#FF8000"), Some(Rgba::from_rgb_u32(0xFF8000)));
    }

    #[test]
    fn parses_alpha_channel() {
        let color = Rgba::from_hex("#00000080").unwrap();
        assert!((color.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(Rgba::from_hex("#12345"), None);
        assert_eq!(Rgba::from_hex("#GG0000"), None);
        assert_eq!(Rgba::from_hex(""), None);
        assert_eq!(Rgba::from_hex("#ééé"), None);
        assert_eq!(Rgba::from_hex("#+F+F+F"), None);
        assert_eq!(Rgba::from_hex("##FF0000"), None);
        assert_eq!(Rgba::from_hex("#-1-1-1"), None);
    }

    #[test]
    fn hex_formatting_round_trips_opaque_and_translucent() {
        assert_eq!(Rgba::from_rgb_u32(0x3A7BD5).to_hex(), "#3A7BD5");
        assert_eq!(Rgba::from_rgb_u32(0x3A7BD5).with_opacity(0.0).to_hex(), "#3A7BD500");
    }

    #[test]
    fn midpoint_lerp_averages_channels() {
        let mid = Rgba::new(0.0, 0.2, 1.0, 1.0).lerp(&Rgba::new(1.0, 0.4, 0.0, 1.0), 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.g - 0.3).abs() < 1e-6);
        assert!((mid.b - 0.5).abs() < 1e-6);
    }
}
