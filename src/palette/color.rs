//! Hex color parsing, formatting, and HSL adjustments

use crate::io::error::{ArtGridError, Result};
use std::fmt;

/// A 24-bit RGB color parsed from a hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Construct from raw channel values
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RGB` or `#RRGGBB` hex string
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is missing, the digit count is wrong,
    /// or any digit is not hexadecimal
    pub fn from_hex(value: &str) -> Result<Self> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| ArtGridError::InvalidColor {
                value: value.to_string(),
                reason: "missing '#' prefix",
            })?;

        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_string(),
            _ => {
                return Err(ArtGridError::InvalidColor {
                    value: value.to_string(),
                    reason: "expected 3 or 6 hex digits",
                });
            }
        };

        let channel = |start: usize| {
            expanded
                .get(start..start + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ArtGridError::InvalidColor {
                    value: value.to_string(),
                    reason: "non-hexadecimal digit",
                })
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Component-wise average of two colors
    pub const fn mix(self, other: Self) -> Self {
        Self {
            r: ((self.r as u16 + other.r as u16) / 2) as u8,
            g: ((self.g as u16 + other.g as u16) / 2) as u8,
            b: ((self.b as u16 + other.b as u16) / 2) as u8,
        }
    }

    /// Convert to (hue, saturation, lightness), each in [0, 1]
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let d = max - min;

        if d.abs() < f64::EPSILON {
            return (0.0, 0.0, l);
        }

        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if (max - r).abs() < f64::EPSILON {
            ((g - b) / d).rem_euclid(6.0)
        } else if (max - g).abs() < f64::EPSILON {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        (h / 6.0, s, l)
    }

    /// Construct from (hue, saturation, lightness), each in [0, 1]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        if s <= 0.0 {
            let gray = unit_to_channel(l);
            return Self::new(gray, gray, gray);
        }

        let q = if l < 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;

        Self {
            r: unit_to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            g: unit_to_channel(hue_to_rgb(p, q, h)),
            b: unit_to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        }
    }

    /// Return this color with saturation reduced by `amount`
    pub fn desaturated(self, amount: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, (s - amount).max(0.0), l)
    }

    /// Return this color with lightness raised by `amount`
    pub fn lightened(self, amount: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l + amount).min(1.0))
    }

    /// Return this color with lightness lowered by `amount`
    pub fn darkened(self, amount: f64) -> Self {
        let (h, s, l) = self.to_hsl();
        Self::from_hsl(h, s, (l - amount).max(0.0))
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        (q - p).mul_add(6.0 * t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        (q - p).mul_add(6.0 * (2.0 / 3.0 - t), p)
    } else {
        p
    }
}

fn unit_to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_six_digit_hex() {
        let color = Color::from_hex("#FF6B6B").map_err(|e| e.to_string());
        assert_eq!(color, Ok(Color::new(0xFF, 0x6B, 0x6B)));
    }

    #[test]
    fn test_parse_three_digit_hex_expands() {
        let color = Color::from_hex("#1a2").map_err(|e| e.to_string());
        assert_eq!(color, Ok(Color::new(0x11, 0xAA, 0x22)));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Color::from_hex("FF6B6B").is_err());
        assert!(Color::from_hex("#FF6B").is_err());
        assert!(Color::from_hex("#GG0000").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let color = Color::new(0x07, 0x3B, 0x4C);
        assert_eq!(color.to_string(), "#073B4C");
        assert_eq!(
            Color::from_hex(&color.to_string()).map_err(|e| e.to_string()),
            Ok(color)
        );
    }

    #[test]
    fn test_hsl_round_trip_is_close() {
        let color = Color::new(0xD6, 0x28, 0x28);
        let (h, s, l) = color.to_hsl();
        let back = Color::from_hsl(h, s, l);
        assert!(i16::from(back.r).abs_diff(i16::from(color.r)) <= 1);
        assert!(i16::from(back.g).abs_diff(i16::from(color.g)) <= 1);
        assert!(i16::from(back.b).abs_diff(i16::from(color.b)) <= 1);
    }

    #[test]
    fn test_mix_averages_channels() {
        let mixed = Color::new(100, 0, 255).mix(Color::new(200, 100, 0));
        assert_eq!(mixed, Color::new(150, 50, 127));
    }
}
