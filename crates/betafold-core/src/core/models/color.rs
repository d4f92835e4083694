use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub alpha: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// The `#rrggbb` part of the color, ignoring alpha.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid color '{0}'. Expected '#rrggbb' or '#rgb'")]
pub struct ParseColorError(String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let digits = s.strip_prefix('#').ok_or_else(err)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(err());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| err())
        };
        match digits.len() {
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            3 => {
                let expand = |v: u8| v * 17;
                Ok(Self::rgb(
                    expand(channel(0..1)?),
                    expand(channel(1..2)?),
                    expand(channel(2..3)?),
                ))
            }
            _ => Err(err()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "{}", self.hex())
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.alpha)
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        let color: Color = "#22d3ee".parse().unwrap();
        assert_eq!(color, Color::rgb(0x22, 0xd3, 0xee));
    }

    #[test]
    fn parses_three_digit_hex() {
        let color: Color = "#fff".parse().unwrap();
        assert_eq!(color, Color::rgb(255, 255, 255));
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!("22d3ee".parse::<Color>().is_err());
        assert!("#22d3e".parse::<Color>().is_err());
        assert!("#gg0000".parse::<Color>().is_err());
        assert!("#".parse::<Color>().is_err());
    }

    #[test]
    fn display_uses_hex_when_opaque_and_rgba_otherwise() {
        assert_eq!(Color::rgb(11, 11, 15).to_string(), "#0b0b0f");
        assert_eq!(
            Color::rgba(255, 255, 255, 0.2).to_string(),
            "rgba(255,255,255,0.2)"
        );
    }

    #[test]
    fn hex_ignores_alpha() {
        assert_eq!(Color::rgba(255, 255, 255, 0.05).hex(), "#ffffff");
    }
}
