use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors from color parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
    #[error("unknown color name: {0}")]
    Unknown(String),
}

/// An sRGB color stored as a 24-bit `0xRRGGBB` value.
///
/// Shading happens in linear space; use [`Color::linear`] for GPU data.
/// Serializes as a `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    srgb: u32,
}

const NAMED: &[(&str, u32)] = &[
    ("black", 0x000000),
    ("white", 0xffffff),
    ("red", 0xff0000),
    ("lime", 0x00ff00),
    ("green", 0x008000),
    ("blue", 0x0000ff),
    ("yellow", 0xffff00),
    ("cyan", 0x00ffff),
    ("aqua", 0x00ffff),
    ("magenta", 0xff00ff),
    ("fuchsia", 0xff00ff),
    ("gray", 0x808080),
    ("grey", 0x808080),
    ("orange", 0xffa500),
    ("purple", 0x800080),
    ("navy", 0x000080),
    ("teal", 0x008080),
    ("silver", 0xc0c0c0),
    ("maroon", 0x800000),
    ("olive", 0x808000),
];

impl Color {
    pub const BLACK: Color = Color { srgb: 0x000000 };
    pub const WHITE: Color = Color { srgb: 0xffffff };
    pub const BLUE: Color = Color { srgb: 0x0000ff };

    pub const fn from_hex(hex: u32) -> Self {
        Self {
            srgb: hex & 0x00ff_ffff,
        }
    }

    pub fn hex(&self) -> u32 {
        self.srgb
    }

    /// Parse `#rrggbb`, `#rgb`, `0xrrggbb` or a CSS color name.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        let digits = lower
            .strip_prefix('#')
            .or_else(|| lower.strip_prefix("0x"));
        if let Some(digits) = digits {
            return parse_hex_digits(digits).ok_or_else(|| ColorError::InvalidHex(trimmed.into()));
        }

        NAMED
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, hex)| Self::from_hex(*hex))
            .ok_or_else(|| ColorError::Unknown(trimmed.into()))
    }

    /// sRGB channels in `0.0..=1.0`.
    pub fn srgb(&self) -> [f32; 3] {
        [
            ((self.srgb >> 16) & 0xff) as f32 / 255.0,
            ((self.srgb >> 8) & 0xff) as f32 / 255.0,
            (self.srgb & 0xff) as f32 / 255.0,
        ]
    }

    /// Linear-light channels for shading.
    pub fn linear(&self) -> [f32; 3] {
        self.srgb().map(srgb_to_linear)
    }
}

fn parse_hex_digits(digits: &str) -> Option<Color> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => u32::from_str_radix(digits, 16).ok().map(Color::from_hex),
        3 => {
            let short = u32::from_str_radix(digits, 16).ok()?;
            let (r, g, b) = ((short >> 8) & 0xf, (short >> 4) & 0xf, short & 0xf);
            Some(Color::from_hex(((r * 0x11) << 16) | ((g * 0x11) << 8) | (b * 0x11)))
        }
        _ => None,
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Color> for String {
    fn from(c: Color) -> String {
        c.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.srgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(Color::parse("blue").unwrap(), Color::BLUE);
        assert_eq!(Color::parse("White").unwrap(), Color::WHITE);
        assert_eq!(Color::parse(" grey ").unwrap().hex(), 0x808080);
    }

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Color::parse("#00ff00").unwrap().hex(), 0x00ff00);
        assert_eq!(Color::parse("0x00FF00").unwrap().hex(), 0x00ff00);
        assert_eq!(Color::parse("#0f0").unwrap().hex(), 0x00ff00);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(Color::parse("#12345"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(Color::parse("#gg0000"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(Color::parse("chartreuse-ish"), Err(ColorError::Unknown(_))));
    }

    #[test]
    fn linear_conversion_endpoints() {
        assert!(Color::WHITE.linear().iter().all(|c| (c - 1.0).abs() < 1e-6));
        assert_eq!(Color::BLACK.linear(), [0.0, 0.0, 0.0]);
        // Mid gray is darker in linear light.
        let gray = Color::from_hex(0x808080).linear();
        assert!((gray[0] - 0.2158).abs() < 1e-3);
    }

    #[test]
    fn serializes_as_hex_string() {
        let yaml = serde_yaml::to_string(&Color::from_hex(0x00ff00)).unwrap();
        assert!(yaml.contains("#00ff00"));
        let round: Color = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(round.hex(), 0x00ff00);
        let back: Color = serde_yaml::from_str("navy").unwrap();
        assert_eq!(back.hex(), 0x000080);
    }
}
