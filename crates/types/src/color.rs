use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

/// An opaque sRGB color. Themes write these as `#RGB` or `#RRGGBB`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to the 0..1 range used by PDF color operators.
    pub fn to_unit_rgb(&self) -> [f32; 3] {
        [self.r, self.g, self.b].map(|c| c as f32 / 255.0)
    }

    pub fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {}", s))?;
        if !hex.is_ascii() {
            return Err(format!("Invalid hex color: {}", s));
        }
        let digits: Vec<u8> = match hex.len() {
            3 => hex
                .chars()
                .map(|d| u8::from_str_radix(&format!("{d}{d}"), 16))
                .collect::<Result<_, _>>(),
            6 => (0..6)
                .step_by(2)
                .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
                .collect::<Result<_, _>>(),
            n => return Err(format!("Invalid hex color length: expected 3 or 6, got {}", n)),
        }
        .map_err(|e| format!("Invalid hex color '{}': {}", s, e))?;
        Ok(Color::rgb(digits[0], digits[1], digits[2]))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
