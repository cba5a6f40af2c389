use std::fmt;
use std::str::FromStr;

use egui::Color32;

use crate::error::EditorError;

/// Pen color of a shape, written as a `#RRGGBB` identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShapeColor(Color32);

impl ShapeColor {
    pub const RED: Self = Self(Color32::from_rgb(0xFF, 0x00, 0x00));
    pub const LIME: Self = Self(Color32::from_rgb(0x0D, 0xFF, 0x00));

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Color32::from_rgb(r, g, b))
    }

    pub fn color32(&self) -> Color32 {
        self.0
    }
}

impl Default for ShapeColor {
    fn default() -> Self {
        Self::RED
    }
}

impl From<Color32> for ShapeColor {
    fn from(color: Color32) -> Self {
        // Shapes are always drawn opaque
        Self(Color32::from_rgb(color.r(), color.g(), color.b()))
    }
}

impl FromStr for ShapeColor {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EditorError::InvalidColor(s.to_string());

        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Self::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for ShapeColor {
    type Error = EditorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ShapeColor> for String {
    fn from(color: ShapeColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for ShapeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0.r(), self.0.g(), self.0.b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        let color: ShapeColor = "#0dff00".parse().unwrap();
        assert_eq!(color, ShapeColor::LIME);
        assert_eq!(color.to_string(), "#0DFF00");
        assert_eq!(ShapeColor::default().to_string(), "#FF0000");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["FF0000", "#FF00", "#GG0000", "#FF00000", "", "#ÿÿÿ"] {
            assert!(
                matches!(bad.parse::<ShapeColor>(), Err(EditorError::InvalidColor(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_from_color32_drops_alpha() {
        let color = ShapeColor::from(Color32::from_rgba_unmultiplied(10, 20, 30, 128));
        assert_eq!(color.color32().a(), 255);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&ShapeColor::RED).unwrap();
        assert_eq!(json, "\"#FF0000\"");
        let back: ShapeColor = serde_json::from_str("\"#0DFF00\"").unwrap();
        assert_eq!(back, ShapeColor::LIME);
        assert!(serde_json::from_str::<ShapeColor>("\"red\"").is_err());
    }
}
