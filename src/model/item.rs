// File: ./src/model/item.rs
use crate::color_utils::{Hsl, Rgb};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};

/// A single palette entry. `hex` is `#`-prefixed six-digit RGB.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Order is meaningful (display and export order); duplicates are allowed.
pub type Palette = Vec<Color>;

impl Color {
    pub fn new(hex: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            name: None,
        }
    }

    pub fn named(hex: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            name: Some(name.into()),
        }
    }

    pub fn rgb(&self) -> Result<Rgb, ColorError> {
        Rgb::from_hex(&self.hex)
    }

    pub fn hsl(&self) -> Result<Hsl, ColorError> {
        Ok(self.rgb()?.to_hsl())
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unnamed_colors_omit_the_name_field() {
        let json = serde_json::to_string(&Color::new("#ff0000")).unwrap();
        assert_eq!(json, r##"{"hex":"#ff0000"}"##);

        let named = serde_json::to_string(&Color::named("#00ff00", "ocean-1")).unwrap();
        assert_eq!(named, r##"{"hex":"#00ff00","name":"ocean-1"}"##);
    }

    #[test]
    fn missing_name_deserializes_as_none() {
        let color: Color = serde_json::from_str(r##"{"hex":"#ABCDEF"}"##).unwrap();
        assert_eq!(color.name, None);
        assert_eq!(color.rgb().unwrap(), Rgb::new(0xab, 0xcd, 0xef));
    }
}
