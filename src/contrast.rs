// File: src/contrast.rs
//! WCAG 2.1 contrast ratio (success criterion 1.4.3) and the accessibility
//! levels derived from it.
use crate::color_utils::Rgb;
use crate::error::ColorError;
use crate::model::Palette;
use serde::Serialize;
use std::fmt;

pub const AAA_THRESHOLD: f64 = 7.0;
pub const AA_THRESHOLD: f64 = 4.5;
pub const AA_LARGE_THRESHOLD: f64 = 3.0;

pub const WHITE: &str = "#FFFFFF";
pub const BLACK: &str = "#000000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContrastLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AA (Large Text)")]
    AaLargeText,
    Fail,
}

impl ContrastLevel {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= AAA_THRESHOLD {
            ContrastLevel::Aaa
        } else if ratio >= AA_THRESHOLD {
            ContrastLevel::Aa
        } else if ratio >= AA_LARGE_THRESHOLD {
            ContrastLevel::AaLargeText
        } else {
            ContrastLevel::Fail
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContrastLevel::Aaa => "AAA",
            ContrastLevel::Aa => "AA",
            ContrastLevel::AaLargeText => "AA (Large Text)",
            ContrastLevel::Fail => "Fail",
        }
    }

    pub fn passes(self) -> bool {
        self != ContrastLevel::Fail
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastInfo {
    pub ratio: f64,
    pub level: ContrastLevel,
    /// AA for normal-size text.
    pub is_accessible_small: bool,
    /// AA for large text.
    pub is_accessible_large: bool,
}

/// Relative luminance of an sRGB color.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    fn linearize(channel: u8) -> f64 {
        let c = channel as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// Contrast ratio in [1, 21]; symmetric in its arguments.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

pub fn calculate_contrast(color1: &str, color2: &str) -> Result<ContrastInfo, ColorError> {
    let ratio = contrast_ratio(Rgb::from_hex(color1)?, Rgb::from_hex(color2)?);
    Ok(ContrastInfo {
        ratio,
        level: ContrastLevel::from_ratio(ratio),
        is_accessible_small: ratio >= AA_THRESHOLD,
        is_accessible_large: ratio >= AA_LARGE_THRESHOLD,
    })
}

/// White when it reaches the large-text threshold against the background,
/// black otherwise.
pub fn readable_text_color(background: &str) -> Result<&'static str, ColorError> {
    let ratio = contrast_ratio(Rgb::from_hex(background)?, Rgb::new(255, 255, 255));
    Ok(if ratio >= AA_LARGE_THRESHOLD { WHITE } else { BLACK })
}

/// One text-on-background check of an accessibility report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastPair {
    pub text: String,
    pub background: String,
    pub info: ContrastInfo,
}

/// Checks every color against the first one as background, and the second
/// color against the third when there are more than two.
pub fn accessibility_report(palette: &Palette) -> Result<Vec<ContrastPair>, ColorError> {
    if palette.len() < 2 {
        return Ok(Vec::new());
    }

    let pair = |background: &str, text: &str| -> Result<ContrastPair, ColorError> {
        Ok(ContrastPair {
            text: text.to_string(),
            background: background.to_string(),
            info: calculate_contrast(background, text)?,
        })
    };

    let background = &palette[0].hex;
    let mut report = palette[1..]
        .iter()
        .map(|c| pair(background, &c.hex))
        .collect::<Result<Vec<_>, _>>()?;

    if palette.len() > 2 {
        report.push(pair(&palette[1].hex, &palette[2].hex)?);
    }
    Ok(report)
}
