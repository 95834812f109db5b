// File: src/harmony.rs
use crate::error::ColorError;
use crate::model::Palette;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteTemperature {
    Warm,
    Cool,
    Neutral,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Diversity {
    Monochromatic,
    Analogous,
    Complementary,
    Diverse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarmonyAnalysis {
    pub harmony_type: String,
    pub description: String,
    pub temperature: PaletteTemperature,
    pub diversity: Diversity,
}

/// Classifies a palette by hue spread, warm/cool balance, average saturation
/// and lightness range. Works on integer-rounded HSL values.
pub fn analyze_harmony(palette: &Palette) -> Result<HarmonyAnalysis, ColorError> {
    if palette.len() < 2 {
        return Ok(HarmonyAnalysis {
            harmony_type: "Single Color".to_string(),
            description: "Only one color present".to_string(),
            temperature: PaletteTemperature::Neutral,
            diversity: Diversity::Monochromatic,
        });
    }

    let hsl = palette
        .iter()
        .map(|c| c.hsl().map(|v| v.rounded()))
        .collect::<Result<Vec<_>, _>>()?;
    let hues: Vec<i32> = hsl.iter().map(|&(h, _, _)| h).collect();
    let saturations: Vec<i32> = hsl.iter().map(|&(_, s, _)| s).collect();
    let lightnesses: Vec<i32> = hsl.iter().map(|&(_, _, l)| l).collect();

    let warm = hues.iter().filter(|&&h| h <= 60 || h >= 300).count() as f64;
    let cool = hues.len() as f64 - warm;
    let temperature = if warm > cool * 1.5 {
        PaletteTemperature::Warm
    } else if cool > warm * 1.5 {
        PaletteTemperature::Cool
    } else if (warm - cool).abs() <= 1.0 {
        PaletteTemperature::Neutral
    } else {
        PaletteTemperature::Mixed
    };

    let spread = |values: &[i32]| {
        let max = values.iter().copied().max().unwrap_or(0);
        let min = values.iter().copied().min().unwrap_or(0);
        max - min
    };
    let hue_range = spread(&hues);
    let lightness_range = spread(&lightnesses);
    let avg_saturation = saturations.iter().sum::<i32>() as f64 / saturations.len() as f64;

    let (diversity, harmony_type, description) = if hue_range < 30 {
        (
            Diversity::Monochromatic,
            "Monochromatic",
            "Colors share the same hue with variations in lightness and saturation",
        )
    } else if hue_range < 60 {
        (
            Diversity::Analogous,
            "Analogous",
            "Colors are adjacent on the color wheel, creating harmony",
        )
    } else if hue_range > 150 && hue_range < 210 {
        (
            Diversity::Complementary,
            "Complementary",
            "Colors are opposite on the color wheel, creating contrast",
        )
    } else {
        (
            Diversity::Diverse,
            "Complex",
            "A diverse mix of colors creating visual interest",
        )
    };
    let mut description = description.to_string();

    if avg_saturation > 70.0 {
        description.push_str(" with vibrant saturation");
    } else if avg_saturation < 30.0 {
        description.push_str(" with muted tones");
    }

    if lightness_range > 60 {
        description.push_str(" and high contrast");
    } else if lightness_range < 20 {
        description.push_str(" with similar brightness");
    }

    Ok(HarmonyAnalysis {
        harmony_type: harmony_type.to_string(),
        description,
        temperature,
        diversity,
    })
}
