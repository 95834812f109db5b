// File: src/temperature.rs
use crate::color_utils::{Hsl, Rgb, wrap_hue};
use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Coarse bias applied uniformly to generated colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Warm,
    Cool,
    #[default]
    Neutral,
}

/// Fixed HSL offset owned by a temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureShift {
    pub hue: i16,
    pub saturation: i16,
    pub lightness: i16,
}

const WARM_SHIFT: TemperatureShift = TemperatureShift {
    hue: 30,
    saturation: 10,
    lightness: 5,
};
const COOL_SHIFT: TemperatureShift = TemperatureShift {
    hue: -30,
    saturation: 5,
    lightness: -5,
};
const NO_SHIFT: TemperatureShift = TemperatureShift {
    hue: 0,
    saturation: 0,
    lightness: 0,
};

pub const WARM_FALLBACK: [&str; 5] = ["#ff4500", "#ff6347", "#ffa500", "#ffb347", "#daa520"];
pub const COOL_FALLBACK: [&str; 5] = ["#4169e1", "#00bfff", "#87ceeb", "#5f9ea0", "#20b2aa"];

impl Temperature {
    pub const ALL: [Temperature; 3] = [Temperature::Warm, Temperature::Cool, Temperature::Neutral];

    pub fn shift(self) -> TemperatureShift {
        match self {
            Temperature::Warm => WARM_SHIFT,
            Temperature::Cool => COOL_SHIFT,
            Temperature::Neutral => NO_SHIFT,
        }
    }

    /// Pool used when no theme matches. Neutral owns no set of its own.
    pub fn fallback_colors(self) -> Option<&'static [&'static str]> {
        match self {
            Temperature::Warm => Some(&WARM_FALLBACK),
            Temperature::Cool => Some(&COOL_FALLBACK),
            Temperature::Neutral => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Temperature::Warm => "warm",
            Temperature::Cool => "cool",
            Temperature::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown temperature '{0}' (expected warm, cool or neutral)")]
pub struct ParseTemperatureError(String);

impl FromStr for Temperature {
    type Err = ParseTemperatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warm" => Ok(Temperature::Warm),
            "cool" => Ok(Temperature::Cool),
            "neutral" => Ok(Temperature::Neutral),
            _ => Err(ParseTemperatureError(s.to_string())),
        }
    }
}

/// Shifts a color toward the temperature. Neutral returns the input as-is.
pub fn adjust_color_temperature(hex: &str, temperature: Temperature) -> Result<String, ColorError> {
    if temperature == Temperature::Neutral {
        return Ok(hex.to_string());
    }

    let hsl = Rgb::from_hex(hex)?.to_hsl();
    let shift = temperature.shift();
    let adjusted = Hsl {
        h: wrap_hue(hsl.h + shift.hue as f64),
        s: (hsl.s + shift.saturation as f64).clamp(0.0, 100.0),
        l: (hsl.l + shift.lightness as f64).clamp(0.0, 100.0),
    };
    Ok(adjusted.to_hex())
}
