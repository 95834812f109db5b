// File: src/export.rs
// Snippets for pasting a palette into a stylesheet or build config.
use crate::model::{Palette, PaletteResponse};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One `hex  name` line per color.
    #[default]
    List,
    Css,
    Tailwind,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown format '{0}' (expected list, css, tailwind or json)")]
pub struct ParseExportFormatError(String);

impl FromStr for ExportFormat {
    type Err = ParseExportFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "list" => Ok(ExportFormat::List),
            "css" => Ok(ExportFormat::Css),
            "tailwind" => Ok(ExportFormat::Tailwind),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ParseExportFormatError(s.to_string())),
        }
    }
}

pub fn tailwind_config(palette: &Palette) -> String {
    let mut colors = String::new();
    for (index, color) in palette.iter().enumerate() {
        let _ = write!(colors, "        'brand-{}': '{}',", index + 1, color.hex);
        if let Some(name) = &color.name {
            let _ = write!(colors, " // {}", name);
        }
        colors.push('\n');
    }

    format!(
        "// tailwind.config.js\nmodule.exports = {{\n  theme: {{\n    extend: {{\n      colors: {{\n{}      }},\n    }},\n  }},\n}};",
        colors
    )
}

pub fn css_variables(palette: &Palette) -> String {
    let mut out = String::from(":root {\n");
    for (index, color) in palette.iter().enumerate() {
        let _ = write!(out, "  --brand-color-{}: {};", index + 1, color.hex);
        if let Some(name) = &color.name {
            let _ = write!(out, " /* {} */", name);
        }
        out.push('\n');
    }
    out.push('}');
    out
}

pub fn plain_list(palette: &Palette) -> String {
    palette
        .iter()
        .map(|c| match &c.name {
            Some(name) => format!("{}  {}", c.hex, name),
            None => c.hex.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render(palette: &Palette, format: ExportFormat) -> Result<String, serde_json::Error> {
    Ok(match format {
        ExportFormat::List => plain_list(palette),
        ExportFormat::Css => css_variables(palette),
        ExportFormat::Tailwind => tailwind_config(palette),
        ExportFormat::Json => PaletteResponse::from(palette.clone()).to_json()?,
    })
}
