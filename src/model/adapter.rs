// File: ./src/model/adapter.rs
// Handles the JSON contract of the remote extraction backend
use crate::color_utils::Rgb;
use crate::error::ContractError;
use crate::model::item::Palette;
use serde::{Deserialize, Serialize};

/// Body of a successful `/extract` or `/random` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteResponse {
    pub palette: Palette,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body of a non-2xx response. FastAPI puts the reason in `detail`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
    pub message: Option<String>,
}

impl PaletteResponse {
    pub fn new(palette: Palette, message: Option<String>) -> Self {
        Self { palette, message }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses and validates a response body. An empty palette or an entry
    /// with a malformed hex is treated as a failed request.
    pub fn from_json(raw: &str) -> Result<Self, ContractError> {
        let response: PaletteResponse = serde_json::from_str(raw)?;

        if response.palette.is_empty() {
            let reason = response
                .message
                .clone()
                .unwrap_or_else(|| "Palette data not found or empty in API response.".to_string());
            return Err(ContractError::EmptyPalette(reason));
        }

        for (index, color) in response.palette.iter().enumerate() {
            Rgb::from_hex(&color.hex).map_err(|source| ContractError::InvalidColor { index, source })?;
        }

        Ok(response)
    }

    pub fn into_palette(self) -> Palette {
        self.palette
    }
}

impl From<Palette> for PaletteResponse {
    fn from(palette: Palette) -> Self {
        Self::new(palette, None)
    }
}

/// Picks the user-facing reason for a failed request: `detail`, then
/// `message`, then a generic status line. Non-JSON bodies fall through.
pub fn http_error_message(status: u16, body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .detail
        .or(parsed.message)
        .unwrap_or_else(|| format!("HTTP error! status: {}", status))
}
