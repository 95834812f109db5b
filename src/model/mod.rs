// File: ./src/model/mod.rs
pub mod adapter;
pub mod item;

pub use adapter::{ErrorBody, PaletteResponse, http_error_message};
pub use item::{Color, Palette};
