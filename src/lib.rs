// File: src/lib.rs
pub mod color_utils;
pub mod config;
pub mod contrast;
pub mod error;
pub mod export;
pub mod extract;
pub mod generator;
pub mod harmony;
pub mod history;
pub mod model;
pub mod naming;
pub mod paths;
pub mod temperature;
pub mod theme;

pub use error::{ColorError, ContractError, ExtractError, PaletteError};
pub use generator::{generate, generate_with};
pub use model::{Color, Palette};
pub use temperature::Temperature;
