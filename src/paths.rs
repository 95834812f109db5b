// File: src/paths.rs
use directories::ProjectDirs;
use std::env;
use std::path::PathBuf;

/// Overrides the platform config directory (handy for tests and portable installs).
pub const CONFIG_DIR_ENV: &str = "COLORBUDDY_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub struct AppPaths;

impl AppPaths {
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
            let trimmed = dir.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        ProjectDirs::from("", "", "colorbuddy").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
    }
}
