//! Data and log directory paths
//!
//! Uses XDG directories via `dirs` crate with fallbacks.
//!
//! Platform-specific locations:
//! - Linux: `~/.local/share/a11y-lens/`, `~/.cache/a11y-lens/`
//! - macOS: `~/Library/Application Support/a11y-lens/`, `~/Library/Caches/a11y-lens/`
//! - Windows: `%APPDATA%\a11y-lens\`, `%LOCALAPPDATA%\a11y-lens\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "a11y-lens";

/// Get the application data directory
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine data directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the user data storage file
pub fn user_data_path() -> Result<PathBuf> {
    Ok(data_dir()?.join("user-data.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_exists() {
        let dir = data_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_file_paths() {
        let user_data = user_data_path().unwrap();
        assert!(user_data.ends_with("user-data.json"));
    }
}
