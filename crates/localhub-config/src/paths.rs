//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/localhub/`, `~/.cache/localhub/`
//! - macOS: `~/Library/Application Support/localhub/`, `~/Library/Caches/localhub/`
//! - Windows: `%APPDATA%\localhub\`, `%LOCALAPPDATA%\localhub\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "localhub";
const PREFERENCE_FILE: &str = "preferences.json";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create config directory {:?}", dir))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {:?}", dir))?;
    Ok(dir)
}

/// Default location of the persisted preference flags
pub fn preference_store_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(PREFERENCE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_exists() {
        let dir = config_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_cache_dir_exists() {
        let dir = cache_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_preference_store_path() {
        let path = preference_store_path().unwrap();
        assert!(path.ends_with(PREFERENCE_FILE));
    }
}
