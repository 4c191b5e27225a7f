//! Application configuration
//!
//! Configuration loaded from `.localhub.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from `.localhub.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Total time from launch until the splash completes, in milliseconds
    #[serde(default = "default_splash_duration_ms")]
    pub splash_duration_ms: u64,

    /// Fade-out window at the tail of the splash, in milliseconds
    #[serde(default = "default_splash_fade_out_ms")]
    pub splash_fade_out_ms: u64,

    /// Simulated latency of login/sign-up/password reset, in milliseconds
    #[serde(default = "default_auth_delay_ms")]
    pub auth_delay_ms: u64,

    /// Language used until the user picks one
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Override for the preference file location
    #[serde(default)]
    pub store_file: Option<PathBuf>,
}

fn default_splash_duration_ms() -> u64 {
    3000
}

fn default_splash_fade_out_ms() -> u64 {
    500
}

fn default_auth_delay_ms() -> u64 {
    1500
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            splash_duration_ms: default_splash_duration_ms(),
            splash_fade_out_ms: default_splash_fade_out_ms(),
            auth_delay_ms: default_auth_delay_ms(),
            default_language: default_language(),
            store_file: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Time the splash stays fully visible before fading out
    ///
    /// The fade window is clamped to the total duration.
    pub fn splash_visible(&self) -> Duration {
        Duration::from_millis(
            self.splash_duration_ms
                .saturating_sub(self.splash_fade_out_ms),
        )
    }

    pub fn splash_fade_out(&self) -> Duration {
        Duration::from_millis(self.splash_fade_out_ms.min(self.splash_duration_ms))
    }

    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.splash_duration_ms, 3000);
        assert_eq!(config.splash_fade_out_ms, 500);
        assert_eq!(config.auth_delay_ms, 1500);
        assert_eq!(config.default_language, "en");
        assert!(config.store_file.is_none());
    }

    #[test]
    fn test_splash_phases_add_up() {
        let config = AppConfig::default();
        assert_eq!(
            config.splash_visible() + config.splash_fade_out(),
            Duration::from_millis(3000)
        );
    }

    #[test]
    fn test_fade_longer_than_splash_is_clamped() {
        let config = AppConfig {
            splash_duration_ms: 200,
            splash_fade_out_ms: 900,
            ..AppConfig::default()
        };
        assert_eq!(config.splash_visible(), Duration::ZERO);
        assert_eq!(config.splash_fade_out(), Duration::from_millis(200));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml = r#"
            splash_duration_ms = 1000
            default_language = "ta"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.splash_duration_ms, 1000);
        assert_eq!(config.default_language, "ta");
        // Other fields should use defaults
        assert_eq!(config.splash_fade_out_ms, 500);
        assert_eq!(config.auth_delay_ms, 1500);
    }

    #[test]
    fn test_config_store_file_override() {
        let toml = r#"store_file = "/tmp/localhub/prefs.json""#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            config.store_file,
            Some(PathBuf::from("/tmp/localhub/prefs.json"))
        );
    }
}
