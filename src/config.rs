use crate::io::DEFAULT_API_BASE_URL;
use crate::style::Theme;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable that overrides `api.base_url`
pub const API_BASE_URL_ENV: &str = "API_BASE_URL";

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub panel: PanelConfig,
    pub font: FontConfig,
    pub api: ApiConfig,
    pub registry: RegistryConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Panel layout configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PanelConfig {
    /// Width of the navigation sidebar (in pixels)
    pub sidebar_width: f32,
}

/// Font configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct FontConfig {
    /// Size of body text (in points)
    pub font_size: f32,
}

/// Content backend configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the REST backend, without a trailing resource
    pub base_url: String,
    /// Per-request timeout. Unset means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Navigation registry configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RegistryConfig {
    /// TOML file replacing the built-in navigation registry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            mode: "dark".to_string(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig {
            sidebar_width: 256.0,
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig { font_size: 14.0 }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "learn-dsa") {
            let config_dir = proj_dirs.config_dir();
            return Some(config_dir.join("config.toml"));
        }
        None
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match toml::from_str::<Config>(&contents) {
                        Ok(config) => {
                            log::info!("Loaded configuration from {}", path.display());
                            return config;
                        }
                        Err(e) => {
                            log::warn!("Failed to parse config file: {}", e);
                            log::warn!("Using default configuration");
                        }
                    },
                    Err(e) => {
                        log::warn!("Failed to read config file: {}", e);
                        log::warn!("Using default configuration");
                    }
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let contents = toml::to_string_pretty(self)?;
            fs::write(&path, contents)?;
            return Ok(());
        }

        Err("Could not determine config directory".into())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), Box<dyn std::error::Error>> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                let config = Config::default();
                config.save()?;
            }
        }
        Ok(())
    }

    pub fn theme(&self) -> Theme {
        Theme::from_mode(&self.theme.mode)
    }

    /// Base URL for the backend: `API_BASE_URL`, then the config file, then the default.
    pub fn api_base_url(&self) -> String {
        resolve_api_base_url(env::var(API_BASE_URL_ENV).ok(), &self.api.base_url)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.api.timeout_secs.map(Duration::from_secs)
    }
}

fn resolve_api_base_url(from_env: Option<String>, configured: &str) -> String {
    let chosen = match from_env {
        Some(url) if !url.trim().is_empty() => url,
        _ if !configured.trim().is_empty() => configured.to_string(),
        _ => DEFAULT_API_BASE_URL.to_string(),
    };
    chosen.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.theme.mode, "dark");
        assert_eq!(config.panel.sidebar_width, 256.0);
        assert_eq!(config.font.font_size, 14.0);
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert!(config.api.timeout_secs.is_none());
        assert!(config.registry.path.is_none());
        assert_eq!(config.theme(), Theme::Dark);
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.api.timeout_secs = Some(10);
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized: Config = toml::from_str(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.theme.mode, deserialized.theme.mode);
        assert_eq!(deserialized.request_timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "https://dsa.example.org/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://dsa.example.org/api");
        assert_eq!(config.theme.mode, "dark");
        assert!(config.request_timeout().is_none());
    }

    #[test]
    fn test_api_base_url_resolution() {
        assert_eq!(
            resolve_api_base_url(Some("http://remote:9000/api/".into()), "http://localhost:8000/api"),
            "http://remote:9000/api"
        );
        assert_eq!(
            resolve_api_base_url(Some("  ".into()), "http://configured/api"),
            "http://configured/api"
        );
        assert_eq!(
            resolve_api_base_url(None, ""),
            "http://localhost:8000/api"
        );
    }
}
