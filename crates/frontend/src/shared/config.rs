//! Application configuration.
//!
//! A default TOML document is compiled in. A page can override it with an
//! inline block:
//!
//! ```html
//! <script type="application/toml" id="app-config">
//! [api]
//! base_url = "http://localhost:8080/api/json/v1/1"
//! </script>
//! ```

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("api.base_url must not be empty")]
    EmptyBaseUrl,
}

macro_rules! default_base_url {
    () => {
        "https://www.themealdb.com/api/json/v1/1"
    };
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = concat!("[api]\nbase_url = \"", default_base_url!(), "\"\n");

/// Element id of the inline override block
pub const INLINE_CONFIG_ID: &str = "app-config";

impl AppConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut config: AppConfig = toml::from_str(contents)?;
        config.api.base_url = config.api.base_url.trim().trim_end_matches('/').to_string();
        if config.api.base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: default_base_url!().to_string(),
            },
        }
    }
}

/// Load configuration for the current page.
///
/// Search order:
/// 1. Inline `<script id="app-config">` block
/// 2. Embedded default
pub fn load_config() -> AppConfig {
    let inline = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(INLINE_CONFIG_ID))
        .and_then(|el| el.text_content());

    resolve_config(inline.as_deref())
}

fn resolve_config(inline: Option<&str>) -> AppConfig {
    if let Some(contents) = inline {
        match AppConfig::from_toml(contents) {
            Ok(config) => {
                log::info!("Loading config from inline #{} block", INLINE_CONFIG_ID);
                return config;
            }
            Err(e) => log::warn!("Ignoring inline config: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    AppConfig::from_toml(DEFAULT_CONFIG).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, "https://www.themealdb.com/api/json/v1/1");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = AppConfig::from_toml("[api]\nbase_url = \"http://localhost:8080/v1/\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn test_invalid_inline_config_falls_back() {
        assert_eq!(resolve_config(Some("[api]\nbase_url = \"  \"")), AppConfig::default());
        assert_eq!(resolve_config(Some("not toml at all [")), AppConfig::default());
        assert_eq!(resolve_config(None), AppConfig::default());
    }

    #[test]
    fn test_inline_config_wins() {
        let config = resolve_config(Some("[api]\nbase_url = \"http://mirror.local\""));
        assert_eq!(config.api.base_url, "http://mirror.local");
    }
}
