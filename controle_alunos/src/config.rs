use std::env;

use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://controledeturmas-production.up.railway.app";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = try_load(&var, "API_BASE_URL", DEFAULT_API_BASE_URL);

        let url = reqwest::Url::parse(&api_base_url).map_err(|e| ConfigError::Invalid {
            key: "API_BASE_URL",
            value: api_base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                key: "API_BASE_URL",
                value: api_base_url,
                reason: format!("unsupported scheme {}", url.scheme()),
            });
        }

        Ok(Config {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }
}

fn try_load(var: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    var(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| {
            log::info!("{key} not set, using default: {default}");
            default.to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_falls_back_to_default() {
        let config = Config::from_vars(|_| None).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = Config::from_vars(|_| Some(String::from("http://localhost:8080/"))).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn garbage_url_is_rejected() {
        assert!(Config::from_vars(|_| Some(String::from("not a url"))).is_err());
        assert!(Config::from_vars(|_| Some(String::from("ftp://example.com"))).is_err());
    }
}
