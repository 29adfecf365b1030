use std::env;

use crate::shared::errors::{AppError, AppResult};

/// Connection settings for one remote service, resolved from
/// `<SERVICE>_URL` / `<SERVICE>_API_KEY` environment variables.
///
/// Both values are validated here, before any client is built, so a
/// misconfigured service fails with one clear message instead of a
/// failed request.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
    pub api_key: String,
}

impl ServiceConfig {
    pub fn new(base_url: &str, api_key: &str) -> AppResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        let api_key = api_key.trim().to_string();
        if base_url.is_empty() {
            return Err(AppError::Configuration("base URL is empty".to_string()));
        }
        if api_key.is_empty() {
            return Err(AppError::Configuration("API key is empty".to_string()));
        }
        Ok(Self { base_url, api_key })
    }

    /// Read `{service}_URL` and `{service}_API_KEY`, e.g.
    /// `ServiceConfig::from_env("SONARR")`.
    pub fn from_env(service: &str) -> AppResult<Self> {
        let url_var = format!("{}_URL", service);
        let key_var = format!("{}_API_KEY", service);
        let base_url = env::var(&url_var).unwrap_or_default();
        let api_key = env::var(&key_var).unwrap_or_default();
        Self::new(&base_url, &api_key).map_err(|_| {
            AppError::Configuration(format!(
                "set {} and {} environment variables",
                url_var, key_var
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let config = ServiceConfig::new("http://sonarr:8989/", "abc123").unwrap();
        assert_eq!(config.base_url, "http://sonarr:8989");
        assert_eq!(config.api_key, "abc123");
    }

    #[test]
    fn rejects_empty_values() {
        assert!(ServiceConfig::new("", "abc123").is_err());
        assert!(ServiceConfig::new("http://sonarr:8989", "   ").is_err());
    }

    #[test]
    fn from_env_names_both_variables() {
        let err = ServiceConfig::from_env("ARRCTL_TEST_MISSING").unwrap_err();
        assert_eq!(
            err.to_string(),
            "set ARRCTL_TEST_MISSING_URL and ARRCTL_TEST_MISSING_API_KEY environment variables"
        );
    }
}
