//! Configuration management for the Portosync client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the Portosync client
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// Portosync API key, sent as `X-API-KEY`
  pub api_key: String,

  /// Base URL for the Portosync API, ending with `/`
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("PORTOSYNC_API_KEY")
      .map_err(|_| Error::Config("PORTOSYNC_API_KEY not set".to_string()))?;

    let timeout_secs = env::var("PORTOSYNC_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid PORTOSYNC_TIMEOUT_SECS".to_string()))?;

    let base_url =
      env::var("PORTOSYNC_BASE_URL").unwrap_or_else(|_| crate::PORTOSYNC_BASE_URL.to_string());

    Ok(Config { api_key, base_url: with_trailing_slash(base_url), timeout_secs })
  }

  /// Create a config with default values
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      base_url: crate::PORTOSYNC_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }

  /// Point the config at another deployment of the service
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = with_trailing_slash(base_url.into());
    self
  }

  /// Reject a blank API key before any request is built
  pub fn validate(&self) -> Result<()> {
    if self.api_key.trim().is_empty() {
      return Err(Error::InvalidArgument("API key must not be blank".to_string()));
    }
    Ok(())
  }
}

/// Append the `/` that resource paths are concatenated onto, if missing
pub fn with_trailing_slash(mut base_url: String) -> String {
  if !base_url.ends_with('/') {
    base_url.push('/');
  }
  base_url
}

impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Config")
      .field("api_key", &"***")
      .field("base_url", &self.base_url)
      .field("timeout_secs", &self.timeout_secs)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_from_env() {
    env::set_var("PORTOSYNC_API_KEY", "test_key");
    env::set_var("PORTOSYNC_BASE_URL", "http://localhost:8080/api");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, "test_key");
    assert_eq!(config.base_url, "http://localhost:8080/api/");
    assert_eq!(config.timeout_secs, crate::DEFAULT_TIMEOUT_SECS);

    env::set_var("PORTOSYNC_TIMEOUT_SECS", "soon");
    assert!(matches!(Config::from_env(), Err(Error::Config(_))));
    env::remove_var("PORTOSYNC_TIMEOUT_SECS");
  }

  #[test]
  fn test_with_trailing_slash() {
    assert_eq!(with_trailing_slash("http://localhost/api".to_string()), "http://localhost/api/");
    assert_eq!(with_trailing_slash("http://localhost/api/".to_string()), "http://localhost/api/");
  }

  #[test]
  fn test_default_with_key() {
    let config = Config::default_with_key("api-key".to_string());
    assert_eq!(config.base_url, "https://portosync.ovh/api/");
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_blank_key_is_invalid_argument() {
    let config = Config::default_with_key("   ".to_string());
    assert!(matches!(config.validate(), Err(Error::InvalidArgument(_))));
  }

  #[test]
  fn test_debug_redacts_api_key() {
    let config = Config::default_with_key("super-secret".to_string());
    let debug = format!("{:?}", config);
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("portosync.ovh"));
  }
}
