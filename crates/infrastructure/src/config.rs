//! Harness configuration.
//!
//! The harness recognises a single option: the base URL of the service under
//! test, read from `POSTCHECK_BASE_URL`.

use thiserror::Error;
use url::Url;

/// Environment variable holding the base URL.
pub const BASE_URL_ENV: &str = "POSTCHECK_BASE_URL";

/// Base URL used when the environment does not provide one.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Error type for configuration loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL could not be used.
    #[error("invalid base URL '{value}': {reason}")]
    InvalidBaseUrl {
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Configuration of the target service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    base_url: Url,
}

impl HarnessConfig {
    /// Builds a configuration from a base URL string.
    ///
    /// # Errors
    ///
    /// Returns an error unless `base_url` is an absolute `http` or `https`
    /// URL with a host. Query strings and fragments are rejected because
    /// request paths are appended to the base.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
            value: base_url.to_string(),
            reason: reason.to_string(),
        };

        let url = Url::parse(base_url.trim()).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if url.host_str().is_none() {
            return Err(invalid("missing host"));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(invalid("query strings and fragments are not supported"));
        }

        Ok(Self { base_url: url })
    }

    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `POSTCHECK_BASE_URL` is set to an unusable URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads the configuration through a variable lookup function.
    ///
    /// An unset or blank variable selects [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set to an unusable URL.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        match lookup(BASE_URL_ENV) {
            Some(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}
