//! Service configuration, resolved once at startup.
//!
//! The base URL comes from `LISK_SERVICE_URL` when set, otherwise the public
//! testnet deployment is used. A `.env` file in the working directory is
//! honoured by the binary before this module reads the environment.
//!
//! # Example
//!
//! ```no_run
//! use lisk_service_client::ServiceConfig;
//!
//! let config = ServiceConfig::from_env()?;
//! println!("Using {}", config.base_url());
//! # Ok::<(), lisk_service_client::ServiceError>(())
//! ```

use std::time::Duration;

use crate::client::http::HttpConfig;
use crate::domain::ServiceError;

// ============================================================================
// Constants
// ============================================================================

/// Public Lisk Service testnet API.
pub const DEFAULT_BASE_URL: &str = "https://testnet-service.lisk.com/api/v3";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "LISK_SERVICE_URL";

/// Environment variable enabling a request timeout, in whole seconds.
/// Requests are unbounded when it is unset.
pub const TIMEOUT_ENV: &str = "LISK_SERVICE_TIMEOUT_SECS";

// ============================================================================
// ServiceConfig
// ============================================================================

/// Immutable client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    base_url: String,
    http: HttpConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ServiceConfig {
    /// Configuration for an explicit base URL with default HTTP settings.
    ///
    /// A trailing `/` is dropped so endpoint paths can be appended directly.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            http: HttpConfig::default(),
        }
    }

    /// Resolve the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Config` if the timeout variable is set but is
    /// not a positive integer.
    pub fn from_env() -> Result<Self, ServiceError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Config` if the timeout value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServiceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = match get(BASE_URL_ENV) {
            Some(url) => Self::new(url.trim()),
            None => Self::default(),
        };

        if let Some(raw) = get(TIMEOUT_ENV) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| {
                    ServiceError::config(format!(
                        "{TIMEOUT_ENV} must be a positive number of seconds, got '{raw}'"
                    ))
                })?;
            config.http = HttpConfig::with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Replace the base URL, keeping the HTTP settings.
    #[must_use]
    pub fn with_base_url(self, base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            ..self
        }
    }

    /// Replace the HTTP settings.
    #[must_use]
    pub fn with_http(self, http: HttpConfig) -> Self {
        Self { http, ..self }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn http(&self) -> &HttpConfig {
        &self.http
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}

// ============================================================================
// Tests
// ============================================================================
