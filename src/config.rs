// src/config.rs

use crate::core::error::ConfigError;
use std::time::Duration;
use url::Url;

/// Environment variable naming the scanning/rendering backend.
pub const BACKEND_URL_ENV: &str = "XSSORCIST_BACKEND_URL";

/// Used when `XSSORCIST_BACKEND_URL` is unset.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";

/// Scans can take a while on the backend side (directory brute-forcing, payload injection).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Runtime settings for the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub backend_url: Url,
    pub timeout: Duration,
}

impl Config {
    /// Builds a config for an explicit backend, e.g. a test server.
    pub fn new(backend_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            backend_url: parse_backend_url(backend_url)?,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(BACKEND_URL_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        Self::new(&raw)
    }
}

fn parse_backend_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|source| ConfigError::InvalidBackendUrl {
        value: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_backend() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.backend_url.as_str(), "http://localhost:3001/");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);

        let config = Config::from_lookup(|_| Some("   ".to_string())).unwrap();
        assert_eq!(config.backend_url.as_str(), "http://localhost:3001/");
    }

    #[test]
    fn reads_backend_from_lookup() {
        let backend = "https://xssorcist-backend.vercel.app";
        let lookup = |key: &str| (key == BACKEND_URL_ENV).then(|| backend.to_string());
        let config = Config::from_lookup(lookup).unwrap();
        assert_eq!(
            config.backend_url.host_str(),
            Some("xssorcist-backend.vercel.app")
        );
    }

    #[test]
    fn rejects_bad_backends() {
        assert!(matches!(
            Config::new("not a url"),
            Err(ConfigError::InvalidBackendUrl { .. })
        ));
        assert!(matches!(
            Config::new("ftp://example.com"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }
}
