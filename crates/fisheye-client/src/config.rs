//! Document store client configuration.
//!
//! Points at the JSON document holding the photographer collection. The
//! default targets the production bin. Override via environment variables
//! or explicit construction for staging/testing.

use url::Url;
use zeroize::Zeroizing;

/// Default URL of the photographer document.
pub const DEFAULT_STORE_URL: &str = "https://api.jsonbin.io/v3/b/fisheye-photographers/latest";

/// Header carrying the store's static access key.
pub const ACCESS_KEY_HEADER: &str = "x-access-key";

/// Variable overriding the store URL.
pub const STORE_URL_VAR: &str = "FISHEYE_STORE_URL";

/// Variable holding the access key.
pub const ACCESS_KEY_VAR: &str = "FISHEYE_ACCESS_KEY";

/// Variable holding the request timeout in seconds.
pub const TIMEOUT_VAR: &str = "FISHEYE_TIMEOUT_SECS";

/// Configuration for reaching the document store.
///
/// Custom `Debug` implementation redacts the `access_key` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct StoreConfig {
    /// URL of the photographer document.
    pub store_url: Url,
    /// Static read-only access key, sent in [`ACCESS_KEY_HEADER`].
    pub access_key: Zeroizing<String>,
    /// Request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("store_url", &self.store_url)
            .field("access_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl StoreConfig {
    /// Build a configuration from explicit values.
    pub fn new(store_url: Url, access_key: impl Into<String>, timeout_secs: Option<u64>) -> Self {
        Self {
            store_url,
            access_key: Zeroizing::new(access_key.into()),
            timeout_secs,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `FISHEYE_STORE_URL` (default: [`DEFAULT_STORE_URL`])
    /// - `FISHEYE_ACCESS_KEY` (required)
    /// - `FISHEYE_TIMEOUT_SECS` (default: no timeout)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| std::env::var(var).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value. Same variables and defaults as [`StoreConfig::from_env`].
    ///
    /// # Errors
    ///
    /// - `MissingAccessKey` if the access key is unset or empty.
    /// - `InvalidUrl` if the store URL does not parse.
    /// - `InvalidTimeout` if the timeout is set but is not a whole number of
    ///   seconds.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access_key = lookup(ACCESS_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingAccessKey)?;

        let store_url = var_url(&lookup, STORE_URL_VAR, DEFAULT_STORE_URL)?;

        let timeout_secs = match lookup(TIMEOUT_VAR) {
            Some(raw) => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            ),
            None => None,
        };

        Ok(Self {
            store_url,
            access_key: Zeroizing::new(access_key),
            timeout_secs,
        })
    }

    /// Create a configuration pointing at a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base_url` cannot be parsed.
    pub fn local_mock(base_url: &str, access_key: &str) -> Result<Self, ConfigError> {
        let store_url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidUrl("local_mock".to_string(), e.to_string()))?;
        Ok(Self {
            store_url,
            access_key: Zeroizing::new(access_key.to_string()),
            timeout_secs: Some(5),
        })
    }
}

fn var_url<F>(lookup: &F, var: &str, default: &str) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(var).unwrap_or_else(|| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No access key, or an empty one.
    #[error("FISHEYE_ACCESS_KEY is required and must not be empty")]
    MissingAccessKey,
    /// The access key cannot be sent as a header value.
    #[error("access key contains characters not allowed in an HTTP header")]
    InvalidAccessKey,
    /// A URL setting did not parse: (setting name, parse error).
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    /// The timeout is not a whole number of seconds. Holds the raw value.
    #[error("FISHEYE_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn local_mock_builds_valid_config() {
        let cfg = StoreConfig::local_mock("http://127.0.0.1:9000/b/photographers", "test-key")
            .unwrap();
        assert_eq!(cfg.access_key.as_str(), "test-key");
        assert_eq!(cfg.timeout_secs, Some(5));
        assert_eq!(
            cfg.store_url.as_str(),
            "http://127.0.0.1:9000/b/photographers"
        );
    }

    #[test]
    fn local_mock_rejects_garbage_url() {
        assert!(matches!(
            StoreConfig::local_mock("not a url", "k"),
            Err(ConfigError::InvalidUrl(..))
        ));
    }

    #[test]
    fn debug_redacts_access_key() {
        let cfg = StoreConfig::new(DEFAULT_STORE_URL.parse().unwrap(), "s3cret", None);
        let rendered = format!("{cfg:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("s3cret"));
    }

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn load(pairs: &[(&str, &str)]) -> Result<StoreConfig, ConfigError> {
        let vars = vars(pairs);
        StoreConfig::from_vars(|var| vars.get(var).cloned())
    }

    #[test]
    fn vars_use_defaults_when_only_key_is_set() {
        let cfg = load(&[(ACCESS_KEY_VAR, "k")]).unwrap();
        assert_eq!(cfg.store_url.as_str(), DEFAULT_STORE_URL);
        assert_eq!(cfg.access_key.as_str(), "k");
        assert_eq!(cfg.timeout_secs, None);
    }

    #[test]
    fn vars_override_url_and_timeout() {
        let cfg = load(&[
            (ACCESS_KEY_VAR, "k"),
            (STORE_URL_VAR, "http://127.0.0.1:8080/b/doc"),
            (TIMEOUT_VAR, " 3 "),
        ])
        .unwrap();
        assert_eq!(cfg.store_url.as_str(), "http://127.0.0.1:8080/b/doc");
        assert_eq!(cfg.timeout_secs, Some(3));
    }

    #[test]
    fn missing_or_empty_key_is_rejected() {
        assert!(matches!(load(&[]), Err(ConfigError::MissingAccessKey)));
        assert!(matches!(
            load(&[(ACCESS_KEY_VAR, "")]),
            Err(ConfigError::MissingAccessKey)
        ));
    }

    #[test]
    fn bad_store_url_names_the_variable() {
        match load(&[(ACCESS_KEY_VAR, "k"), (STORE_URL_VAR, "not a url")]) {
            Err(ConfigError::InvalidUrl(var, _)) => assert_eq!(var, STORE_URL_VAR),
            other => panic!("expected InvalidUrl, got: {other:?}"),
        }
    }

    #[test]
    fn bad_timeout_is_rejected_not_dropped() {
        for raw in ["soon", "-1", "2.5", ""] {
            match load(&[(ACCESS_KEY_VAR, "k"), (TIMEOUT_VAR, raw)]) {
                Err(ConfigError::InvalidTimeout(value)) => assert_eq!(value, raw),
                other => panic!("expected InvalidTimeout for {raw:?}, got: {other:?}"),
            }
        }
    }

    #[test]
    fn from_env_reads_process_environment() {
        std::env::set_var(ACCESS_KEY_VAR, "env-key");
        std::env::set_var(TIMEOUT_VAR, "later");
        let result = StoreConfig::from_env();
        std::env::remove_var(ACCESS_KEY_VAR);
        std::env::remove_var(TIMEOUT_VAR);
        assert!(matches!(result, Err(ConfigError::InvalidTimeout(ref v)) if v == "later"));
    }
}
