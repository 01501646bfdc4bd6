//! Configuration file loading.
//!
//! The configuration is a JSON document with nested sections:
//!
//! ```json
//! {
//!   "api": {
//!     "fmp": { "base": "https://financialmodelingprep.com/api/v3", "key": "..." },
//!     "retry_delay": 5.0,
//!     "max_attempts": 5
//!   },
//!   "cache": { "root": "data" }
//! }
//! ```
//!
//! It is loaded once at startup and handed to every component through the
//! [`Context`](crate::Context).

use crate::error::{DataError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default provider base URL.
pub const DEFAULT_FMP_BASE: &str = "https://financialmodelingprep.com/api/v3";

/// Environment variable that overrides `api.fmp.key`.
pub const API_KEY_ENV: &str = "FMP_API_KEY";

/// Name of the configuration file looked up on disk.
const CONFIG_FILE: &str = "config.json";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Disk cache settings
    #[serde(default)]
    pub cache: CacheConfig,
}

/// `api` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    /// Provider endpoint and credentials
    #[serde(default)]
    pub fmp: FmpConfig,
    /// Rate-limit retry policy, flattened into the `api` section
    #[serde(flatten)]
    pub retry: RetryPolicy,
}

/// `api.fmp` section.
#[derive(Clone, Deserialize)]
pub struct FmpConfig {
    /// Base URL every endpoint path is appended to
    #[serde(default = "default_base")]
    pub base: String,
    /// API key sent as the `apikey` query parameter
    #[serde(default)]
    pub key: String,
}

fn default_base() -> String {
    DEFAULT_FMP_BASE.to_string()
}

impl Default for FmpConfig {
    fn default() -> Self {
        Self {
            base: default_base(),
            key: String::new(),
        }
    }
}

impl std::fmt::Debug for FmpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FmpConfig")
            .field("base", &self.base)
            .field("key", &if self.key.is_empty() { "<unset>" } else { "<redacted>" })
            .finish()
    }
}

/// Retry policy for HTTP 429 responses.
///
/// The delay before retry `n` (1-based) is `retry_delay * 2^(n-1)`, capped at
/// `max_delay`. After `max_attempts` rate-limited responses the request fails.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RetryPolicy {
    /// Base delay in seconds
    #[serde(default = "default_retry_delay")]
    pub retry_delay: f64,
    /// Total number of attempts per request, including the first one
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Upper bound on a single delay, in seconds
    #[serde(default = "default_max_delay")]
    pub max_delay: f64,
}

const fn default_retry_delay() -> f64 {
    5.0
}

const fn default_max_attempts() -> u32 {
    5
}

const fn default_max_delay() -> f64 {
    60.0
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retry_delay: default_retry_delay(),
            max_attempts: default_max_attempts(),
            max_delay: default_max_delay(),
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after the given (1-based) rate-limited attempt.
    ///
    /// A `Retry-After` hint from the server raises the delay, still bounded by
    /// `max_delay`.
    pub fn delay_for(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        let backoff = self.retry_delay.max(0.0) * f64::from(1u32 << exponent);
        let cap = Duration::try_from_secs_f64(self.max_delay.max(0.0)).unwrap_or(Duration::MAX);
        let mut delay = Duration::try_from_secs_f64(backoff)
            .map_or(cap, |backoff| backoff.min(cap));
        if let Some(hint) = retry_after {
            delay = delay.max(hint.min(cap));
        }
        delay
    }
}

/// `cache` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheConfig {
    /// Cache root directory; defaults to the platform cache directory
    pub root: Option<PathBuf>,
}

impl CacheConfig {
    /// Configured root, or `<platform cache dir>/fundament`.
    pub fn root_or_default(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("fundament")
        })
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. `./config.json`
    /// 3. `<config dir>/fundament/config.json`
    ///
    /// When no file is found the defaults are used. The `FMP_API_KEY`
    /// environment variable overrides the key in every case.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let config = match explicit_path {
            Some(path) if !path.exists() => {
                return Err(DataError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => Self::from_path(path)?,
            None => match Self::find_config_file() {
                Some(path) => Self::from_path(&path)?,
                None => Self::default(),
            },
        };

        Ok(config.with_key_override(std::env::var(API_KEY_ENV).ok()))
    }

    /// Parse a configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
            .map_err(|e| DataError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse a configuration document.
    pub fn from_json(contents: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Replace the API key when an override is present and non-empty.
    pub fn with_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api.fmp.key = key;
        }
        self
    }

    fn find_config_file() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| dir.join("fundament").join(CONFIG_FILE))
            .filter(|path| path.exists())
    }
}
