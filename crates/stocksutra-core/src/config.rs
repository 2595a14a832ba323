//! Runtime configuration.
//!
//! | Setting | Env var | Default |
//! |---------|---------|---------|
//! | `base_url` | `STOCKSUTRA_API_BASE` | `https://stock-sutra.onrender.com` |
//! | `timeout_ms` | `STOCKSUTRA_TIMEOUT_MS` | `10000` |
//! | `session_interval` | `STOCKSUTRA_SESSION_INTERVAL_SECS` | `60` |
//! | `retry` | `STOCKSUTRA_MAX_RETRIES` | disabled |

use std::time::Duration;

use crate::retry::RetryConfig;
use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://stock-sutra.onrender.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_SESSION_INTERVAL: Duration = Duration::from_secs(60);

pub const ENV_BASE_URL: &str = "STOCKSUTRA_API_BASE";
pub const ENV_TIMEOUT_MS: &str = "STOCKSUTRA_TIMEOUT_MS";
pub const ENV_SESSION_INTERVAL_SECS: &str = "STOCKSUTRA_SESSION_INTERVAL_SECS";
pub const ENV_MAX_RETRIES: &str = "STOCKSUTRA_MAX_RETRIES";

#[derive(Debug, Clone, PartialEq)]
pub struct SutraConfig {
    /// Provider root without a trailing slash.
    pub base_url: String,
    /// Per-request transport timeout.
    pub timeout_ms: u64,
    /// How often the session ticker re-evaluates the market status.
    pub session_interval: Duration,
    pub retry: RetryConfig,
}

impl Default for SutraConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            session_interval: DEFAULT_SESSION_INTERVAL,
            retry: RetryConfig::disabled(),
        }
    }
}

impl SutraConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(base_url)?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            config.timeout_ms = parse_positive(ENV_TIMEOUT_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SESSION_INTERVAL_SECS) {
            config.session_interval =
                Duration::from_secs(parse_positive(ENV_SESSION_INTERVAL_SECS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_MAX_RETRIES) {
            let retries = raw.trim().parse::<u32>().map_err(|_| ConfigError::InvalidNumber {
                name: ENV_MAX_RETRIES,
                value: raw.clone(),
            })?;
            config.retry = RetryConfig::exponential(retries);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(&base_url.into())?;
        Ok(self)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_session_interval(mut self, interval: Duration) -> Self {
        self.session_interval = interval;
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let has_host = ["http://", "https://"].iter().any(|scheme| {
        trimmed
            .strip_prefix(scheme)
            .is_some_and(|rest| !rest.is_empty())
    });
    if !has_host {
        return Err(ConfigError::InvalidBaseUrl {
            value: raw.to_owned(),
        });
    }
    Ok(trimmed.to_owned())
}

fn parse_positive(name: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ConfigError::InvalidNumber {
            name,
            value: raw.to_owned(),
        }),
    }
}
