//! Optional retry layer around an [`HttpClient`].
//!
//! The provider client and the coordinator never retry on their own. When a
//! deployment wants retries, the transport is wrapped in a
//! [`RetryingHttpClient`] and everything above it stays unchanged.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::http_client::{HttpClient, HttpFuture, HttpRequest};

/// Delay schedule between attempts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backoff {
    Fixed(Duration),
    /// `base * factor^attempt`, capped at `max`, optionally spread by +/- 50%.
    Exponential {
        base: Duration,
        factor: f64,
        max: Duration,
        jitter: bool,
    },
}

impl Default for Backoff {
    fn default() -> Self {
        Self::Exponential {
            base: Duration::from_millis(250),
            factor: 2.0,
            max: Duration::from_secs(4),
            jitter: true,
        }
    }
}

impl Backoff {
    /// Delay before retry number `attempt` (0-based).
    pub fn delay(self, attempt: u32) -> Duration {
        match self {
            Self::Fixed(delay) => delay,
            Self::Exponential {
                base,
                factor,
                max,
                jitter,
            } => {
                let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
                let seconds = (base.as_secs_f64() * factor.powi(exponent)).min(max.as_secs_f64());
                let delay = Duration::from_secs_f64(seconds);
                if !jitter {
                    return delay;
                }

                let millis = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
                let spread = millis / 2;
                let offset = fastrand::u64(0..=spread.saturating_mul(2));
                Duration::from_millis((millis - spread).saturating_add(offset))
            }
        }
    }
}

/// When and how often a request is retried.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Extra attempts after the first one. Zero disables retrying.
    pub max_retries: u32,
    pub backoff: Backoff,
    /// Statuses treated as transient even though a response arrived.
    pub retry_on_status: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::disabled()
    }
}

impl RetryConfig {
    pub fn disabled() -> Self {
        Self {
            max_retries: 0,
            backoff: Backoff::default(),
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
        }
    }

    pub fn exponential(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::disabled()
        }
    }

    pub fn fixed(delay: Duration, max_retries: u32) -> Self {
        Self {
            max_retries,
            backoff: Backoff::Fixed(delay),
            ..Self::disabled()
        }
    }

    pub const fn is_enabled(&self) -> bool {
        self.max_retries > 0
    }

    pub fn should_retry_status(&self, status: u16) -> bool {
        self.retry_on_status.contains(&status)
    }
}

/// Transport decorator that replays transient failures.
pub struct RetryingHttpClient {
    inner: Arc<dyn HttpClient>,
    config: RetryConfig,
}

impl RetryingHttpClient {
    pub fn new(inner: Arc<dyn HttpClient>, config: RetryConfig) -> Self {
        Self { inner, config }
    }

    /// Wraps `inner` only when `config` actually retries.
    pub fn wrap(inner: Arc<dyn HttpClient>, config: RetryConfig) -> Arc<dyn HttpClient> {
        if config.is_enabled() {
            Arc::new(Self::new(inner, config))
        } else {
            inner
        }
    }
}

impl HttpClient for RetryingHttpClient {
    fn execute<'a>(&'a self, request: HttpRequest) -> HttpFuture<'a> {
        Box::pin(async move {
            let mut attempt = 0;
            loop {
                let result = self.inner.execute(request.clone()).await;
                let transient = match &result {
                    Ok(response) => self.config.should_retry_status(response.status),
                    Err(error) => error.retryable(),
                };
                if !transient || attempt >= self.config.max_retries {
                    return result;
                }

                let delay = self.config.backoff.delay(attempt);
                debug!(url = %request.url, attempt, ?delay, "retrying request");
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        })
    }
}
