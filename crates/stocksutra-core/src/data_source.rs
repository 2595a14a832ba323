//! Data source contract consumed by the coordinator.
//!
//! | Operation | Provider route | Result |
//! |-----------|----------------|--------|
//! | [`quote`](MarketDataSource::quote) | `GET {base}/stock/{symbol}` | [`Quote`] |
//! | [`chart`](MarketDataSource::chart) | `GET {base}/stock/{symbol}/chart` | [`ChartSeries`] |
//!
//! Implementations perform exactly one upstream call per operation and never
//! retry; see [`crate::retry`] for the opt-in transport wrapper.

use std::future::Future;
use std::pin::Pin;

use crate::{ChartSeries, FetchError, Quote, Symbol};

/// Boxed future returned by [`MarketDataSource`] operations.
pub type FetchFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, FetchError>> + Send + 'a>>;

/// Quote and intraday chart provider.
///
/// # Errors
///
/// Both operations fail with [`FetchError::Provider`] or
/// [`FetchError::NotFound`] when the provider answers with a structured error
/// body, and with [`FetchError::Network`] when no usable response arrives.
pub trait MarketDataSource: Send + Sync {
    /// Fetches the latest quote for `symbol`.
    fn quote<'a>(&'a self, symbol: &'a Symbol) -> FetchFuture<'a, Quote>;

    /// Fetches the intraday series for `symbol`.
    fn chart<'a>(&'a self, symbol: &'a Symbol) -> FetchFuture<'a, ChartSeries>;
}
