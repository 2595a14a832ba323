//! # StockSutra Core
//!
//! Client-side core of the StockSutra market tracker: look up one symbol, show
//! its quote and intraday trend, and keep a live "market open/closed" label.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`coordinator`] | Single-flight request state machine ([`FetchCoordinator`]) |
//! | [`state`] | [`RequestState`] published to renderers |
//! | [`data_source`] | [`MarketDataSource`] contract (quote, chart) |
//! | [`adapters`] | [`SutraApi`] HTTP client for the StockSutra service |
//! | [`http_client`] | Transport seam and reqwest implementation |
//! | [`retry`] | Opt-in retrying transport wrapper |
//! | [`session`] | Market session calendar and ticker |
//! | [`config`] | Environment-driven configuration |
//! | [`domain`] | Symbol, Quote, ChartSeries |
//! | [`presets`] | Quick-pick symbols |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use stocksutra_core::{FetchCoordinator, SutraApi, SutraConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SutraConfig::from_env()?;
//!     let coordinator = FetchCoordinator::new(Arc::new(SutraApi::from_config(&config)));
//!
//!     coordinator.request_quote("TCS.NS").await;
//!
//!     let state = coordinator.state();
//!     if let Some(price) = state.quote().and_then(|quote| quote.price) {
//!         println!("TCS.NS: {price:.2}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────┐
//! │  Renderer / CLI │◀────│  SessionTicker   │
//! └────────┬────────┘     └──────────────────┘
//!          │ request_quote / select_symbol
//!          ▼
//! ┌─────────────────┐
//! │FetchCoordinator │──▶ watch<RequestState>
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ MarketDataSource│────▶│ HttpClient       │
//! │ (SutraApi)      │     │ (reqwest, retry) │
//! └─────────────────┘     └──────────────────┘
//! ```

pub mod adapters;
pub mod config;
pub mod coordinator;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod presets;
pub mod retry;
pub mod session;
pub mod state;

pub use adapters::SutraApi;
pub use config::SutraConfig;
pub use coordinator::{FetchCoordinator, RequestOutcome};
pub use data_source::{FetchFuture, MarketDataSource};
pub use domain::{ChangePercent, ChartPoint, ChartSeries, Quote, Symbol};
pub use error::{
    ConfigError, FetchError, ValidationError, EMPTY_SYMBOL_MESSAGE, NETWORK_FAILURE_MESSAGE,
};
pub use http_client::{
    HttpClient, HttpError, HttpFuture, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use presets::{resolve_preset, PRESET_SYMBOLS};
pub use retry::{Backoff, RetryConfig, RetryingHttpClient};
pub use session::{current_status, MarketCalendar, SessionStatus, SessionTicker};
pub use state::{RequestState, RequestStatus};
