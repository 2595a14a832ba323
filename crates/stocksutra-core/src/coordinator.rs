//! Request lifecycle coordinator.
//!
//! A request runs `Loading → quote fetch → chart fetch → Success`, or stops at
//! `Failed` when the quote fetch fails. Chart failures only leave the chart
//! empty. At most one request is in flight: further requests are ignored until
//! it settles. Results are applied only while the symbol they were fetched for
//! is still the selected one.
//!
//! State lives in a [`watch`] channel. Each transition is one closure passed to
//! `send_if_modified`, so observers never see a half-applied transition and no
//! lock is held across an await.
//!
//! Request methods apply their first transition when called and return a
//! `'static` future for the fetches. Callers that spawn those futures keep the
//! order in which requests were issued.

use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::data_source::MarketDataSource;
use crate::state::RequestState;
use crate::Symbol;

/// How a call into the coordinator ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Another request was in flight; nothing was started.
    Ignored,
    /// Blank input, failed locally.
    Rejected,
    /// Quote fetched; chart fetched or left empty.
    Succeeded,
    /// Quote fetch failed.
    Failed,
    /// The selected symbol changed mid-flight and the results were discarded.
    Abandoned,
}

#[derive(Clone)]
pub struct FetchCoordinator {
    source: Arc<dyn MarketDataSource>,
    state: Arc<watch::Sender<RequestState>>,
}

impl FetchCoordinator {
    pub fn new(source: Arc<dyn MarketDataSource>) -> Self {
        let (state, _) = watch::channel(RequestState::default());
        Self {
            source,
            state: Arc::new(state),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RequestState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every applied transition.
    pub fn subscribe(&self) -> watch::Receiver<RequestState> {
        self.state.subscribe()
    }

    /// Fetches quote and chart for `input`. The request is issued (or ignored)
    /// by this call; the returned future performs the fetches.
    pub fn request_quote(
        &self,
        input: &str,
    ) -> impl Future<Output = RequestOutcome> + Send + 'static {
        self.dispatch(input, false)
    }

    /// Quick-pick: assigns the symbol and requests it as one action. While a
    /// request is in flight only the assignment happens: the older request's
    /// data is cleared with it and its remaining results become stale.
    pub fn select_symbol(
        &self,
        input: &str,
    ) -> impl Future<Output = RequestOutcome> + Send + 'static {
        self.dispatch(input, true)
    }

    /// Requests the currently selected symbol again.
    pub fn refresh(&self) -> impl Future<Output = RequestOutcome> + Send + 'static {
        let symbol = self.state.borrow().symbol().to_owned();
        self.request_quote(&symbol)
    }

    fn dispatch(
        &self,
        input: &str,
        assign_while_loading: bool,
    ) -> impl Future<Output = RequestOutcome> + Send + 'static {
        let mut started = None;
        let mut outcome = RequestOutcome::Ignored;

        self.state.send_if_modified(|state| {
            if state.is_loading() {
                debug!(input, in_flight = state.symbol(), "request ignored while loading");
                return assign_while_loading && state.retarget(input);
            }

            match Symbol::parse(input) {
                Ok(symbol) => {
                    state.begin(&symbol);
                    started = Some(symbol);
                }
                Err(error) => {
                    state.reject(input, error.to_string());
                    outcome = RequestOutcome::Rejected;
                }
            }
            true
        });

        let coordinator = self.clone();
        async move {
            match started {
                Some(symbol) => coordinator.run(symbol).await,
                None => outcome,
            }
        }
    }

    async fn run(&self, symbol: Symbol) -> RequestOutcome {
        info!(%symbol, "requesting quote");
        let quote = self.source.quote(&symbol).await;

        let mut outcome = RequestOutcome::Abandoned;
        self.state.send_if_modified(|state| {
            if !state.is_current(&symbol) {
                debug!(%symbol, selected = state.symbol(), "discarding stale quote");
                state.abandon();
                return true;
            }

            match quote {
                Ok(quote) => {
                    state.accept_quote(quote);
                    outcome = RequestOutcome::Succeeded;
                }
                Err(error) => {
                    info!(%symbol, code = error.code(), %error, "quote request failed");
                    state.fail(error.user_message());
                    outcome = RequestOutcome::Failed;
                }
            }
            true
        });
        if outcome != RequestOutcome::Succeeded {
            return outcome;
        }

        let chart = self.source.chart(&symbol).await;

        let mut outcome = RequestOutcome::Abandoned;
        self.state.send_if_modified(|state| {
            if !state.is_current(&symbol) {
                debug!(%symbol, selected = state.symbol(), "discarding stale chart");
                state.abandon();
                return true;
            }

            let chart = match chart {
                Ok(chart) => Some(chart),
                Err(error) => {
                    warn!(%symbol, code = error.code(), %error, "chart unavailable");
                    None
                }
            };
            info!(%symbol, points = chart.as_ref().map_or(0, |c| c.len()), "quote request settled");
            state.succeed(chart);
            outcome = RequestOutcome::Succeeded;
            true
        });
        outcome
    }
}
