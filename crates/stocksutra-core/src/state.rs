//! The coordinator's single source of truth.
//!
//! Every mutation goes through one of the transition methods below; each keeps
//! the status/error/data invariants intact:
//!
//! | Status | `error` | `quote` | `chart` |
//! |--------|---------|---------|---------|
//! | `Idle` | absent | absent or from the last success | same as quote |
//! | `Loading` | absent | absent until the quote arrives | absent |
//! | `Success` | absent | present | present or absent |
//! | `Failed` | present | absent | absent |

use serde::Serialize;

use crate::{ChartSeries, Quote, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

impl RequestStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RequestState {
    symbol: String,
    quote: Option<Quote>,
    chart: Option<ChartSeries>,
    status: RequestStatus,
    error: Option<String>,
}

impl RequestState {
    /// Current (possibly draft) symbol, trimmed. Empty before the first input.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn quote(&self) -> Option<&Quote> {
        self.quote.as_ref()
    }

    pub fn chart(&self) -> Option<&ChartSeries> {
        self.chart.as_ref()
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    /// Whether results fetched for `symbol` still belong to this state.
    pub fn is_current(&self, symbol: &Symbol) -> bool {
        self.symbol == symbol.as_str()
    }

    /// Switches the selected symbol under an in-flight request. Data fetched
    /// for the previous symbol is dropped in the same step.
    pub(crate) fn retarget(&mut self, symbol: &str) -> bool {
        let symbol = symbol.trim();
        if self.symbol == symbol {
            return false;
        }
        self.symbol = symbol.to_owned();
        self.quote = None;
        self.chart = None;
        true
    }

    /// Blank input: fail locally without touching the network.
    pub(crate) fn reject(&mut self, symbol: &str, message: impl Into<String>) {
        self.symbol = symbol.trim().to_owned();
        self.status = RequestStatus::Failed;
        self.error = Some(message.into());
        self.quote = None;
        self.chart = None;
    }

    /// Starts a request. Previous data is cleared immediately so nothing from an
    /// older symbol stays on screen while loading.
    pub(crate) fn begin(&mut self, symbol: &Symbol) {
        self.symbol = symbol.as_str().to_owned();
        self.status = RequestStatus::Loading;
        self.error = None;
        self.quote = None;
        self.chart = None;
    }

    pub(crate) fn accept_quote(&mut self, quote: Quote) {
        self.quote = Some(quote);
    }

    pub(crate) fn fail(&mut self, message: impl Into<String>) {
        self.status = RequestStatus::Failed;
        self.error = Some(message.into());
        self.quote = None;
        self.chart = None;
    }

    pub(crate) fn succeed(&mut self, chart: Option<ChartSeries>) {
        self.status = RequestStatus::Success;
        self.error = None;
        self.chart = chart;
    }

    /// Ends a request whose results no longer match the selected symbol.
    pub(crate) fn abandon(&mut self) {
        self.status = RequestStatus::Idle;
        self.error = None;
        self.quote = None;
        self.chart = None;
    }
}
