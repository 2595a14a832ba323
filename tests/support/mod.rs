//! Shared fakes for integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use stocksutra_core::{
    ChangePercent, ChartPoint, ChartSeries, FetchError, FetchFuture, HttpClient, HttpError,
    HttpFuture, HttpRequest, HttpResponse, MarketDataSource, Quote, Symbol,
};
use tokio::sync::oneshot;

pub fn symbol(value: &str) -> Symbol {
    Symbol::parse(value).expect("valid symbol")
}

pub fn quote(value: &str, price: f64) -> Quote {
    Quote {
        symbol: symbol(value),
        price: Some(price),
        open: Some(price - 5.0),
        high: Some(price + 10.0),
        low: Some(price - 10.0),
        previous_close: Some(price - 2.0),
        change: 2.0,
        change_percent: ChangePercent::Text(String::from("0.1%")),
        volume: Some(1_000),
        latest_trading_day: String::from("2024-05-01"),
    }
}

pub fn chart(value: &str, prices: &[(&str, f64)]) -> ChartSeries {
    ChartSeries::new(
        symbol(value),
        prices
            .iter()
            .map(|(time, price)| ChartPoint {
                time: (*time).to_owned(),
                price: *price,
            })
            .collect(),
    )
}

/// Reply for one scripted call: immediate, or held until the test releases it.
pub enum Reply<T> {
    Ready(Result<T, FetchError>),
    Gated(oneshot::Receiver<Result<T, FetchError>>),
}

impl<T> Reply<T> {
    pub fn ok(value: T) -> Self {
        Self::Ready(Ok(value))
    }

    pub fn err(error: FetchError) -> Self {
        Self::Ready(Err(error))
    }

    pub fn gated() -> (oneshot::Sender<Result<T, FetchError>>, Self) {
        let (release, gate) = oneshot::channel();
        (release, Self::Gated(gate))
    }
}

/// Data source answering from per-endpoint scripts and recording every call.
#[derive(Default)]
pub struct ScriptedSource {
    quotes: Mutex<VecDeque<Reply<Quote>>>,
    charts: Mutex<VecDeque<Reply<ChartSeries>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_quote(&self, reply: Reply<Quote>) {
        self.quotes.lock().expect("script lock").push_back(reply);
    }

    pub fn push_chart(&self, reply: Reply<ChartSeries>) {
        self.charts.lock().expect("script lock").push_back(reply);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("call log lock").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("call log lock").push(call);
    }
}

async fn resolve<T>(reply: Option<Reply<T>>) -> Result<T, FetchError> {
    match reply {
        Some(Reply::Ready(result)) => result,
        Some(Reply::Gated(gate)) => gate
            .await
            .unwrap_or_else(|_| Err(FetchError::network("gate dropped"))),
        None => Err(FetchError::network("script exhausted")),
    }
}

impl MarketDataSource for ScriptedSource {
    fn quote<'a>(&'a self, symbol: &'a Symbol) -> FetchFuture<'a, Quote> {
        self.record(format!("quote:{symbol}"));
        let reply = self.quotes.lock().expect("script lock").pop_front();
        Box::pin(resolve(reply))
    }

    fn chart<'a>(&'a self, symbol: &'a Symbol) -> FetchFuture<'a, ChartSeries> {
        self.record(format!("chart:{symbol}"));
        let reply = self.charts.lock().expect("script lock").pop_front();
        Box::pin(resolve(reply))
    }
}

/// Transport answering by URL suffix and recording requested URLs.
#[derive(Default)]
pub struct RoutedHttpClient {
    routes: Mutex<Vec<(String, Result<HttpResponse, HttpError>)>>,
    requests: Mutex<Vec<String>>,
}

impl RoutedHttpClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn route(&self, path: &str, reply: Result<HttpResponse, HttpError>) {
        self.routes
            .lock()
            .expect("route lock")
            .push((path.to_owned(), reply));
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.lock().expect("request log lock").clone()
    }
}

impl HttpClient for RoutedHttpClient {
    fn execute<'a>(&'a self, request: HttpRequest) -> HttpFuture<'a> {
        self.requests
            .lock()
            .expect("request log lock")
            .push(request.url.clone());
        let reply = self
            .routes
            .lock()
            .expect("route lock")
            .iter()
            .find(|(path, _)| request.url.ends_with(path.as_str()))
            .map(|(_, reply)| reply.clone())
            .unwrap_or_else(|| Ok(HttpResponse::new(404, r#"{"error":"no such route"}"#)));
        Box::pin(async move { reply })
    }
}
