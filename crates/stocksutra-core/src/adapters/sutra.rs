use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::data_source::{FetchFuture, MarketDataSource};
use crate::http_client::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::retry::RetryingHttpClient;
use crate::{ChartPoint, ChartSeries, FetchError, Quote, SutraConfig, Symbol};

/// Client for the StockSutra quote service.
///
/// Holds no per-request state: every call is a single `GET` whose body is
/// mapped onto the domain types without further checks.
#[derive(Clone)]
pub struct SutraApi {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl SutraApi {
    /// Builds the production client: reqwest transport, wrapped for retries
    /// when the configuration asks for them.
    pub fn from_config(config: &SutraConfig) -> Self {
        let transport = RetryingHttpClient::wrap(
            Arc::new(ReqwestHttpClient::new()),
            config.retry.clone(),
        );
        Self::with_http_client(transport, config)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: &SutraConfig) -> Self {
        Self {
            http_client,
            base_url: config.base_url.clone(),
            timeout_ms: config.timeout_ms,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn quote_url(&self, symbol: &Symbol) -> String {
        format!("{}/stock/{}", self.base_url, symbol.path_segment())
    }

    pub fn chart_url(&self, symbol: &Symbol) -> String {
        format!("{}/stock/{}/chart", self.base_url, symbol.path_segment())
    }

    pub async fn fetch_quote(&self, symbol: &Symbol) -> Result<Quote, FetchError> {
        let response = self.get(self.quote_url(symbol)).await?;
        decode::<Quote>(response)
    }

    pub async fn fetch_chart(&self, symbol: &Symbol) -> Result<ChartSeries, FetchError> {
        let response = self.get(self.chart_url(symbol)).await?;
        let body = decode::<ChartBody>(response)?;
        Ok(ChartSeries::new(symbol.clone(), body.data))
    }

    async fn get(&self, url: String) -> Result<HttpResponse, FetchError> {
        let request = HttpRequest::get(url)
            .with_header("accept", "application/json")
            .with_timeout_ms(self.timeout_ms);

        self.http_client.execute(request).await.map_err(|error| {
            debug!(error = %error, "transport failure");
            FetchError::network(error.message())
        })
    }
}

impl MarketDataSource for SutraApi {
    fn quote<'a>(&'a self, symbol: &'a Symbol) -> FetchFuture<'a, Quote> {
        Box::pin(self.fetch_quote(symbol))
    }

    fn chart<'a>(&'a self, symbol: &'a Symbol) -> FetchFuture<'a, ChartSeries> {
        Box::pin(self.fetch_chart(symbol))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    data: Vec<ChartPoint>,
}

/// Structured error bodies win over the status code; anything else that is not
/// a decodable 2xx body counts as a transport failure.
fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, FetchError> {
    if let Ok(ErrorBody {
        error: Some(message),
    }) = serde_json::from_str::<ErrorBody>(&response.body)
    {
        return Err(if response.status == 404 {
            FetchError::NotFound { message }
        } else {
            FetchError::Provider {
                status: response.status,
                message,
            }
        });
    }

    if !response.is_success() {
        return Err(FetchError::network(format!(
            "provider returned status {}",
            response.status
        )));
    }

    serde_json::from_str(&response.body)
        .map_err(|e| FetchError::network(format!("malformed provider response: {e}")))
}
