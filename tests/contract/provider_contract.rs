//! Contract between `SutraApi` and the quote service's wire format.

#[path = "../support/mod.rs"]
mod support;

use std::sync::Arc;

use stocksutra_core::{
    ChangePercent, FetchError, HttpError, HttpResponse, MarketDataSource, SutraApi, SutraConfig,
    NETWORK_FAILURE_MESSAGE,
};
use support::{symbol, RoutedHttpClient};

struct FailureCase {
    name: &'static str,
    reply: Result<HttpResponse, HttpError>,
    expected_message: &'static str,
    expected_code: &'static str,
}

fn failure_cases() -> Vec<FailureCase> {
    vec![
        FailureCase {
            name: "unknown symbol",
            reply: Ok(HttpResponse::new(404, r#"{"error":"Invalid symbol"}"#)),
            expected_message: "Invalid symbol",
            expected_code: "fetch.not_found",
        },
        FailureCase {
            name: "provider failure with message",
            reply: Ok(HttpResponse::new(500, r#"{"error":"upstream quota exhausted"}"#)),
            expected_message: "upstream quota exhausted",
            expected_code: "fetch.provider",
        },
        FailureCase {
            name: "error body with success status",
            reply: Ok(HttpResponse::ok_json(r#"{"error":"No data found"}"#)),
            expected_message: "No data found",
            expected_code: "fetch.provider",
        },
        FailureCase {
            name: "bare gateway error",
            reply: Ok(HttpResponse::new(502, "<html>Bad Gateway</html>")),
            expected_message: NETWORK_FAILURE_MESSAGE,
            expected_code: "fetch.network",
        },
        FailureCase {
            name: "truncated body",
            reply: Ok(HttpResponse::ok_json(r#"{"symbol":"TCS.NS","price":"#)),
            expected_message: NETWORK_FAILURE_MESSAGE,
            expected_code: "fetch.network",
        },
        FailureCase {
            name: "connection refused",
            reply: Err(HttpError::non_retryable("connection refused")),
            expected_message: NETWORK_FAILURE_MESSAGE,
            expected_code: "fetch.network",
        },
    ]
}

fn api_with(http: &Arc<RoutedHttpClient>) -> SutraApi {
    let config = SutraConfig::default()
        .with_base_url("http://localhost:5000/")
        .expect("valid base url");
    SutraApi::with_http_client(http.clone(), &config)
}

#[tokio::test]
async fn quote_failures_map_to_user_messages() {
    for case in failure_cases() {
        let http = RoutedHttpClient::new();
        http.route("/stock/TCS.NS", case.reply.clone());
        let api = api_with(&http);

        let error = api
            .quote(&symbol("TCS.NS"))
            .await
            .expect_err(case.name);

        assert_eq!(error.user_message(), case.expected_message, "case '{}'", case.name);
        assert_eq!(error.code(), case.expected_code, "case '{}'", case.name);
    }
}

#[tokio::test]
async fn chart_failures_use_the_same_mapping() {
    for case in failure_cases() {
        let http = RoutedHttpClient::new();
        http.route("/stock/TCS.NS/chart", case.reply.clone());
        let api = api_with(&http);

        let error = api
            .chart(&symbol("TCS.NS"))
            .await
            .expect_err(case.name);

        assert_eq!(error.code(), case.expected_code, "case '{}'", case.name);
    }
}

#[tokio::test]
async fn quote_accepts_numeric_change_percent_and_missing_volume() {
    let http = RoutedHttpClient::new();
    http.route(
        "/stock/RELIANCE.NS",
        Ok(HttpResponse::ok_json(
            r#"{"symbol":"RELIANCE.NS","price":2900.0,"open":2880.0,"high":2910.0,
                "low":2870.0,"previous_close":2950.0,"change":-50.0,
                "change_percent":-1.69,"latest_trading_day":"2024-05-02"}"#,
        )),
    );
    let api = api_with(&http);

    let quote = api
        .quote(&symbol("RELIANCE.NS"))
        .await
        .expect("quote decodes");

    assert_eq!(quote.change_percent, ChangePercent::Value(-1.69));
    assert_eq!(quote.change_percent.to_string(), "-1.69%");
    assert_eq!(quote.volume, None);
    assert!(!quote.is_up());
    assert_eq!(
        http.requested_urls(),
        vec!["http://localhost:5000/stock/RELIANCE.NS"]
    );
}

#[tokio::test]
async fn quote_keeps_null_price_fields_empty() {
    // Given: the provider has no open/high/low/volume for an index
    let http = RoutedHttpClient::new();
    http.route(
        "/stock/%5ENSEI",
        Ok(HttpResponse::ok_json(
            r#"{"symbol":"^NSEI","price":22500.0,"open":null,"high":null,"low":null,
                "previous_close":22450.0,"change":50.0,"change_percent":"0.22%",
                "volume":null,"latest_trading_day":"01/05/2024, 03:30:00 PM"}"#,
        )),
    );
    let api = api_with(&http);

    // When
    let quote = api.quote(&symbol("^NSEI")).await.expect("quote decodes");

    // Then: known fields map through, missing ones stay empty
    assert_eq!(quote.price, Some(22500.0));
    assert_eq!(quote.previous_close, Some(22450.0));
    assert_eq!(quote.open, None);
    assert_eq!(quote.high, None);
    assert_eq!(quote.low, None);
    assert_eq!(quote.volume, None);
}

#[tokio::test]
async fn chart_is_attributed_to_the_requested_symbol() {
    let http = RoutedHttpClient::new();
    http.route(
        "/stock/INFY.NS/chart",
        Ok(HttpResponse::ok_json(
            r#"{"data":[{"time":"10:00","price":1450.0},{"time":"09:15","price":1440.0}]}"#,
        )),
    );
    let api = api_with(&http);

    let series = api.chart(&symbol("INFY.NS")).await.expect("chart decodes");

    assert_eq!(series.symbol.as_str(), "INFY.NS");
    assert_eq!(series.first().map(|p| p.time.as_str()), Some("10:00"));
    assert_eq!(series.last().map(|p| p.time.as_str()), Some("09:15"));
    assert_eq!(series.price_range(), Some((1440.0, 1450.0)));
}

#[tokio::test]
async fn not_found_is_distinguishable_from_transport_failure() {
    let http = RoutedHttpClient::new();
    let api = api_with(&http);

    // Unrouted paths answer 404 with an error body.
    let error = api.quote(&symbol("ZZZ")).await.expect_err("unknown symbol");

    assert!(matches!(error, FetchError::NotFound { .. }));
}
