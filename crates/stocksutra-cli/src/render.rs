//! Text and JSON rendering of request and session state.

use serde::Serialize;
use stocksutra_core::{ChartSeries, Quote, RequestState, RequestStatus, SessionStatus};

use crate::cli::OutputFormat;
use crate::error::CliError;

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub fn request_state(state: &RequestState, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(state)?),
        OutputFormat::Text => Ok(request_card(state)),
    }
}

#[derive(Debug, Serialize)]
struct SessionView<'a> {
    status: SessionStatus,
    label: &'static str,
    exchange_time: &'a str,
}

pub fn session(
    status: SessionStatus,
    exchange_time: &str,
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(&SessionView {
            status,
            label: status.label(),
            exchange_time,
        })?),
        OutputFormat::Text => Ok(format!("{status} ({exchange_time} exchange time)")),
    }
}

pub fn presets(symbols: &[&str], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(symbols)?),
        OutputFormat::Text => Ok(symbols
            .iter()
            .enumerate()
            .map(|(index, symbol)| format!("{}. {symbol}", index + 1))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn request_card(state: &RequestState) -> String {
    match state.status() {
        RequestStatus::Idle if state.symbol().is_empty() => String::from("no symbol selected"),
        RequestStatus::Idle => format!("{} selected, not loaded", state.symbol()),
        RequestStatus::Loading => format!("{} loading...", state.symbol()),
        RequestStatus::Failed => format!("error: {}", state.error().unwrap_or("request failed")),
        RequestStatus::Success => {
            let mut lines = Vec::new();
            if let Some(quote) = state.quote() {
                lines.extend(quote_lines(quote));
            }
            lines.push(match state.chart() {
                Some(series) => chart_line(series),
                None => String::from("chart unavailable"),
            });
            lines.join("\n")
        }
    }
}

fn quote_lines(quote: &Quote) -> Vec<String> {
    let arrow = if quote.is_up() { '▲' } else { '▼' };
    let volume = quote
        .volume
        .map_or_else(|| String::from("n/a"), |volume| volume.to_string());

    vec![
        format!(
            "{}  {}  {arrow} {:+.2} ({})",
            quote.symbol,
            amount(quote.price),
            quote.change,
            quote.change_percent
        ),
        format!(
            "open {}  high {}  low {}  prev close {}",
            amount(quote.open),
            amount(quote.high),
            amount(quote.low),
            amount(quote.previous_close)
        ),
        format!("volume {volume}  as of {}", quote.latest_trading_day),
    ]
}

fn amount(value: Option<f64>) -> String {
    value.map_or_else(|| String::from("n/a"), |value| format!("{value:.2}"))
}

fn chart_line(series: &ChartSeries) -> String {
    let (Some((low, high)), Some(first), Some(last)) =
        (series.price_range(), series.first(), series.last())
    else {
        return String::from("chart: no intraday data");
    };

    format!(
        "chart {}  {}..{}  {low:.2}-{high:.2}  {} points",
        sparkline(series, low, high),
        first.time,
        last.time,
        series.len()
    )
}

fn sparkline(series: &ChartSeries, low: f64, high: f64) -> String {
    let span = high - low;
    let top = (SPARK_LEVELS.len() - 1) as f64;
    series
        .points
        .iter()
        .map(|point| {
            if span <= f64::EPSILON {
                return SPARK_LEVELS[0];
            }
            let level = ((point.price - low) / span * top).round() as usize;
            SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
        })
        .collect()
}
