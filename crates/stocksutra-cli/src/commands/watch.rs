//! Interactive dashboard over stdin.
//!
//! Each line is issued to the coordinator as it is read; the fetches then run
//! on spawned tasks so input, request state and session changes are handled as
//! they arrive. The coordinator drops requests issued while one is in flight;
//! quick-picks still switch the selected symbol.

use std::process::ExitCode;
use std::sync::Arc;

use stocksutra_core::{
    resolve_preset, FetchCoordinator, MarketCalendar, SessionTicker, SutraApi, SutraConfig,
    PRESET_SYMBOLS,
};
use time::OffsetDateTime;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use super::session::exchange_time;
use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::render;

#[derive(Debug, Clone, PartialEq, Eq)]
enum WatchInput {
    Refresh,
    Pick(&'static str),
    UnknownPreset(String),
    Symbol(String),
}

fn parse_input(line: &str) -> WatchInput {
    let line = line.trim();
    if line.eq_ignore_ascii_case(":r") {
        return WatchInput::Refresh;
    }
    if let Some(choice) = line.strip_prefix(':') {
        return resolve_preset(choice)
            .map_or_else(|| WatchInput::UnknownPreset(choice.to_owned()), WatchInput::Pick);
    }
    match PRESET_SYMBOLS
        .iter()
        .find(|symbol| symbol.eq_ignore_ascii_case(line))
    {
        Some(symbol) => WatchInput::Pick(*symbol),
        None => WatchInput::Symbol(line.to_owned()),
    }
}

pub async fn run(config: &SutraConfig, format: OutputFormat) -> Result<ExitCode, CliError> {
    let calendar = MarketCalendar::NSE;
    let coordinator = FetchCoordinator::new(Arc::new(SutraApi::from_config(config)));
    let ticker = SessionTicker::start(calendar, config.session_interval);

    let mut state_updates = coordinator.subscribe();
    let mut session_updates = ticker.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut requests = JoinSet::new();

    print_session(&calendar, ticker.status(), format)?;
    if format == OutputFormat::Text {
        println!("{}", render::presets(&PRESET_SYMBOLS, format)?);
        println!("enter a symbol, :1-:4 to pick a preset, :r to refresh");
    }

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("input closed");
                    break;
                };
                // Issued here, in input order; only the fetches run on the spawned task.
                match parse_input(&line) {
                    WatchInput::Refresh => {
                        requests.spawn(coordinator.refresh());
                    }
                    WatchInput::Pick(symbol) => {
                        requests.spawn(coordinator.select_symbol(symbol));
                    }
                    WatchInput::Symbol(symbol) => {
                        requests.spawn(coordinator.request_quote(&symbol));
                    }
                    WatchInput::UnknownPreset(choice) => {
                        eprintln!("unknown preset '{choice}', expected :1-:{}", PRESET_SYMBOLS.len());
                    }
                }
            }
            changed = state_updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = state_updates.borrow_and_update().clone();
                println!("{}", render::request_state(&state, format)?);
            }
            changed = session_updates.changed() => {
                if changed.is_err() {
                    warn!("session ticker ended unexpectedly");
                    break;
                }
                let status = *session_updates.borrow_and_update();
                print_session(&calendar, status, format)?;
            }
            Some(finished) = requests.join_next(), if !requests.is_empty() => {
                if let Ok(outcome) = finished {
                    debug!(?outcome, "request finished");
                }
            }
        }
    }

    ticker.stop();

    // Let requests typed before end of input settle so piped input gets answers.
    while requests.join_next().await.is_some() {}
    if state_updates.has_changed().unwrap_or(false) {
        let state = state_updates.borrow_and_update().clone();
        println!("{}", render::request_state(&state, format)?);
    }

    Ok(ExitCode::SUCCESS)
}

fn print_session(
    calendar: &MarketCalendar,
    status: stocksutra_core::SessionStatus,
    format: OutputFormat,
) -> Result<(), CliError> {
    let now = exchange_time(calendar, OffsetDateTime::now_utc())?;
    println!("{}", render::session(status, &now, format)?);
    Ok(())
}
