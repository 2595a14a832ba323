use std::process::ExitCode;

use stocksutra_core::{FetchCoordinator, RequestStatus};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::render;

/// Runs one request to completion and prints the settled state.
pub async fn run(
    coordinator: &FetchCoordinator,
    input: &str,
    quick_pick: bool,
    format: OutputFormat,
) -> Result<ExitCode, CliError> {
    let outcome = if quick_pick {
        coordinator.select_symbol(input).await
    } else {
        coordinator.request_quote(input).await
    };
    debug!(?outcome, "request finished");

    let state = coordinator.state();
    println!("{}", render::request_state(&state, format)?);

    Ok(match state.status() {
        RequestStatus::Failed => ExitCode::from(3),
        _ => ExitCode::SUCCESS,
    })
}
