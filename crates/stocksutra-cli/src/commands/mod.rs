mod quote;
mod session;
mod watch;

use std::process::ExitCode;
use std::sync::Arc;

use stocksutra_core::{
    resolve_preset, FetchCoordinator, RetryConfig, SutraApi, SutraConfig, PRESET_SYMBOLS,
};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::render;

pub async fn run(cli: &Cli) -> Result<ExitCode, CliError> {
    let config = resolve_config(cli)?;

    match &cli.command {
        Command::Quote(args) => {
            quote::run(&coordinator(&config), &args.symbol, false, cli.format).await
        }
        Command::Pick(args) => {
            let symbol = resolve_preset(&args.preset).ok_or_else(|| unknown_preset(&args.preset))?;
            quote::run(&coordinator(&config), symbol, true, cli.format).await
        }
        Command::Presets => {
            println!("{}", render::presets(&PRESET_SYMBOLS, cli.format)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Session => session::run(cli.format),
        Command::Watch => watch::run(&config, cli.format).await,
    }
}

/// Environment first, then command-line overrides.
fn resolve_config(cli: &Cli) -> Result<SutraConfig, CliError> {
    let mut config = SutraConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str())?;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }
    if let Some(retries) = cli.retries {
        config = config.with_retry(RetryConfig::exponential(retries));
    }
    Ok(config)
}

fn coordinator(config: &SutraConfig) -> FetchCoordinator {
    FetchCoordinator::new(Arc::new(SutraApi::from_config(config)))
}

fn unknown_preset(choice: &str) -> CliError {
    CliError::UnknownPreset {
        choice: choice.to_owned(),
        available: PRESET_SYMBOLS.join(", "),
    }
}
