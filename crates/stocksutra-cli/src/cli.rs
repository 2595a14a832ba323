//! CLI argument definitions for StockSutra.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `quote` | Fetch quote and intraday chart for a symbol |
//! | `pick` | Fetch one of the preset symbols by name or position |
//! | `presets` | List the preset symbols |
//! | `session` | Show whether the market is open |
//! | `watch` | Interactive dashboard reading symbols from stdin |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `text` | Output format (text, json) |
//! | `--base-url` | `$STOCKSUTRA_API_BASE` | Quote service root |
//! | `--timeout-ms` | `$STOCKSUTRA_TIMEOUT_MS` | Per-request timeout |
//! | `--retries` | `$STOCKSUTRA_MAX_RETRIES` | Transport retries, 0 disables |
//!
//! # Examples
//!
//! ```bash
//! stocksutra quote TCS.NS
//! stocksutra pick 2 --format json
//! RUST_LOG=stocksutra_core=debug stocksutra watch
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// StockSutra - NSE quote and intraday chart lookup
#[derive(Debug, Parser)]
#[command(
    name = "stocksutra",
    author,
    version,
    about = "NSE quote and intraday chart lookup",
    long_about = "StockSutra fetches a quote snapshot and an intraday price series for a \
stock symbol from the StockSutra quote service, and reports whether the NSE session is \
open.\n\nUse 'stocksutra <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Quote service root, overriding STOCKSUTRA_API_BASE.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout in milliseconds, overriding STOCKSUTRA_TIMEOUT_MS.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Transport retries on retryable failures, overriding STOCKSUTRA_MAX_RETRIES.
    #[arg(long, global = true)]
    pub retries: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable card.
    Text,
    /// Serialized request state.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch quote and intraday chart for a symbol.
    ///
    /// Exits with status 3 when the quote cannot be fetched.
    ///
    ///   stocksutra quote TCS.NS
    ///   stocksutra quote "^NSEI" --format json
    Quote(QuoteArgs),

    /// Fetch a preset symbol, by name or 1-based position.
    ///
    ///   stocksutra pick 1
    ///   stocksutra pick infy.ns
    Pick(PickArgs),

    /// List the preset symbols.
    Presets,

    /// Show the current market session status.
    Session,

    /// Interactive mode: one symbol per line on stdin.
    ///
    /// `:1`..`:4` or a preset name picks a preset, `:r` refreshes the current
    /// symbol, and end of input exits. Session changes are printed as they happen.
    Watch,
}

#[derive(Debug, Clone, Args)]
pub struct QuoteArgs {
    /// Ticker symbol such as TCS.NS. Surrounding whitespace is ignored.
    pub symbol: String,
}

#[derive(Debug, Clone, Args)]
pub struct PickArgs {
    /// Preset name or 1-based position.
    pub preset: String,
}
