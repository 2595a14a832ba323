use std::process::ExitCode;

use stocksutra_core::MarketCalendar;
use time::macros::format_description;
use time::OffsetDateTime;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::render;

pub fn run(format: OutputFormat) -> Result<ExitCode, CliError> {
    let calendar = MarketCalendar::NSE;
    let now = OffsetDateTime::now_utc();
    println!(
        "{}",
        render::session(calendar.status_at(now), &exchange_time(&calendar, now)?, format)?
    );
    Ok(ExitCode::SUCCESS)
}

/// `now` in the exchange's offset, e.g. `Mon 09:15`.
pub fn exchange_time(calendar: &MarketCalendar, now: OffsetDateTime) -> Result<String, CliError> {
    Ok(now
        .to_offset(calendar.offset())
        .format(format_description!("[weekday repr:short] [hour]:[minute]"))?)
}
