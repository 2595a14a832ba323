//! Market session status.
//!
//! [`MarketCalendar::status_at`] is a pure function of an instant.
//! [`SessionTicker`] re-evaluates it on a fixed period and publishes changes;
//! it owns a background task and must be stopped (or dropped) when its
//! consumer goes away.

use std::fmt::{Display, Formatter};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use time::macros::{offset, time};
use time::{OffsetDateTime, Time, UtcOffset, Weekday};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Open,
    Closed,
}

impl SessionStatus {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Market Open",
            Self::Closed => "Market Closed",
        }
    }
}

impl Display for SessionStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Weekday trading window in the exchange's local offset.
///
/// Both ends are inclusive at minute granularity. Holidays are not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarketCalendar {
    offset: UtcOffset,
    opens_at: Time,
    closes_at: Time,
}

impl MarketCalendar {
    /// National Stock Exchange of India: 09:15–15:30 IST (UTC+05:30, no DST).
    pub const NSE: Self = Self {
        offset: offset!(+5:30),
        opens_at: time!(9:15),
        closes_at: time!(15:30),
    };

    pub const fn new(offset: UtcOffset, opens_at: Time, closes_at: Time) -> Self {
        Self {
            offset,
            opens_at,
            closes_at,
        }
    }

    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }

    pub fn status_at(&self, now: OffsetDateTime) -> SessionStatus {
        let local = now.to_offset(self.offset);
        if matches!(local.weekday(), Weekday::Saturday | Weekday::Sunday) {
            return SessionStatus::Closed;
        }

        let minute = minutes_since_midnight(local.time());
        if minutes_since_midnight(self.opens_at) <= minute
            && minute <= minutes_since_midnight(self.closes_at)
        {
            SessionStatus::Open
        } else {
            SessionStatus::Closed
        }
    }

    pub fn current_status(&self) -> SessionStatus {
        self.status_at(OffsetDateTime::now_utc())
    }
}

impl Default for MarketCalendar {
    fn default() -> Self {
        Self::NSE
    }
}

/// Session status of the default exchange at `now`.
pub fn current_status(now: OffsetDateTime) -> SessionStatus {
    MarketCalendar::NSE.status_at(now)
}

fn minutes_since_midnight(time: Time) -> u16 {
    u16::from(time.hour()) * 60 + u16::from(time.minute())
}

/// Handle to the periodic session re-evaluation task.
///
/// Dropping the handle aborts the task, so a torn-down view cannot leak a
/// recurring timer.
#[derive(Debug)]
pub struct SessionTicker {
    status: watch::Receiver<SessionStatus>,
    task: JoinHandle<()>,
}

impl SessionTicker {
    /// Starts ticking against the wall clock. Requires a tokio runtime.
    pub fn start(calendar: MarketCalendar, period: Duration) -> Self {
        Self::start_with_clock(calendar, period, OffsetDateTime::now_utc)
    }

    /// Starts ticking against `clock`, evaluated once immediately and then once
    /// per `period`.
    pub fn start_with_clock<C>(calendar: MarketCalendar, period: Duration, clock: C) -> Self
    where
        C: Fn() -> OffsetDateTime + Send + 'static,
    {
        let initial = calendar.status_at(clock());
        let (sender, status) = watch::channel(initial);
        let period = period.max(Duration::from_millis(1));
        info!(status = %initial, ?period, "session ticker started");

        let task = tokio::spawn(async move {
            let mut ticks = tokio::time::interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the initial status is already published.
            ticks.tick().await;

            loop {
                ticks.tick().await;
                if sender.is_closed() {
                    debug!("session ticker has no observers left");
                    break;
                }

                let next = calendar.status_at(clock());
                sender.send_if_modified(|current| {
                    if *current == next {
                        return false;
                    }
                    info!(from = %current, to = %next, "market session changed");
                    *current = next;
                    true
                });
            }
        });

        Self { status, task }
    }

    pub fn status(&self) -> SessionStatus {
        *self.status.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.status.clone()
    }

    /// Cancels the background task. Subscribers observe a closed channel.
    pub fn stop(&self) {
        if !self.task.is_finished() {
            debug!("session ticker stopped");
        }
        self.task.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for SessionTicker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn converts_utc_to_exchange_time() {
        // 03:45 UTC is 09:15 IST.
        assert_eq!(current_status(datetime!(2024-05-01 03:45 UTC)), SessionStatus::Open);
        assert_eq!(current_status(datetime!(2024-05-01 03:44 UTC)), SessionStatus::Closed);
    }

    #[test]
    fn last_minute_of_the_window_is_open_to_its_end() {
        assert_eq!(
            current_status(datetime!(2024-05-01 15:30:59 +5:30)),
            SessionStatus::Open
        );
        assert_eq!(current_status(datetime!(2024-05-01 15:31 +5:30)), SessionStatus::Closed);
    }

    #[test]
    fn weekday_is_taken_from_local_date() {
        // Friday 23:00 UTC is already Saturday in India.
        assert_eq!(current_status(datetime!(2024-05-03 23:00 UTC)), SessionStatus::Closed);
        // Sunday 22:00 UTC is Monday 03:30 IST: a weekday, but before the open.
        assert_eq!(current_status(datetime!(2024-05-05 22:00 UTC)), SessionStatus::Closed);
    }

    #[test]
    fn custom_calendar_uses_its_own_window() {
        let nyse = MarketCalendar::new(offset!(-4), time!(9:30), time!(16:00));
        assert_eq!(nyse.status_at(datetime!(2024-05-01 13:30 UTC)), SessionStatus::Open);
        assert_eq!(nyse.status_at(datetime!(2024-05-01 20:01 UTC)), SessionStatus::Closed);
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(SessionStatus::Open.to_string(), "Market Open");
        assert_eq!(SessionStatus::Closed.to_string(), "Market Closed");
        assert!(SessionStatus::Open.is_open());
    }
}
