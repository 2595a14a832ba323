//! # Domain Models
//!
//! Plain data carried between the provider client, the coordinator and the
//! presentation layer.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Symbol`] | Trimmed, non-empty ticker |
//! | [`Quote`] | Quote snapshot (price, open, high, low, change, volume) |
//! | [`ChangePercent`] | Percentage change, preformatted text or number |
//! | [`ChartPoint`] | One `(time, price)` sample |
//! | [`ChartSeries`] | Ordered intraday samples for a symbol |
//!
//! Numeric ranges are not validated here: the provider is authoritative and
//! its values are mapped one to one.

mod chart;
mod quote;
mod symbol;

pub use chart::{ChartPoint, ChartSeries};
pub use quote::{ChangePercent, Quote};
pub use symbol::Symbol;
