use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::Symbol;

/// Percentage change as delivered by the provider.
///
/// The reference provider sends a preformatted string such as `"0.3%"`; other
/// deployments send a bare signed number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChangePercent {
    Value(f64),
    Text(String),
}

impl Display for ChangePercent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value:+.2}%"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Point-in-time quote snapshot for one instrument.
///
/// Values are taken from the provider as-is; price fields the provider has no
/// value for arrive as `null` and stay `None`. A new fetch always produces a new
/// `Quote`; nothing mutates an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: Symbol,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub previous_close: Option<f64>,
    pub change: f64,
    pub change_percent: ChangePercent,
    #[serde(default)]
    pub volume: Option<u64>,
    pub latest_trading_day: String,
}

impl Quote {
    pub fn is_up(&self) -> bool {
        self.change >= 0.0
    }
}
