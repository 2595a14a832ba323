use serde::{Deserialize, Serialize};

use crate::Symbol;

/// One intraday price sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub time: String,
    pub price: f64,
}

/// Intraday series for a symbol, in the order the provider returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub symbol: Symbol,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn new(symbol: Symbol, points: Vec<ChartPoint>) -> Self {
        Self { symbol, points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn first(&self) -> Option<&ChartPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&ChartPoint> {
        self.points.last()
    }

    /// Lowest and highest price in the series, `None` when empty.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |range, point| match range {
            None => Some((point.price, point.price)),
            Some((low, high)) => Some((low.min(point.price), high.max(point.price))),
        })
    }
}
