//! Canonical in-memory representation of one trading day (OHLCV).
//!
//! This struct is the standard output of every [`DataProvider`](crate::providers::DataProvider)
//! and the row type of [`PriceSeries`](crate::models::price_series::PriceSeries).
use chrono::NaiveDate;

/// A single daily bar for one ticker.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    /// The trading day, in the exchange's calendar.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Highest price during the day.
    pub high: f64,
    /// Lowest price during the day.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Number of shares traded.
    pub volume: u64,
}

/// The numeric columns of a [`PriceRecord`], in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericColumn {
    Open,
    High,
    Low,
    Close,
    Volume,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 5] = [
        NumericColumn::Open,
        NumericColumn::High,
        NumericColumn::Low,
        NumericColumn::Close,
        NumericColumn::Volume,
    ];

    /// Column header as shown in tables and the CSV export.
    pub fn label(&self) -> &'static str {
        match self {
            NumericColumn::Open => "Open",
            NumericColumn::High => "High",
            NumericColumn::Low => "Low",
            NumericColumn::Close => "Close",
            NumericColumn::Volume => "Volume",
        }
    }

    pub fn value(&self, record: &PriceRecord) -> f64 {
        match self {
            NumericColumn::Open => record.open,
            NumericColumn::High => record.high,
            NumericColumn::Low => record.low,
            NumericColumn::Close => record.close,
            NumericColumn::Volume => record.volume as f64,
        }
    }
}
