use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::Deserialize;
use tracing::warn;

use crate::models::{price_record::PriceRecord, price_series::PriceSeries};

#[derive(Deserialize, Debug)]
pub struct ChartEnvelope {
    pub chart: Chart,
}

#[derive(Deserialize, Debug)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Deserialize, Debug)]
pub struct ChartError {
    pub code: String,
    pub description: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct ChartResult {
    pub meta: ChartMeta,
    /// Bar open times, unix seconds. Absent when the range has no bars.
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: String,
    #[serde(default)]
    pub exchange_timezone_name: Option<String>,
    #[serde(default)]
    pub gmtoffset: i64,
}

#[derive(Deserialize, Debug)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

/// Column-oriented price arrays, parallel to `ChartResult::timestamp`.
/// Cells are `null` on days the exchange reported nothing.
#[derive(Deserialize, Debug, Default)]
pub struct Quote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

impl ChartEnvelope {
    /// Converts the payload into a series for `symbol`.
    ///
    /// An error payload (unknown symbol, no data in range) becomes an empty
    /// series.
    pub fn into_series(self, symbol: &str) -> PriceSeries {
        if let Some(error) = self.chart.error {
            warn!(
                symbol,
                code = %error.code,
                description = error.description.as_deref().unwrap_or(""),
                "chart endpoint returned no data; using an empty series"
            );
            return PriceSeries::empty(symbol);
        }

        let records = self
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .map(ChartResult::into_records)
            .unwrap_or_default();

        PriceSeries::new(symbol, records)
    }
}

impl ChartResult {
    /// Zips the parallel arrays into records, dropping rows with a missing
    /// price or volume.
    pub fn into_records(self) -> Vec<PriceRecord> {
        let tz = self
            .meta
            .exchange_timezone_name
            .as_deref()
            .and_then(|name| name.parse::<Tz>().ok());
        let offset = self.meta.gmtoffset;
        let quote = self.indicators.quote.into_iter().next().unwrap_or_default();

        self.timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, ts)| {
                let date = trading_date(*ts, tz, offset)?;
                Some(PriceRecord {
                    date,
                    open: cell(&quote.open, i)?,
                    high: cell(&quote.high, i)?,
                    low: cell(&quote.low, i)?,
                    close: cell(&quote.close, i)?,
                    volume: quote.volume.get(i).copied().flatten()?,
                })
            })
            .collect()
    }
}

fn cell(column: &[Option<f64>], i: usize) -> Option<f64> {
    column.get(i).copied().flatten()
}

/// Calendar date of a bar in the exchange's local time.
///
/// Falls back to the fixed `gmtoffset` when the zone name is unknown.
fn trading_date(timestamp: i64, tz: Option<Tz>, gmtoffset: i64) -> Option<NaiveDate> {
    match tz {
        Some(tz) => Some(DateTime::from_timestamp(timestamp, 0)?.with_timezone(&tz).date_naive()),
        None => Some(DateTime::from_timestamp(timestamp.checked_add(gmtoffset)?, 0)?.date_naive()),
    }
}
