use crate::{
    charts::{Figure, close_price_chart, volume_chart},
    errors::Result,
    io::csv_export::CsvExport,
    models::{price_record::PriceRecord, price_series::PriceSeries},
    stats::{Describe, describe},
};

/// Default number of rows in the raw-data preview.
pub const DEFAULT_TAIL_ROWS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRow {
    pub index: usize,
    pub record: PriceRecord,
}

/// Everything the main panel shows for one series.
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    pub raw_heading: String,
    pub preview: Vec<PreviewRow>,
    pub close_chart: Figure,
    pub volume_chart: Figure,
    pub download: CsvExport,
    pub stats_heading: String,
    pub statistics: Describe,
}

/// Builds the presentation for `series`. Pure; an empty series gives empty
/// tables and charts and an all-NaN statistics table.
pub fn present(series: &PriceSeries, ticker: &str, tail_rows: usize) -> Result<Presentation> {
    let preview = series
        .tail(tail_rows)
        .into_iter()
        .map(|row| PreviewRow {
            index: row.index,
            record: row.record.clone(),
        })
        .collect();

    Ok(Presentation {
        raw_heading: format!("Raw Data - {ticker}"),
        preview,
        close_chart: close_price_chart(series, ticker),
        volume_chart: volume_chart(series, ticker),
        download: CsvExport::from_series(series)?,
        stats_heading: format!("Statistics for {ticker}"),
        statistics: describe(series),
    })
}
