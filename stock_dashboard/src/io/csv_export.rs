//! CSV snapshot of a loaded series.
//!
//! Layout: an unnamed leading row-index column, then `Date` and the numeric
//! columns. One row per record, index counting from 0.

use chrono::NaiveDate;
use csv::{ReaderBuilder, WriterBuilder};

use crate::{
    errors::Result,
    models::{price_record::PriceRecord, price_series::PriceSeries},
};

pub const CSV_FILE_NAME: &str = "stock_data.csv";
pub const CSV_MIME: &str = "text/csv";

const HEADER: [&str; 7] = ["", "Date", "Open", "High", "Low", "Close", "Volume"];

/// One exported row, positional: index, date, open, high, low, close, volume.
type CsvRow = (usize, NaiveDate, f64, f64, f64, f64, u64);

/// A downloadable artifact: bytes plus the name and type to offer them under.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvExport {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub body: Vec<u8>,
}

impl CsvExport {
    pub fn from_series(series: &PriceSeries) -> Result<Self> {
        Ok(Self {
            file_name: CSV_FILE_NAME,
            mime: CSV_MIME,
            body: to_csv(series)?,
        })
    }
}

pub fn to_csv(series: &PriceSeries) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for (index, r) in series.records.iter().enumerate() {
        let row: CsvRow = (index, r.date, r.open, r.high, r.low, r.close, r.volume);
        writer.serialize(row)?;
    }
    let body = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(body)
}

/// Parses an export back into `(index, record)` pairs.
pub fn from_csv(body: &[u8]) -> Result<Vec<(usize, PriceRecord)>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(body);
    let mut rows = Vec::new();
    for result in reader.deserialize::<CsvRow>() {
        let (index, date, open, high, low, close, volume) = result?;
        rows.push((
            index,
            PriceRecord {
                date,
                open,
                high,
                low,
                close,
                volume,
            },
        ));
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::price_series::tests::record;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, d).unwrap()
    }

    #[test]
    fn header_has_unnamed_index_column() {
        let body = to_csv(&PriceSeries::empty("AAPL")).unwrap();
        assert_eq!(String::from_utf8(body).unwrap(), ",Date,Open,High,Low,Close,Volume\n");
    }

    #[test]
    fn rows_carry_index_and_iso_dates() {
        let series = PriceSeries::new("AAPL", vec![record(day(3), 125.5, 1_000), record(day(4), 126.25, 2_000)]);
        let text = String::from_utf8(to_csv(&series).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("0,2023-01-03,"));
        assert!(lines[2].starts_with("1,2023-01-04,"));
        assert!(lines[2].ends_with(",2000"));
    }

    #[test]
    fn parse_reproduces_close_and_volume() {
        let series = PriceSeries::new(
            "GOOGL",
            vec![record(day(3), 89.12, 28_131_200), record(day(4), 88.08, 34_854_800), record(day(5), 86.2, 27_194_400)],
        );
        let export = CsvExport::from_series(&series).unwrap();
        assert_eq!(export.file_name, "stock_data.csv");
        assert_eq!(export.mime, "text/csv");

        let parsed = from_csv(&export.body).unwrap();
        assert_eq!(parsed.len(), series.len());
        for (i, (index, parsed)) in parsed.iter().enumerate() {
            assert_eq!(*index, i);
            assert_eq!(parsed, &series.records[i]);
        }
    }
}
