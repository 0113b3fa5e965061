//! A daily price history for a single ticker.
use chrono::NaiveDate;

use crate::models::price_record::{NumericColumn, PriceRecord};

/// Ordered daily records for one symbol.
///
/// Series built through [`PriceSeries::normalized`] are sorted strictly
/// ascending by date and only contain dates inside the requested range.
/// Gaps for weekends and holidays come from the data source.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    /// The symbol this data represents (e.g., "AAPL").
    pub symbol: String,
    /// The daily records.
    pub records: Vec<PriceRecord>,
}

/// A record together with its row position in the full series.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedRecord<'a> {
    pub index: usize,
    pub record: &'a PriceRecord,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, records: Vec<PriceRecord>) -> Self {
        Self {
            symbol: symbol.into(),
            records,
        }
    }

    pub fn empty(symbol: impl Into<String>) -> Self {
        Self::new(symbol, Vec::new())
    }

    /// Builds a series that upholds the ordering and range invariants.
    ///
    /// Records outside `[start, end]` are dropped, the rest are sorted by
    /// date, and when a date appears more than once the later record wins.
    /// An inverted range keeps nothing.
    pub fn normalized(
        symbol: impl Into<String>,
        records: Vec<PriceRecord>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Self {
        let mut rows: Vec<(usize, PriceRecord)> = records
            .into_iter()
            .filter(|record| record.date >= start && record.date <= end)
            .enumerate()
            .collect();

        rows.sort_by(|a, b| a.1.date.cmp(&b.1.date).then_with(|| a.0.cmp(&b.0)));

        let mut deduped: Vec<PriceRecord> = Vec::with_capacity(rows.len());
        for (_, record) in rows {
            if let Some(last) = deduped.last_mut() {
                if last.date == record.date {
                    *last = record;
                    continue;
                }
            }
            deduped.push(record);
        }

        Self::new(symbol, deduped)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The last `n` records (fewer if the series is shorter), with their row index.
    pub fn tail(&self, n: usize) -> Vec<IndexedRecord<'_>> {
        let skip = self.records.len().saturating_sub(n);
        self.records
            .iter()
            .enumerate()
            .skip(skip)
            .map(|(index, record)| IndexedRecord { index, record })
            .collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    pub fn column(&self, column: NumericColumn) -> Vec<f64> {
        self.records.iter().map(|r| column.value(r)).collect()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    pub(crate) fn record(date: NaiveDate, close: f64, volume: u64) -> PriceRecord {
        PriceRecord {
            date,
            open: close - 1.0,
            high: close + 2.0,
            low: close - 2.0,
            close,
            volume,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, d).unwrap()
    }

    #[test]
    fn normalized_sorts_clips_and_dedupes() {
        let raw = vec![
            record(day(5), 15.0, 500),
            record(day(3), 13.0, 300),
            record(day(12), 99.0, 1),
            record(day(3), 13.5, 350),
            record(day(1), 11.0, 100),
        ];

        let series = PriceSeries::normalized("AAPL", raw, day(2), day(10));

        assert_eq!(series.dates(), vec![day(3), day(5)]);
        // the later duplicate for the 3rd replaces the earlier one
        assert_eq!(series.records[0].close, 13.5);
        assert_eq!(series.records[0].volume, 350);
    }

    #[test]
    fn inverted_range_keeps_nothing() {
        let raw = vec![record(day(3), 13.0, 300)];
        let series = PriceSeries::normalized("AAPL", raw, day(10), day(1));
        assert!(series.is_empty());
        assert_eq!(series.symbol, "AAPL");
    }

    #[test]
    fn tail_keeps_row_indices() {
        let raw = (1..=8).map(|d| record(day(d), d as f64, d as u64)).collect();
        let series = PriceSeries::new("MSFT", raw);

        let tail = series.tail(5);
        assert_eq!(tail.len(), 5);
        assert_eq!(tail[0].index, 3);
        assert_eq!(tail[4].index, 7);
        assert_eq!(tail[4].record.date, day(8));

        assert_eq!(series.tail(50).len(), 8);
        assert!(PriceSeries::empty("MSFT").tail(5).is_empty());
    }

    #[test]
    fn column_extracts_values_in_order() {
        let series = PriceSeries::new(
            "TSLA",
            vec![record(day(2), 10.0, 7), record(day(3), 20.0, 9)],
        );
        assert_eq!(series.column(NumericColumn::Close), vec![10.0, 20.0]);
        assert_eq!(series.column(NumericColumn::Volume), vec![7.0, 9.0]);
        assert_eq!(series.column(NumericColumn::High), vec![12.0, 22.0]);
    }

    proptest! {
        #[test]
        fn normalized_is_sorted_and_in_range(
            offsets in proptest::collection::vec(0i64..60, 0..40),
            lo in 0i64..30,
            span in -5i64..40,
        ) {
            let base = day(1);
            let raw: Vec<PriceRecord> = offsets
                .iter()
                .map(|o| record(base + chrono::Duration::days(*o), *o as f64, *o as u64))
                .collect();
            let start = base + chrono::Duration::days(lo);
            let end = start + chrono::Duration::days(span);

            let series = PriceSeries::normalized("AAPL", raw, start, end);

            for pair in series.records.windows(2) {
                prop_assert!(pair[0].date < pair[1].date);
            }
            for r in &series.records {
                prop_assert!(r.date >= start && r.date <= end);
            }
        }
    }
}
