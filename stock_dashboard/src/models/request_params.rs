use chrono::{DateTime, Days, NaiveDate, Utc};

/// Parameters for one historical daily-bars request.
///
/// This is also the memoization key of the
/// [`DataLoader`](crate::loader::DataLoader): two requests are the same
/// request exactly when ticker, start and end are all equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LoadRequest {
    /// Symbol to request (e.g., `"AAPL"`).
    pub symbol: String,
    /// First calendar day of the range (inclusive).
    pub start: NaiveDate,
    /// Last calendar day of the range (inclusive).
    ///
    /// Nothing enforces `start <= end` here; an inverted range is passed to
    /// the provider as-is.
    pub end: NaiveDate,
}

impl LoadRequest {
    pub fn new(symbol: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            symbol: symbol.into(),
            start,
            end,
        }
    }

    /// The request range as a half-open UTC interval `[start 00:00, end+1 00:00)`.
    pub fn utc_bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = self.start.and_time(chrono::NaiveTime::MIN).and_utc();
        let after_end = self
            .end
            .checked_add_days(Days::new(1))
            .unwrap_or(self.end)
            .and_time(chrono::NaiveTime::MIN)
            .and_utc();
        (start, after_end)
    }
}
