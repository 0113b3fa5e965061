use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::models::ticker::{Ticker, TickerError};

/// Shown when the submitted start date is after the end date.
pub const DATE_ORDER_WARNING: &str = "Error: End date must fall after start date.";

/// `2023-01-01`, the preselected start date.
pub fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or(NaiveDate::MIN)
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error(transparent)]
    Ticker(#[from] TickerError),

    #[error("Invalid {field} date '{value}': {source}")]
    Date {
        field: &'static str,
        value: String,
        source: chrono::ParseError,
    },
}

/// The three values read from the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub ticker: Ticker,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Inputs {
    /// The values a fresh page starts with; `today` becomes the end date.
    pub fn defaults(today: NaiveDate) -> Self {
        Self {
            ticker: Ticker::default(),
            start: default_start(),
            end: today,
        }
    }

    /// The only validation the panel performs.
    ///
    /// Returns the warning to display when `start > end`. It does not block
    /// anything: the loader still runs with these exact values.
    pub fn validate(&self) -> Option<&'static str> {
        (self.start > self.end).then_some(DATE_ORDER_WARNING)
    }
}

/// A raw form submission. Missing or blank fields fall back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputQuery {
    pub ticker: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl InputQuery {
    pub fn resolve(&self, today: NaiveDate) -> Result<Inputs, InputError> {
        let defaults = Inputs::defaults(today);
        let ticker = match non_blank(&self.ticker) {
            Some(raw) => raw.parse()?,
            None => defaults.ticker,
        };
        Ok(Inputs {
            ticker,
            start: parse_date("start", &self.start)?.unwrap_or(defaults.start),
            end: parse_date("end", &self.end)?.unwrap_or(defaults.end),
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_date(field: &'static str, value: &Option<String>) -> Result<Option<NaiveDate>, InputError> {
    non_blank(value)
        .map(|raw| {
            raw.parse::<NaiveDate>().map_err(|source| InputError::Date {
                field,
                value: raw.to_string(),
                source,
            })
        })
        .transpose()
}
