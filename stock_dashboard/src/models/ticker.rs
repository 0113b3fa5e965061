use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TickerError {
    #[error("Unknown ticker '{symbol}', expected one of: {}", Ticker::symbols().join(", "))]
    Unknown { symbol: String },
}

/// The closed set of symbols the dashboard offers in its selector.
///
/// Keeping the set closed is what makes "unknown ticker" unreachable through
/// the UI: anything else is rejected while parsing the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Ticker {
    #[default]
    Aapl,
    Googl,
    Msft,
    Tsla,
    Amzn,
}

impl Ticker {
    /// All selectable tickers, in selector order.
    pub const ALL: [Ticker; 5] = [
        Ticker::Aapl,
        Ticker::Googl,
        Ticker::Msft,
        Ticker::Tsla,
        Ticker::Amzn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Ticker::Aapl => "AAPL",
            Ticker::Googl => "GOOGL",
            Ticker::Msft => "MSFT",
            Ticker::Tsla => "TSLA",
            Ticker::Amzn => "AMZN",
        }
    }

    pub fn symbols() -> Vec<&'static str> {
        Self::ALL.iter().map(Ticker::as_str).collect()
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ticker {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|ticker| ticker.as_str() == wanted)
            .ok_or_else(|| TickerError::Unknown {
                symbol: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("aapl".parse::<Ticker>().unwrap(), Ticker::Aapl);
        assert_eq!(" GOOGL ".parse::<Ticker>().unwrap(), Ticker::Googl);
        assert_eq!("Amzn".parse::<Ticker>().unwrap(), Ticker::Amzn);
    }

    #[test]
    fn rejects_symbols_outside_the_selector() {
        let err = "NVDA".parse::<Ticker>().unwrap_err();
        assert!(err.to_string().contains("NVDA"));
        assert!(err.to_string().contains("AAPL, GOOGL, MSFT, TSLA, AMZN"));
    }

    #[test]
    fn selector_order_is_stable() {
        assert_eq!(Ticker::symbols(), vec!["AAPL", "GOOGL", "MSFT", "TSLA", "AMZN"]);
        assert_eq!(Ticker::default(), Ticker::Aapl);
    }

    #[test]
    fn serde_uses_the_symbol() {
        let json = serde_json::to_string(&Ticker::Tsla).unwrap();
        assert_eq!(json, "\"TSLA\"");
        let back: Ticker = serde_json::from_str("\"MSFT\"").unwrap();
        assert_eq!(back, Ticker::Msft);
    }
}
