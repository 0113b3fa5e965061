//! Yahoo Finance v8 chart API.
//!
//! One GET per request, daily interval, no authentication. The endpoint
//! answers unknown symbols and empty ranges with a `chart.error` payload,
//! which is mapped to an empty series.

pub mod params;
pub mod provider;
pub mod response;

pub use provider::{DEFAULT_BASE_URL, YahooProvider};
