//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] trait, the single seam between the
//! dashboard and whatever service supplies daily OHLCV history. The production
//! implementation is [`yahoo::YahooProvider`]; tests substitute stubs.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`Box<dyn DataProvider>`) for runtime selection of providers.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use stock_dashboard::models::{price_series::PriceSeries, request_params::LoadRequest};
//! use stock_dashboard::providers::{DataProvider, ProviderError};
//!
//! struct MyProvider;
//!
//! #[async_trait]
//! impl DataProvider for MyProvider {
//!     async fn fetch_daily_bars(
//!         &self,
//!         request: &LoadRequest,
//!     ) -> Result<PriceSeries, ProviderError> {
//!         Ok(PriceSeries::empty(request.symbol.clone()))
//!     }
//! }
//! ```

pub mod yahoo;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::{price_series::PriceSeries, request_params::LoadRequest};

/// Trait for fetching daily bar history from a market data provider.
#[async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetches the daily bars for `request.symbol` between `request.start`
    /// and `request.end`, both inclusive.
    ///
    /// Implementations return the records as the vendor delivers them;
    /// ordering and range clipping are applied by the loader. An unknown
    /// symbol or a range without trading days is an empty series, not an
    /// error.
    async fn fetch_daily_bars(&self, request: &LoadRequest) -> Result<PriceSeries, ProviderError>;
}

#[async_trait]
impl DataProvider for Box<dyn DataProvider> {
    async fn fetch_daily_bars(&self, request: &LoadRequest) -> Result<PriceSeries, ProviderError> {
        (**self).fetch_daily_bars(request).await
    }
}

/// Errors that can occur during the creation of a provider instance
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The configured user agent is not a valid header value.
    #[snafu(display("Invalid user agent: {source}"))]
    InvalidUserAgent {
        source: reqwest::header::InvalidHeaderValue,
        backtrace: Backtrace,
    },

    /// The configured base URL is empty.
    #[snafu(display("Provider base URL must not be empty"))]
    EmptyBaseUrl { backtrace: Backtrace },
}

/// Errors that can occur within a `DataProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider answered with a non-success status and no usable payload.
    #[snafu(display("API error (HTTP {status}): {message}"))]
    Api {
        status: u16,
        message: String,
        backtrace: Backtrace,
    },

    /// A success response whose body could not be decoded.
    #[snafu(display("Failed to decode provider response: {source}"))]
    Decode {
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    /// The request parameters were invalid for this specific provider.
    #[snafu(display("Invalid parameters for provider: {message}"))]
    Validation {
        message: String,
        backtrace: Backtrace,
    },
}
