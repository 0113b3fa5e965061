use thiserror::Error;

use crate::providers::{ProviderError, ProviderInitError};

/// The unified error type for the `stock_dashboard` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from the data provider.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider could not be constructed from the configuration.
    #[error("Provider initialization error: {0}")]
    ProviderInit(#[from] ProviderInitError),

    /// Encoding or decoding the CSV export failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serializing a chart figure failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The HTML page template failed to render.
    #[cfg(feature = "server")]
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// A generic I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
