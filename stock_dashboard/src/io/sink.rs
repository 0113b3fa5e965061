use std::path::{Path, PathBuf};

use async_trait::async_trait;
use snafu::{Backtrace, ResultExt, Snafu};
use tracing::info;

use crate::{io::csv_export::to_csv, models::price_series::PriceSeries};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SinkError {
    /// Converting the series into the destination format failed.
    #[snafu(display("Data conversion error: {message}"))]
    Conversion {
        message: String,
        backtrace: Backtrace,
    },

    /// Writing to the destination failed.
    #[snafu(display("Failed to write {}: {source}", path.display()))]
    Io {
        path: PathBuf,
        source: std::io::Error,
        backtrace: Backtrace,
    },
}

#[async_trait]
pub trait DataSink {
    /// The type of output returned after a successful write operation.
    ///
    /// A file sink returns the path it wrote; other sinks may return a
    /// row count or nothing at all.
    type Output;

    /// Writes one series to the destination.
    async fn write(&self, series: &PriceSeries) -> Result<Self::Output, SinkError>;
}

/// Writes the CSV export of a series to a fixed path.
pub struct CsvFileSink {
    path: PathBuf,
}

impl CsvFileSink {
    /// Sink writing to `path`. A directory path gets `stock_data.csv` appended.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let path = if path.is_dir() {
            path.join(crate::io::csv_export::CSV_FILE_NAME)
        } else {
            path.to_path_buf()
        };
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataSink for CsvFileSink {
    type Output = PathBuf;

    async fn write(&self, series: &PriceSeries) -> Result<PathBuf, SinkError> {
        let body = to_csv(series).map_err(|err| {
            ConversionSnafu {
                message: err.to_string(),
            }
            .build()
        })?;
        tokio::fs::write(&self.path, &body)
            .await
            .context(IoSnafu { path: &self.path })?;
        info!(path = %self.path.display(), rows = series.len(), "csv export written");
        Ok(self.path.clone())
    }
}
