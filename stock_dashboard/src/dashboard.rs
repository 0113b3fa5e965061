//! One render pass: inputs → load → presentation.
//!
//! [`Dashboard::render`] is re-run from scratch on every interaction. The
//! loader's memoization cache is the only state carried from one pass to the
//! next.

use std::sync::Arc;

use tracing::{info, warn};

use crate::{
    errors::Result,
    loader::DataLoader,
    models::price_series::PriceSeries,
    panels::{
        input::Inputs,
        presentation::{DEFAULT_TAIL_ROWS, Presentation, present},
    },
    providers::DataProvider,
};

pub const PAGE_TITLE: &str = "📈 Stock Market Analysis Dashboard";

/// Output of one render pass.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub title: &'static str,
    pub inputs: Inputs,
    /// Date-order warning for the sidebar, if any.
    pub warning: Option<&'static str>,
    pub series: Arc<PriceSeries>,
    pub presentation: Presentation,
}

pub struct Dashboard<P> {
    loader: DataLoader<P>,
    tail_rows: usize,
}

impl<P: DataProvider> Dashboard<P> {
    pub fn new(provider: P) -> Self {
        Self::with_tail_rows(provider, DEFAULT_TAIL_ROWS)
    }

    pub fn with_tail_rows(provider: P, tail_rows: usize) -> Self {
        Self {
            loader: DataLoader::new(provider),
            tail_rows,
        }
    }

    /// Runs a full pass for `inputs`.
    ///
    /// An inverted date range produces the warning but the loader is still
    /// called with exactly the submitted dates. A failed load is logged and
    /// rendered as an empty series.
    pub async fn render(&mut self, inputs: &Inputs) -> Result<RenderOutput> {
        let symbol = inputs.ticker.as_str();
        let warning = inputs.validate();
        if let Some(message) = warning {
            warn!(symbol, start = %inputs.start, end = %inputs.end, warning = message, "invalid date range");
        }

        let series = match self.loader.load(symbol, inputs.start, inputs.end).await {
            Ok(series) => series,
            Err(err) => {
                warn!(symbol, error = %err, "load failed; rendering an empty series");
                Arc::new(PriceSeries::empty(symbol))
            }
        };
        info!(symbol, rows = series.len(), "render pass");

        let presentation = present(&series, symbol, self.tail_rows)?;
        Ok(RenderOutput {
            title: PAGE_TITLE,
            inputs: inputs.clone(),
            warning,
            series,
            presentation,
        })
    }

    pub fn loader(&self) -> &DataLoader<P> {
        &self.loader
    }

    pub fn tail_rows(&self) -> usize {
        self.tail_rows
    }
}
