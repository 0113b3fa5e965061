//! Memoizing front for a [`DataProvider`].
//!
//! The cache maps the exact `(ticker, start, end)` triple to the series that
//! was produced for it. Entries live as long as the loader; there is no
//! eviction. The loader takes `&mut self`, so a cache shared between callers
//! must sit behind a lock, which is how the HTTP front end uses it: one
//! render pass at a time.

use std::{collections::HashMap, sync::Arc};

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    models::{price_series::PriceSeries, request_params::LoadRequest},
    providers::{DataProvider, ProviderError},
};

pub struct DataLoader<P> {
    provider: P,
    cache: HashMap<LoadRequest, Arc<PriceSeries>>,
}

impl<P: DataProvider> DataLoader<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            cache: HashMap::new(),
        }
    }

    /// Returns the series for `symbol` over `[start, end]`.
    ///
    /// The first call for a triple fetches from the provider and normalizes
    /// the result (sorted, one record per date, clipped to the range). Later
    /// calls with the same triple return the cached `Arc` without touching the
    /// provider. Failed fetches are not cached.
    pub async fn load(
        &mut self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Arc<PriceSeries>, ProviderError> {
        let key = LoadRequest::new(symbol, start, end);
        if let Some(hit) = self.cache.get(&key) {
            debug!(symbol, %start, %end, rows = hit.len(), "loader cache hit");
            return Ok(Arc::clone(hit));
        }

        debug!(symbol, %start, %end, "loader cache miss");
        let fetched = self.provider.fetch_daily_bars(&key).await?;
        let series = Arc::new(PriceSeries::normalized(
            key.symbol.clone(),
            fetched.records,
            start,
            end,
        ));
        self.cache.insert(key, Arc::clone(&series));
        Ok(series)
    }

    /// Number of memoized triples.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_cached(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> bool {
        self.cache.contains_key(&LoadRequest::new(symbol, start, end))
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}
