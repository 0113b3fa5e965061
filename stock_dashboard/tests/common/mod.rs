#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Weekday};
use stock_dashboard::{
    models::{price_record::PriceRecord, price_series::PriceSeries, request_params::LoadRequest},
    providers::{ApiSnafu, DataProvider, ProviderError},
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Deterministic provider: one bar per weekday in the requested range.
///
/// Clones share their call counter and request log, so a test can keep a
/// handle after moving the provider into a dashboard.
#[derive(Clone, Default)]
pub struct StubProvider {
    calls: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<LoadRequest>>>,
    failing: bool,
}

impl StubProvider {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<LoadRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataProvider for StubProvider {
    async fn fetch_daily_bars(&self, request: &LoadRequest) -> Result<PriceSeries, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        if self.failing {
            return ApiSnafu {
                status: 503u16,
                message: "service unavailable",
            }
            .fail();
        }

        let records = request
            .start
            .iter_days()
            .take_while(|day| *day <= request.end)
            .filter(|day| !matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
            .enumerate()
            .map(|(i, day)| {
                let close = 100.0 + i as f64;
                PriceRecord {
                    date: day,
                    open: close - 0.5,
                    high: close + 1.0,
                    low: close - 1.0,
                    close,
                    volume: 1_000_000 + i as u64 * 1_000,
                }
            })
            .collect();
        Ok(PriceSeries::new(request.symbol.clone(), records))
    }
}
