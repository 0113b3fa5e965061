//! Descriptive statistics over the numeric columns of a series.
//!
//! Matches the usual "describe" table: count, mean, sample standard
//! deviation, min, quartiles with linear interpolation, max. An empty column
//! has count 0 and NaN everywhere else; a single value has a NaN deviation.

use indexmap::IndexMap;

use crate::models::{price_record::NumericColumn, price_series::PriceSeries};

/// Row labels of the statistics table, in order.
pub const STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub max: f64,
}

impl Summary {
    /// Values in [`STAT_LABELS`] order.
    pub fn values(&self) -> [f64; 8] {
        [
            self.count as f64,
            self.mean,
            self.std,
            self.min,
            self.p25,
            self.p50,
            self.p75,
            self.max,
        ]
    }
}

pub fn summarize(values: &[f64]) -> Summary {
    let count = values.len();
    if count == 0 {
        return Summary {
            count,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            p25: f64::NAN,
            p50: f64::NAN,
            p75: f64::NAN,
            max: f64::NAN,
        };
    }

    let n = count as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = if count > 1 {
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1.0)).sqrt()
    } else {
        f64::NAN
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    Summary {
        count,
        mean,
        std,
        min: sorted[0],
        p25: quantile(&sorted, 0.25),
        p50: quantile(&sorted, 0.50),
        p75: quantile(&sorted, 0.75),
        max: sorted[count - 1],
    }
}

/// Linear interpolation between closest ranks; `sorted` must be non-empty.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// Per-column summaries, in [`NumericColumn::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct Describe {
    pub columns: IndexMap<NumericColumn, Summary>,
}

impl Describe {
    pub fn get(&self, column: NumericColumn) -> Option<&Summary> {
        self.columns.get(&column)
    }

    /// The table transposed for display: one row per statistic, one cell per column.
    pub fn rows(&self) -> Vec<(&'static str, Vec<f64>)> {
        STAT_LABELS
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let cells = self.columns.values().map(|s| s.values()[i]).collect();
                (*label, cells)
            })
            .collect()
    }
}

pub fn describe(series: &PriceSeries) -> Describe {
    let columns = NumericColumn::ALL
        .into_iter()
        .map(|column| (column, summarize(&series.column(column))))
        .collect();
    Describe { columns }
}

/// Display formatting for a statistics cell.
pub fn format_stat(label: &str, value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if label == "count" {
        format!("{value:.0}")
    } else {
        format!("{value:.6}")
    }
}
