//! Chart figures for the presentation panel.
//!
//! Figures are plain data in Plotly's JSON figure format (`data` traces plus a
//! `layout`); the page hands them to plotly.js, so nothing here draws.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{price_record::NumericColumn, price_series::PriceSeries};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Scatter,
    Bar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<&'static str>,
    pub name: String,
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    fn single(kind: TraceKind, series: &PriceSeries, column: NumericColumn, title: String) -> Self {
        let mode = match kind {
            TraceKind::Scatter => Some("lines"),
            TraceKind::Bar => None,
        };
        let trace = Trace {
            kind,
            mode,
            name: column.label().to_string(),
            x: series.dates(),
            y: series.column(column),
        };
        Figure {
            data: vec![trace],
            layout: Layout {
                title: Title { text: title },
                xaxis: Axis {
                    title: Title {
                        text: "Date".to_string(),
                    },
                },
                yaxis: Axis {
                    title: Title {
                        text: column.label().to_string(),
                    },
                },
            },
        }
    }

    pub fn title(&self) -> &str {
        &self.layout.title.text
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Line chart of close vs. date.
pub fn close_price_chart(series: &PriceSeries, ticker: &str) -> Figure {
    Figure::single(
        TraceKind::Scatter,
        series,
        NumericColumn::Close,
        format!("{ticker} Closing Price Over Time"),
    )
}

/// Bar chart of volume vs. date.
pub fn volume_chart(series: &PriceSeries, ticker: &str) -> Figure {
    Figure::single(
        TraceKind::Bar,
        series,
        NumericColumn::Volume,
        format!("{ticker} Trading Volume"),
    )
}
