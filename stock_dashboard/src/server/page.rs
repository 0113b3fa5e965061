use serde::Serialize;
use tera::{Context, Tera};

use crate::{
    dashboard::RenderOutput,
    errors::Result,
    models::{price_record::NumericColumn, ticker::Ticker},
    panels::input::Inputs,
    stats::format_stat,
};

const TEMPLATE_NAME: &str = "dashboard.html";
const TEMPLATE: &str = include_str!("../../templates/dashboard.html");

#[derive(Serialize)]
struct RowView {
    index: usize,
    cells: Vec<String>,
}

#[derive(Serialize)]
struct StatsRowView {
    label: &'static str,
    cells: Vec<String>,
}

#[derive(Serialize)]
struct PageView {
    title: &'static str,
    tickers: Vec<&'static str>,
    selected: &'static str,
    start: String,
    end: String,
    warning: Option<&'static str>,
    download_href: String,
    download_name: &'static str,
    raw_heading: String,
    preview_columns: Vec<&'static str>,
    preview: Vec<RowView>,
    close_chart_json: String,
    volume_chart_json: String,
    stats_heading: String,
    stats_columns: Vec<&'static str>,
    stats_rows: Vec<StatsRowView>,
}

/// Link to the CSV export for the same inputs.
pub fn download_href(inputs: &Inputs) -> String {
    format!(
        "/download?ticker={}&start={}&end={}",
        inputs.ticker, inputs.start, inputs.end
    )
}

/// Renders a [`RenderOutput`] as the full dashboard page.
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { tera })
    }

    pub fn render(&self, output: &RenderOutput) -> Result<String> {
        let view = page_view(output)?;
        let html = self
            .tera
            .render(TEMPLATE_NAME, &Context::from_serialize(&view)?)?;
        Ok(html)
    }
}

fn page_view(output: &RenderOutput) -> Result<PageView> {
    let presentation = &output.presentation;
    let columns: Vec<&'static str> = NumericColumn::ALL.iter().map(|c| c.label()).collect();

    let preview = presentation
        .preview
        .iter()
        .map(|row| {
            let record = &row.record;
            let mut cells = vec![record.date.to_string()];
            cells.extend(
                NumericColumn::ALL
                    .iter()
                    .map(|column| match column {
                        NumericColumn::Volume => record.volume.to_string(),
                        other => other.value(record).to_string(),
                    }),
            );
            RowView {
                index: row.index,
                cells,
            }
        })
        .collect();

    let stats_rows = presentation
        .statistics
        .rows()
        .into_iter()
        .map(|(label, values)| StatsRowView {
            label,
            cells: values.into_iter().map(|v| format_stat(label, v)).collect(),
        })
        .collect();

    let mut preview_columns = vec!["Date"];
    preview_columns.extend(columns.iter().copied());

    Ok(PageView {
        title: output.title,
        tickers: Ticker::symbols(),
        selected: output.inputs.ticker.as_str(),
        start: output.inputs.start.to_string(),
        end: output.inputs.end.to_string(),
        warning: output.warning,
        download_href: download_href(&output.inputs),
        download_name: presentation.download.file_name,
        raw_heading: presentation.raw_heading.clone(),
        preview_columns,
        preview,
        close_chart_json: presentation.close_chart.to_json()?,
        volume_chart_json: presentation.volume_chart.to_json()?,
        stats_heading: presentation.stats_heading.clone(),
        stats_columns: columns,
        stats_rows,
    })
}
