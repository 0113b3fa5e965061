use std::{fmt::Write as _, path::Path};

use anyhow::Context;
use chrono::{Local, NaiveDate};
use tracing::info;

use crate::{
    config::Config,
    dashboard::{Dashboard, RenderOutput},
    io::sink::{CsvFileSink, DataSink},
    models::{price_record::NumericColumn, ticker::Ticker},
    panels::input::{Inputs, default_start},
    providers::DataProvider,
    server,
    stats::format_stat,
};

/// `serve`: run the HTTP dashboard until the process is stopped.
pub async fn serve<P: DataProvider + 'static>(
    config: &Config,
    bind: Option<String>,
    provider: P,
) -> anyhow::Result<()> {
    let bind = bind.unwrap_or_else(|| config.server.bind.clone());
    let dashboard = Dashboard::with_tail_rows(provider, config.presentation.tail_rows);
    server::run(&bind, dashboard).await
}

/// Options of the `render` subcommand.
pub struct RenderArgs<'a> {
    pub ticker: Ticker,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub csv: Option<&'a Path>,
    pub charts: Option<&'a Path>,
}

/// `render`: one pass, printed to stdout, with optional file exports.
pub async fn render<P: DataProvider>(
    config: &Config,
    args: RenderArgs<'_>,
    provider: P,
) -> anyhow::Result<()> {
    let inputs = Inputs {
        ticker: args.ticker,
        start: args.start.unwrap_or_else(default_start),
        end: args.end.unwrap_or_else(|| Local::now().date_naive()),
    };
    let mut dashboard = Dashboard::with_tail_rows(provider, config.presentation.tail_rows);
    let output = dashboard.render(&inputs).await?;

    print!("{}", format_output(&output));

    if let Some(path) = args.csv {
        let written = CsvFileSink::new(path).write(&output.series).await?;
        println!("CSV written to {}", written.display());
    }
    if let Some(dir) = args.charts {
        write_charts(dir, &output).await?;
    }
    Ok(())
}

async fn write_charts(dir: &Path, output: &RenderOutput) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("create chart directory {}", dir.display()))?;
    let symbol = output.inputs.ticker.as_str();
    let figures = [
        ("close", &output.presentation.close_chart),
        ("volume", &output.presentation.volume_chart),
    ];
    for (name, figure) in figures {
        let path = dir.join(format!("{symbol}_{name}.json"));
        tokio::fs::write(&path, figure.to_json()?)
            .await
            .with_context(|| format!("write chart {}", path.display()))?;
        info!(path = %path.display(), "chart written");
    }
    Ok(())
}

/// Plain-text rendering of a pass: warning, preview table, statistics table.
pub fn format_output(output: &RenderOutput) -> String {
    let presentation = &output.presentation;
    let mut out = String::new();

    let _ = writeln!(out, "{}", output.title);
    let _ = writeln!(
        out,
        "Ticker: {}  Start: {}  End: {}",
        output.inputs.ticker, output.inputs.start, output.inputs.end
    );
    if let Some(warning) = output.warning {
        let _ = writeln!(out, "{warning}");
    }

    let _ = writeln!(out, "\n{}", presentation.raw_heading);
    let _ = writeln!(
        out,
        "{:>6} {:>10} {:>12} {:>12} {:>12} {:>12} {:>12}",
        "", "Date", "Open", "High", "Low", "Close", "Volume"
    );
    for row in &presentation.preview {
        let r = &row.record;
        let _ = writeln!(
            out,
            "{:>6} {:>10} {:>12.4} {:>12.4} {:>12.4} {:>12.4} {:>12}",
            row.index, r.date, r.open, r.high, r.low, r.close, r.volume
        );
    }

    let _ = writeln!(out, "\n{}", presentation.stats_heading);
    let _ = write!(out, "{:>6}", "");
    for column in NumericColumn::ALL {
        let _ = write!(out, " {:>16}", column.label());
    }
    let _ = writeln!(out);
    for (label, values) in presentation.statistics.rows() {
        let _ = write!(out, "{label:>6}");
        for value in values {
            let _ = write!(out, " {:>16}", format_stat(label, value));
        }
        let _ = writeln!(out);
    }
    out
}
