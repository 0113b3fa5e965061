//! Command-line surface of the dashboard binary.

pub mod commands;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::models::ticker::Ticker;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the config file (dashboard.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the dashboard over HTTP
    Serve {
        /// Listen address; overrides the config file (e.g. "0.0.0.0:8501")
        #[arg(long)]
        bind: Option<String>,
    },

    /// Run a single render pass and print it to the terminal
    Render {
        /// One of AAPL, GOOGL, MSFT, TSLA, AMZN
        #[arg(long, default_value = "AAPL")]
        ticker: Ticker,

        /// Start date as YYYY-MM-DD (default 2023-01-01)
        #[arg(long)]
        start: Option<NaiveDate>,

        /// End date as YYYY-MM-DD (default today)
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Write the CSV export to this file or directory
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write both chart figures as JSON into this directory
        #[arg(long)]
        charts: Option<PathBuf>,
    },
}
