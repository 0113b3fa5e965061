pub mod charts;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod io;
pub mod loader;
pub mod logging;
pub mod models;
pub mod panels;
pub mod providers;
#[cfg(feature = "server")]
pub mod server;
pub mod stats;
