use clap::Parser;
use stock_dashboard::{
    cli::{
        Cli, Commands,
        commands::{self, RenderArgs},
    },
    config::Config,
    logging,
    providers::yahoo::YahooProvider,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let provider = YahooProvider::new(&config.provider)?;

    match cli.command {
        Commands::Serve { bind } => commands::serve(&config, bind, provider).await,
        Commands::Render {
            ticker,
            start,
            end,
            csv,
            charts,
        } => {
            let args = RenderArgs {
                ticker,
                start,
                end,
                csv: csv.as_deref(),
                charts: charts.as_deref(),
            };
            commands::render(&config, args, provider).await
        }
    }
}
