mod chart;
mod cli;
mod error;
mod report;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ratevol_core::{date_range, fetch_price_series, rolling_volatility, RippleDataAdapter};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = run().await {
        eprintln!("error: {error}");
        std::process::exit(error.exit_code());
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = cli.to_config()?;

    let dates = date_range(config.start, config.end)?;
    let source = RippleDataAdapter::with_base_url(&cli.api_url);
    let series = fetch_price_series(&source, &config.pair, &dates).await?;

    let volatility = rolling_volatility(&series.rates(), config.spec)?;

    report::write_csv(std::io::stdout().lock(), &series, &volatility)?;

    if !cli.no_chart {
        chart::render(&cli.chart, &config.pair, &series, &volatility)?;
        info!(path = %cli.chart.display(), "chart written");
    }

    Ok(())
}
