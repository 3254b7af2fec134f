use chart_feed::utils::{logger, validation::Validate};
use chart_feed::{ChartConfig, ChartFetcher};
use clap::Parser;

#[tokio::main]
async fn main() {
    let config = ChartConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting chart-feed");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(2);
    }

    let pretty = config.pretty;
    let fetcher = ChartFetcher::new(config);

    match fetcher.fetch_chart_data().await {
        Ok(bundle) => {
            let json = if pretty {
                serde_json::to_string_pretty(&bundle)
            } else {
                serde_json::to_string(&bundle)
            };

            match json {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    tracing::error!("Failed to serialize bundle: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
