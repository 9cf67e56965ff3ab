mod app;
mod cli;
mod config;
mod error;
mod models;
mod output;
mod progress;
mod scraping;
mod shutdown;

use std::error::Error;

use app::App;
use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli_args = CliArgs::parse_args();
    cli_args.validate()?;

    let log_level = match cli_args.log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };

    tracing_subscriber::fmt().with_max_level(log_level).init();

    tracing::info!("Starting Best Sellers discount exporter");

    let shutdown_manager = shutdown::setup_shutdown_handler();

    let config = config::AppConfig::load_with_cli_args(&cli_args)?;
    let app = App::new(config);

    tokio::select! {
        result = app.run() => {
            match result {
                Ok(()) => tracing::info!("Run completed successfully"),
                Err(e) => {
                    tracing::error!("Run failed: {}", e);
                    return Err(e.into());
                }
            }
        }
        _ = shutdown_manager.wait_for_shutdown() => {
            tracing::info!("Shutdown requested, aborting run");
        }
    }

    Ok(())
}
