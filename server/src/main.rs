mod api_error;
mod server_config;
mod tile_handlers;
mod web_server;

use clap::Parser;
use common::config::Validate;
use common::{log, logger};
use std::path::PathBuf;

use server_config::DEFAULT_CONFIG_FILE_NAME;

#[derive(Parser)]
#[command(name = "tiles_server")]
struct Args {
    /// YAML config file; defaults are used when it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_FILE_NAME)]
    config: PathBuf,

    /// Overrides the listen address from the config file
    #[arg(long)]
    address: Option<String>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = server_config::get_config_manager(&args.config).get_config()?;
    if let Some(address) = args.address {
        config.address = address;
        config.validate()?;
    }
    log!(
        "Rules: default_clicks={}, max_dimension={}, max_clicks={}",
        config.rules.default_clicks,
        config.rules.max_dimension,
        config.rules.max_clicks
    );

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
        log!("Shutdown signal received");
    };

    web_server::run_web_server(config, shutdown_signal).await?;

    log!("Server shut down gracefully");

    Ok(())
}
