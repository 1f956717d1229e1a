use std::path::PathBuf;

use clap::Parser;
use flightdeck::adapter::inbound::tui;
use flightdeck::infrastructure::config::settings::Config;
use tracing::{error, info};

/// Terminal flight planning client.
#[derive(Parser, Debug)]
#[command(name = "flightdeck", version, about)]
struct Cli {
    /// Path to the TOML configuration file. A missing file means defaults.
    #[arg(short, long, default_value = "flightdeck.toml")]
    config: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match Config::load_or_default(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.init_logging() {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }
    info!(base_url = %config.service.base_url, "flightdeck starting");

    if let Err(e) = tui::run(&config).await {
        error!(error = %e, "Fatal error");
        eprintln!("flightdeck: {e}");
        std::process::exit(1);
    }

    info!("flightdeck stopped");
}
