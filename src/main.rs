use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use anonymous_board::core::app::App;
use anonymous_board::core::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting anonymous board");

    // Load configuration
    let config = Config::load().await?;

    // Initialize the application
    let app = App::new(config).await?;

    // Start the application
    if let Err(e) = app.run().await {
        error!("Application error: {}", e);
        return Err(e);
    }

    Ok(())
}
