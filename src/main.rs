mod bot;
mod config;
mod error;
mod gateway;
mod model;
mod router;
mod service;
mod startup;

use dioxus_logger::tracing::{self, Level};

use crate::{bot::start, config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = Config::from_env()?;

    tracing::info!("Starting ticket bot");

    // Keep-alive server runs independently of the bot
    let port = config.keep_alive_port;
    tokio::spawn(async move {
        if let Err(e) = startup::serve_keep_alive(port).await {
            tracing::error!("Keep-alive server error: {}", e);
        }
    });

    let client = start::init_bot(&config).await?;
    start::start_bot(client).await
}
