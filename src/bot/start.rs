use dioxus_logger::tracing;
use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::{handler::Handler, registry::ComponentRegistry, state::BotState},
    config::Config,
    error::AppError,
};

/// Builds the Discord client with its session context.
///
/// The persistent component registry is populated here, before the client
/// connects, so the first interaction received after a restart is already
/// routable.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError)` - Client could not be built (e.g. malformed token)
pub async fn init_bot(config: &Config) -> Result<Client, AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let registry = ComponentRegistry::new();
    tracing::info!(
        "Registered persistent components: {}",
        registry.custom_ids().join(", ")
    );

    let handler = Handler::new(BotState::new(config, registry));

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Starts the Discord bot in a blocking manner
///
/// Runs until the gateway connection shuts down.
///
/// # Returns
/// - `Ok(())` if the bot shuts down cleanly
/// - `Err(AppError)` if the connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
