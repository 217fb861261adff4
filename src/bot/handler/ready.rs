//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.
//!
//! The ready handler is used to:
//! - Set the bot's presence
//! - Log connection information
//! - Register the application commands

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Context, OnlineStatus, Ready};

use crate::bot::command::register_commands;

const PRESENCE_ACTIVITY: &str = "✨Managing tickets..";

/// Handles the ready event when the bot connects to Discord.
///
/// Fires on every (re)connection. Command registration overwrites the global
/// command set, so repeating it is harmless.
///
/// # Arguments
/// - `ctx` - Discord context for setting presence and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    ctx.set_presence(
        Some(ActivityData::playing(PRESENCE_ACTIVITY)),
        OnlineStatus::DoNotDisturb,
    );

    tracing::info!("{} is connected to Discord", ready.user.name);

    match register_commands(&ctx).await {
        Ok(count) => tracing::info!("Registered {} application commands", count),
        Err(e) => tracing::error!("Failed to register application commands: {}", e),
    }
}
