use serenity::all::{Command, Context, CreateCommand, InteractionContext, Permissions};

use crate::error::AppError;

pub const SETUP_TICKETS_COMMAND: &str = "setup_tickets";

/// Administrator-only command posting the ticket menu in the current channel.
///
/// Only offered inside servers; tickets cannot be opened from direct messages.
pub fn setup_tickets_command() -> CreateCommand {
    CreateCommand::new(SETUP_TICKETS_COMMAND)
        .description("Post the ticket menu")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .contexts(vec![InteractionContext::Guild])
}

/// Replaces the bot's global application commands with its current set.
///
/// # Returns
/// - `Ok(usize)` - Number of commands registered
/// - `Err(AppError)` - Discord rejected the registration
pub async fn register_commands(ctx: &Context) -> Result<usize, AppError> {
    let commands = Command::set_global_commands(&ctx.http, vec![setup_tickets_command()]).await?;

    Ok(commands.len())
}
