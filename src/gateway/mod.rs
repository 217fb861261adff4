//! Discord operations the ticket services depend on.
//!
//! `TicketGateway` is the seam between the ticket lifecycle and Discord. The
//! production implementation, [`discord::DiscordGateway`], wraps serenity's HTTP
//! client and cache. Tests use the in-memory `mock::MockGateway`.

pub mod discord;

#[cfg(test)]
pub mod mock;

use serenity::all::{ChannelId, GuildId, PermissionOverwrite, UserId};
use serenity::async_trait;

use crate::{
    error::AppError,
    model::{
        message::{InteractionReply, OutgoingMessage},
        ticket::{Invocation, TicketChannel},
        transcript::HistoryMessage,
    },
};

#[async_trait]
pub trait TicketGateway: Send + Sync {
    /// Id of the bot's own user.
    fn current_user_id(&self) -> UserId;

    /// Returns the id if it refers to an existing channel category.
    async fn resolve_category(&self, channel_id: ChannelId) -> Option<ChannelId>;

    /// Returns the channel if it refers to an existing guild text channel.
    async fn resolve_text_channel(&self, channel_id: ChannelId) -> Option<TicketChannel>;

    /// URL of the guild's icon, if it has one.
    async fn guild_icon_url(&self, guild_id: GuildId) -> Option<String>;

    /// Creates a guild text channel, optionally inside a category.
    async fn create_text_channel(
        &self,
        guild_id: GuildId,
        name: &str,
        parent: Option<ChannelId>,
        overwrites: Vec<PermissionOverwrite>,
    ) -> Result<TicketChannel, AppError>;

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: OutgoingMessage,
    ) -> Result<(), AppError>;

    /// Full message history of a channel, oldest first.
    async fn channel_history(&self, channel_id: ChannelId) -> Result<Vec<HistoryMessage>, AppError>;

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), AppError>;

    /// Sends the initial response to an interaction.
    async fn respond(&self, invocation: &Invocation, reply: InteractionReply)
        -> Result<(), AppError>;

    /// Sends a follow-up to an interaction that was already responded to.
    async fn follow_up(
        &self,
        invocation: &Invocation,
        reply: InteractionReply,
    ) -> Result<(), AppError>;
}
