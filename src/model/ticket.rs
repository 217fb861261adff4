use serenity::all::{ChannelId, GuildId, InteractionId, User, UserId};

use crate::model::category::TicketCategory;

/// Discord user taking part in a ticket interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketUser {
    pub id: UserId,
    /// Unique username, used to build ticket channel names
    pub name: String,
    /// Display tag (`name` or `name#1234` for legacy accounts)
    pub tag: String,
}

impl TicketUser {
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

impl From<&User> for TicketUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            tag: user.tag(),
        }
    }
}

/// The parts of a Discord interaction the ticket services need.
///
/// Carries the interaction id and token so the gateway can answer the
/// interaction, plus where it happened and who triggered it.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub id: InteractionId,
    pub token: String,
    pub guild_id: Option<GuildId>,
    pub channel_id: ChannelId,
    pub user: TicketUser,
}

/// A guild text channel as seen by the ticket services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketChannel {
    pub id: ChannelId,
    pub name: String,
}

impl TicketChannel {
    pub fn mention(&self) -> String {
        format!("<#{}>", self.id)
    }
}

/// An open ticket. The channel is the only record of it.
#[derive(Debug, Clone)]
pub struct Ticket {
    pub channel: TicketChannel,
    pub owner: TicketUser,
    pub category: TicketCategory,
}
