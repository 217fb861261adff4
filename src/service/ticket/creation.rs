//! Ticket creation.
//!
//! Opens a private text channel for the member who picked a category in the
//! ticket menu and posts the intro message with the close button.

use dioxus_logger::tracing;

use crate::{
    error::AppError,
    gateway::TicketGateway,
    model::{
        category::TicketCategory,
        message::InteractionReply,
        ticket::{Invocation, Ticket},
    },
    service::permission::{default_role, ticket_overwrites},
};

use super::{builder::build_intro_message, TicketService};

impl<'a, G: TicketGateway + ?Sized> TicketService<'a, G> {
    /// Opens a ticket of `category` for the invoking member.
    ///
    /// The configured ticket category is used as parent when it still exists;
    /// otherwise the channel is created at Discord's default position. The
    /// member gets an ephemeral link to the channel before the intro message is
    /// posted. If that acknowledgment is rejected the intro is still posted and
    /// the link is sent as a follow-up instead.
    ///
    /// # Arguments
    /// - `invocation` - The select menu interaction
    /// - `category` - Category picked in the menu
    ///
    /// # Returns
    /// - `Ok(Ticket)` - Channel created and intro posted
    /// - `Err(AppError::BadRequest)` - Interaction did not come from a guild
    /// - `Err(AppError)` - Discord rejected channel creation or a message
    pub async fn open_ticket(
        &self,
        invocation: &Invocation,
        category: TicketCategory,
    ) -> Result<Ticket, AppError> {
        let guild_id = invocation.guild_id.ok_or_else(|| {
            AppError::BadRequest("Tickets can only be opened inside a server.".to_string())
        })?;
        let owner = invocation.user.clone();

        let parent = match self.ticket_category_id {
            Some(category_id) => {
                let parent = self.gateway.resolve_category(category_id).await;
                if parent.is_none() {
                    tracing::warn!(
                        "Ticket category {} not found, creating ticket without a parent",
                        category_id
                    );
                }
                parent
            }
            None => None,
        };

        let overwrites = ticket_overwrites(
            default_role(guild_id),
            owner.id,
            self.gateway.current_user_id(),
        );

        let channel = self
            .gateway
            .create_text_channel(guild_id, &category.channel_name(&owner.name), parent, overwrites)
            .await?;

        tracing::info!(
            "Opened {} ticket {} ({}) for {}",
            category,
            channel.name,
            channel.id,
            owner.tag
        );

        let link = InteractionReply::ephemeral(format!(
            "✅ Your ticket has been created: {}",
            channel.mention()
        ));

        // The channel exists from here on, so it must always get its close button
        let acknowledged = match self.gateway.respond(invocation, link.clone()).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    "Failed to acknowledge ticket {} for {}: {}",
                    channel.name,
                    owner.tag,
                    e
                );
                false
            }
        };

        let icon_url = self.gateway.guild_icon_url(guild_id).await;
        self.gateway
            .send_message(channel.id, build_intro_message(category, &owner, icon_url))
            .await?;

        if !acknowledged {
            if let Err(e) = self.gateway.follow_up(invocation, link).await {
                tracing::warn!(
                    "Failed to send ticket link {} to {}: {}",
                    channel.name,
                    owner.tag,
                    e
                );
            }
        }

        Ok(Ticket {
            channel,
            owner,
            category,
        })
    }
}
