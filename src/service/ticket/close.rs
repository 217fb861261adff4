//! Ticket closing.
//!
//! Closing acknowledges the button press, archives a transcript to the log
//! channel and deletes the ticket channel. Archiving is best effort: once the
//! close button was pressed the channel is always deleted, whatever happened to
//! the transcript.

use chrono::Utc;
use dioxus_logger::tracing;

use crate::{
    error::AppError,
    gateway::TicketGateway,
    model::{
        message::InteractionReply,
        ticket::{Invocation, TicketChannel},
    },
    service::transcript::TranscriptBuilder,
};

use super::{
    builder::{build_archive_message, CLOSING_NOTICE},
    TicketService,
};

impl<'a, G: TicketGateway + ?Sized> TicketService<'a, G> {
    /// Closes the ticket the close button was pressed in.
    ///
    /// The interaction is answered publicly before the history scan, which can
    /// take longer than Discord's acknowledgment deadline. Failures while
    /// acknowledging, reading history or archiving are logged and never prevent
    /// deletion.
    ///
    /// # Arguments
    /// - `invocation` - The close button interaction; its channel is the ticket
    ///
    /// # Returns
    /// - `Ok(())` - Ticket channel deleted
    /// - `Err(AppError)` - Discord rejected the deletion
    pub async fn close_ticket(&self, invocation: &Invocation) -> Result<(), AppError> {
        if let Err(e) = self
            .gateway
            .respond(invocation, InteractionReply::public(CLOSING_NOTICE))
            .await
        {
            tracing::warn!(
                "Failed to acknowledge close of channel {}: {}",
                invocation.channel_id,
                e
            );
        }

        let channel = match self.gateway.resolve_text_channel(invocation.channel_id).await {
            Some(channel) => channel,
            None => TicketChannel {
                id: invocation.channel_id,
                name: invocation.channel_id.to_string(),
            },
        };

        match self.archive(&channel, invocation).await {
            Ok(true) => tracing::debug!("Archived transcript of ticket {}", channel.name),
            Ok(false) => {}
            Err(e) => tracing::error!(
                "Failed to archive ticket {} ({}): {}",
                channel.name,
                channel.id,
                e
            ),
        }

        tokio::time::sleep(self.close_grace).await;

        self.gateway.delete_channel(channel.id).await?;

        tracing::info!(
            "Closed ticket {} ({}) by {}",
            channel.name,
            channel.id,
            invocation.user.tag
        );

        Ok(())
    }

    /// Builds the transcript and sends it to the log channel.
    ///
    /// # Returns
    /// - `Ok(true)` - Transcript archived
    /// - `Ok(false)` - No log channel configured or it no longer exists
    /// - `Err(AppError)` - History could not be read or the archive send failed
    async fn archive(
        &self,
        channel: &TicketChannel,
        invocation: &Invocation,
    ) -> Result<bool, AppError> {
        let closed_at = Utc::now();
        let transcript = TranscriptBuilder::new(self.gateway)
            .build(channel, &invocation.user, closed_at)
            .await?;

        let Some(log_channel_id) = self.log_channel_id else {
            return Ok(false);
        };
        let Some(log_channel) = self.gateway.resolve_text_channel(log_channel_id).await else {
            tracing::warn!(
                "Log channel {} not found, skipping transcript for {}",
                log_channel_id,
                channel.name
            );
            return Ok(false);
        };

        self.gateway
            .send_message(
                log_channel.id,
                build_archive_message(channel, &transcript, closed_at),
            )
            .await?;

        Ok(true)
    }
}
