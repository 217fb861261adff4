use chrono::{DateTime, Utc};

use crate::{
    error::AppError,
    gateway::TicketGateway,
    model::{
        ticket::{TicketChannel, TicketUser},
        transcript::Transcript,
    },
};

/// Builds transcripts from a ticket channel's history.
pub struct TranscriptBuilder<'a, G: TicketGateway + ?Sized> {
    gateway: &'a G,
}

impl<'a, G: TicketGateway + ?Sized> TranscriptBuilder<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Reads the channel's entire history and renders it into a transcript.
    ///
    /// History is read oldest-first with no limit on the number of messages.
    /// Nothing in the channel is modified.
    ///
    /// # Arguments
    /// - `channel` - Ticket channel being closed
    /// - `closed_by` - Member who pressed the close button
    /// - `closed_at` - Time written into the transcript header
    ///
    /// # Returns
    /// - `Ok(Transcript)` - One line per message in the channel
    /// - `Err(AppError)` - History could not be read
    pub async fn build(
        &self,
        channel: &TicketChannel,
        closed_by: &TicketUser,
        closed_at: DateTime<Utc>,
    ) -> Result<Transcript, AppError> {
        let history = self.gateway.channel_history(channel.id).await?;

        Ok(Transcript::new(
            channel.name.clone(),
            closed_by.clone(),
            closed_at,
            &history,
        ))
    }
}
