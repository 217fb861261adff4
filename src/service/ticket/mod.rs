//! Ticket lifecycle service.
//!
//! This module provides the `TicketService` for opening and closing support
//! tickets. A ticket is a private guild text channel; the service holds no state
//! of its own between interactions.
//!
//! The service is organized into separate modules by concern:
//! - `builder` - Intro and archive message building
//! - `creation` - Opening a ticket from a category selection
//! - `close` - Archiving a transcript and deleting the ticket

pub mod builder;
pub mod close;
pub mod creation;

#[cfg(test)]
mod test;

use serenity::all::ChannelId;
use std::time::Duration;

use crate::{bot::state::BotState, gateway::TicketGateway};

/// Delay between archiving a ticket and deleting its channel.
///
/// Gives the closing notice and the archive message time to land before the
/// channel disappears.
pub const CLOSE_GRACE_PERIOD: Duration = Duration::from_secs(2);

/// Service providing the open and close operations of a ticket.
pub struct TicketService<'a, G: TicketGateway + ?Sized> {
    /// Gateway used for every Discord operation
    gateway: &'a G,
    /// Channel category new tickets are created under, if configured
    ticket_category_id: Option<ChannelId>,
    /// Channel transcripts are archived to, if configured
    log_channel_id: Option<ChannelId>,
    /// Wait before deleting a closed ticket
    close_grace: Duration,
}

impl<'a, G: TicketGateway + ?Sized> TicketService<'a, G> {
    /// Creates a new TicketService instance.
    ///
    /// # Arguments
    /// - `gateway` - Discord gateway for channel and message operations
    /// - `ticket_category_id` - Category to create tickets under
    /// - `log_channel_id` - Channel to archive transcripts to
    ///
    /// # Returns
    /// - `TicketService` - Service using the production grace period
    pub fn new(
        gateway: &'a G,
        ticket_category_id: Option<ChannelId>,
        log_channel_id: Option<ChannelId>,
    ) -> Self {
        Self {
            gateway,
            ticket_category_id,
            log_channel_id,
            close_grace: CLOSE_GRACE_PERIOD,
        }
    }

    /// Creates a service configured from the bot session.
    pub fn from_state(gateway: &'a G, state: &BotState) -> Self {
        Self::new(gateway, state.ticket_category_id, state.log_channel_id)
            .with_close_grace(state.close_grace)
    }

    pub fn with_close_grace(mut self, close_grace: Duration) -> Self {
        self.close_grace = close_grace;
        self
    }
}
