//! Session context handed to every interaction handler.
//!
//! Built once during startup from the configuration and owned by the serenity
//! event handler. It is read-only for the lifetime of the process.

use serenity::all::ChannelId;
use std::time::Duration;

use crate::{bot::registry::ComponentRegistry, config::Config, service::ticket::CLOSE_GRACE_PERIOD};

pub struct BotState {
    /// Channel category new tickets are created under
    pub ticket_category_id: Option<ChannelId>,
    /// Channel transcripts are archived to
    pub log_channel_id: Option<ChannelId>,
    /// Wait between archiving a ticket and deleting it
    pub close_grace: Duration,
    /// Persistent component routes
    pub registry: ComponentRegistry,
}

impl BotState {
    pub fn new(config: &Config, registry: ComponentRegistry) -> Self {
        Self {
            ticket_category_id: config.ticket_category_id,
            log_channel_id: config.log_channel_id,
            close_grace: CLOSE_GRACE_PERIOD,
            registry,
        }
    }
}
