use dioxus_logger::tracing;

use crate::{
    error::AppError,
    gateway::TicketGateway,
    model::{
        component::TicketComponent,
        message::{InteractionReply, Notice, OutgoingMessage},
        ticket::Invocation,
    },
};

const MENU_TITLE: &str = "Void Market Assistant";
const MENU_DESCRIPTION: &str = "If you need help, click on the option corresponding to the type of ticket you want to open. **Response time may vary to many factors, so please be patient.**";

/// Posts the ticket category menu for the `setup_tickets` command.
pub struct TicketMenuService<'a, G: TicketGateway + ?Sized> {
    gateway: &'a G,
}

impl<'a, G: TicketGateway + ?Sized> TicketMenuService<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Posts the menu embed with the category select into the invoking channel.
    ///
    /// The select menu carries the persistent `CategorySelect` id, so the posted
    /// menu keeps opening tickets after the bot restarts.
    ///
    /// # Returns
    /// - `Ok(())` - Menu posted and the administrator notified ephemerally
    /// - `Err(AppError::BadRequest)` - Command used outside a guild
    /// - `Err(AppError)` - Discord rejected the message
    pub async fn post_menu(&self, invocation: &Invocation) -> Result<(), AppError> {
        let guild_id = invocation.guild_id.ok_or_else(|| {
            AppError::BadRequest("The ticket menu can only be posted inside a server.".to_string())
        })?;

        let thumbnail = self.gateway.guild_icon_url(guild_id).await;
        let message = OutgoingMessage::new()
            .notice(Notice::new(MENU_TITLE, MENU_DESCRIPTION).thumbnail(thumbnail))
            .component(TicketComponent::CategorySelect);

        self.gateway
            .send_message(invocation.channel_id, message)
            .await?;

        tracing::info!(
            "{} posted the ticket menu in channel {}",
            invocation.user.tag,
            invocation.channel_id
        );

        self.gateway
            .respond(invocation, InteractionReply::ephemeral("✅ Menu posted."))
            .await
    }
}
