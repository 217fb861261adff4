//! Interaction event handler.
//!
//! Routes slash commands and component interactions to the ticket services.
//! Component interactions are routed by custom id through the session's
//! [`ComponentRegistry`](crate::bot::registry::ComponentRegistry), which is what
//! keeps menus and buttons from earlier runs working.
//!
//! Every failure is reported back to the invoking user so no interaction is left
//! unanswered.

use dioxus_logger::tracing;
use serenity::all::{
    ChannelId, CommandInteraction, ComponentInteraction, ComponentInteractionDataKind, Context,
    GuildId, Interaction, InteractionId, User,
};

use crate::{
    bot::{command::SETUP_TICKETS_COMMAND, state::BotState},
    error::AppError,
    gateway::{discord::DiscordGateway, TicketGateway},
    model::{
        category::TicketCategory,
        component::TicketComponent,
        message::InteractionReply,
        ticket::{Invocation, TicketUser},
    },
    service::{menu::TicketMenuService, ticket::TicketService},
};

/// Handles an interaction event.
///
/// # Arguments
/// - `state` - Session context with configuration and component routes
/// - `ctx` - Discord context used to build the gateway
/// - `interaction` - The interaction received from Discord
pub async fn handle_interaction(state: &BotState, ctx: Context, interaction: Interaction) {
    let gateway = DiscordGateway::new(&ctx);

    match interaction {
        Interaction::Command(command) => {
            let invocation = command_invocation(&command);
            if let Err(e) = dispatch_command(&gateway, &invocation, &command.data.name).await {
                report_failure(&gateway, &invocation, &e).await;
            }
        }
        Interaction::Component(component) => {
            let invocation = component_invocation(&component);
            let values: &[String] = match &component.data.kind {
                ComponentInteractionDataKind::StringSelect { values } => values.as_slice(),
                _ => &[],
            };

            if let Err(e) = dispatch_component(
                state,
                &gateway,
                &invocation,
                &component.data.custom_id,
                values,
            )
            .await
            {
                report_failure(&gateway, &invocation, &e).await;
            }
        }
        _ => {}
    }
}

/// Runs the slash command named `name`.
///
/// # Returns
/// - `Ok(())` - Command handled
/// - `Err(AppError::BadRequest)` - Unknown command
/// - `Err(AppError)` - Command failed
pub async fn dispatch_command<G: TicketGateway + ?Sized>(
    gateway: &G,
    invocation: &Invocation,
    name: &str,
) -> Result<(), AppError> {
    match name {
        SETUP_TICKETS_COMMAND => TicketMenuService::new(gateway).post_menu(invocation).await,
        _ => Err(AppError::BadRequest(format!("Unknown command '{}'", name))),
    }
}

/// Routes a component interaction by its custom id.
///
/// # Arguments
/// - `state` - Session context holding the component registry
/// - `gateway` - Gateway the ticket services use
/// - `invocation` - The interaction
/// - `custom_id` - Custom id of the pressed button or used select menu
/// - `values` - Selected values, empty for buttons
///
/// # Returns
/// - `Ok(())` - Ticket opened or closed
/// - `Err(AppError::BadRequest)` - Unknown custom id or category
/// - `Err(AppError)` - The ticket operation failed
pub async fn dispatch_component<G: TicketGateway + ?Sized>(
    state: &BotState,
    gateway: &G,
    invocation: &Invocation,
    custom_id: &str,
    values: &[String],
) -> Result<(), AppError> {
    let component = state
        .registry
        .resolve(custom_id)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown component '{}'", custom_id)))?;
    let service = TicketService::from_state(gateway, state);

    match component {
        TicketComponent::CategorySelect => {
            let category: TicketCategory = values
                .first()
                .ok_or_else(|| AppError::BadRequest("No ticket category selected".to_string()))?
                .parse()?;

            let ticket = service.open_ticket(invocation, category).await?;
            tracing::debug!(
                "{} ticket {} routed for {}",
                ticket.category,
                ticket.channel.name,
                ticket.owner.tag
            );
            Ok(())
        }
        TicketComponent::CloseButton => service.close_ticket(invocation).await,
    }
}

/// Logs a failed interaction and tells the user about it.
///
/// Tries the initial interaction response first and falls back to a follow-up
/// when the interaction was already acknowledged.
pub async fn report_failure<G: TicketGateway + ?Sized>(
    gateway: &G,
    invocation: &Invocation,
    error: &AppError,
) {
    tracing::error!(
        "Interaction from {} in channel {} failed: {}",
        invocation.user.tag,
        invocation.channel_id,
        error
    );

    let reply = InteractionReply::ephemeral(error.user_message());
    if gateway.respond(invocation, reply.clone()).await.is_ok() {
        return;
    }
    if let Err(e) = gateway.follow_up(invocation, reply).await {
        tracing::error!("Failed to report interaction failure to user: {}", e);
    }
}

fn command_invocation(command: &CommandInteraction) -> Invocation {
    invocation(
        command.id,
        &command.token,
        command.guild_id,
        command.channel_id,
        &command.user,
    )
}

fn component_invocation(component: &ComponentInteraction) -> Invocation {
    invocation(
        component.id,
        &component.token,
        component.guild_id,
        component.channel_id,
        &component.user,
    )
}

fn invocation(
    id: InteractionId,
    token: &str,
    guild_id: Option<GuildId>,
    channel_id: ChannelId,
    user: &User,
) -> Invocation {
    Invocation {
        id,
        token: token.to_string(),
        guild_id,
        channel_id,
        user: TicketUser::from(user),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::registry::ComponentRegistry;
    use crate::config::Config;
    use crate::gateway::mock::{Call, MockGateway};
    use test_utils::serenity::create_test_user;

    const GUILD_ID: u64 = 100000000000000001;
    const TICKET_CATEGORY_ID: u64 = 1465103469785514067;
    const LOG_CHANNEL_ID: u64 = 1461729802343026924;
    const CHANNEL_ID: u64 = 600000000000000001;

    fn state() -> BotState {
        let config = Config::from_vars(|name| match name {
            "DISCORD_TOKEN" => Some("token".to_string()),
            "TICKET_CATEGORY_ID" => Some(TICKET_CATEGORY_ID.to_string()),
            "LOG_CHANNEL_ID" => Some(LOG_CHANNEL_ID.to_string()),
            _ => None,
        })
        .unwrap();

        let mut state = BotState::new(&config, ComponentRegistry::new());
        state.close_grace = std::time::Duration::ZERO;
        state
    }

    fn alice() -> Invocation {
        invocation(
            InteractionId::new(800000000000000001),
            "token",
            Some(GuildId::new(GUILD_ID)),
            ChannelId::new(CHANNEL_ID),
            &create_test_user(300000000000000001, "alice"),
        )
    }

    /// Expected: user identity carried over from the serenity user
    #[test]
    fn builds_invocation_from_user() {
        let invocation = alice();

        assert_eq!(invocation.user.name, "alice");
        assert_eq!(invocation.user.mention(), "<@300000000000000001>");
    }

    /// Tests routing a category selection.
    ///
    /// Expected: Ok with `purchase-alice` created under the configured category
    #[tokio::test]
    async fn routes_category_select_to_creation() -> Result<(), AppError> {
        let gateway = MockGateway::new()
            .with_category(TICKET_CATEGORY_ID, "Tickets")
            .with_text_channel(CHANNEL_ID, "open-a-ticket", Vec::new());

        dispatch_component(
            &state(),
            &gateway,
            &alice(),
            "void_select",
            &["Purchase".to_string()],
        )
        .await?;

        let (_, channel) = gateway.find_channel("purchase-alice").unwrap();
        assert_eq!(channel.parent, Some(ChannelId::new(TICKET_CATEGORY_ID)));

        Ok(())
    }

    /// Expected: Ok with the ticket channel deleted
    #[tokio::test]
    async fn routes_close_button_to_close() -> Result<(), AppError> {
        let gateway = MockGateway::new()
            .with_text_channel(CHANNEL_ID, "support-alice", Vec::new())
            .with_text_channel(LOG_CHANNEL_ID, "ticket-logs", Vec::new());

        dispatch_component(&state(), &gateway, &alice(), "close_ticket", &[]).await?;

        assert!(gateway.channel(ChannelId::new(CHANNEL_ID)).is_none());
        assert_eq!(gateway.sent_to(ChannelId::new(LOG_CHANNEL_ID)).len(), 1);

        Ok(())
    }

    /// Expected: Err without any Discord call for an unknown custom id
    #[tokio::test]
    async fn rejects_unknown_component() {
        let gateway = MockGateway::new();

        let result = dispatch_component(&state(), &gateway, &alice(), "delete_all", &[]).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(gateway.calls().is_empty());
    }

    /// Expected: Err for a value that is not a ticket category
    #[tokio::test]
    async fn rejects_unknown_category() {
        let gateway = MockGateway::new();

        let result = dispatch_component(
            &state(),
            &gateway,
            &alice(),
            "void_select",
            &["Refund".to_string()],
        )
        .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(gateway.calls().is_empty());
    }

    /// Expected: Ok with the menu posted for the setup command
    #[tokio::test]
    async fn routes_setup_command() -> Result<(), AppError> {
        let gateway = MockGateway::new().with_text_channel(CHANNEL_ID, "open-a-ticket", Vec::new());

        dispatch_command(&gateway, &alice(), SETUP_TICKETS_COMMAND).await?;

        let sent = gateway.sent_to(ChannelId::new(CHANNEL_ID));
        assert_eq!(sent[0].components, vec![TicketComponent::CategorySelect]);

        Ok(())
    }

    /// Tests reporting a rejected ticket creation.
    ///
    /// Expected: ephemeral failure message as the interaction response
    #[tokio::test]
    async fn reports_failure_as_response() {
        let gateway = MockGateway::new()
            .with_category(TICKET_CATEGORY_ID, "Tickets")
            .failing_create();
        let invocation = alice();

        let error = dispatch_component(
            &state(),
            &gateway,
            &invocation,
            "void_select",
            &["Support".to_string()],
        )
        .await
        .unwrap_err();
        report_failure(&gateway, &invocation, &error).await;

        let replies = gateway.replies();
        assert_eq!(replies.len(), 1);
        assert!(replies[0].ephemeral);
        assert!(replies[0].content.starts_with("❌"));
    }

    /// Expected: follow-up used when the initial response is unavailable
    #[tokio::test]
    async fn falls_back_to_follow_up() {
        let gateway = MockGateway::new().failing_respond();

        report_failure(
            &gateway,
            &alice(),
            &AppError::BadRequest("Unknown channel".to_string()),
        )
        .await;

        assert_eq!(gateway.calls(), vec![Call::Respond, Call::FollowUp]);
        assert_eq!(
            gateway.follow_ups(),
            vec![InteractionReply::ephemeral("❌ Unknown channel")]
        );
    }
}
