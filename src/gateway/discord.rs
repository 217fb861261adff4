use dioxus_logger::tracing;
use serenity::all::{
    ButtonStyle, Cache, ChannelId, ChannelType, Context, CreateActionRow, CreateAttachment,
    CreateButton, CreateChannel, CreateEmbed, CreateEmbedFooter, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, CreateMessage,
    CreateSelectMenu, CreateSelectMenuKind, CreateSelectMenuOption, GetMessages, GuildId, Message,
    MessageId, PermissionOverwrite, ReactionType, Timestamp, UserId,
};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::{
    error::AppError,
    gateway::TicketGateway,
    model::{
        category::TicketCategory,
        component::TicketComponent,
        message::{InteractionReply, Notice, OutgoingMessage},
        ticket::{Invocation, TicketChannel},
        transcript::HistoryMessage,
    },
};

/// Maximum page size accepted by Discord's message history endpoint.
const HISTORY_PAGE_SIZE: u8 = 100;

/// Serenity-backed gateway built from the event context.
pub struct DiscordGateway {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl DiscordGateway {
    pub fn new(ctx: &Context) -> Self {
        Self {
            http: ctx.http.clone(),
            cache: ctx.cache.clone(),
        }
    }
}

#[async_trait]
impl TicketGateway for DiscordGateway {
    fn current_user_id(&self) -> UserId {
        self.cache.current_user().id
    }

    async fn resolve_category(&self, channel_id: ChannelId) -> Option<ChannelId> {
        match self.http.get_channel(channel_id).await {
            Ok(channel) => channel
                .guild()
                .filter(|channel| channel.kind == ChannelType::Category)
                .map(|channel| channel.id),
            Err(e) => {
                tracing::debug!("Failed to fetch channel category {}: {}", channel_id, e);
                None
            }
        }
    }

    async fn resolve_text_channel(&self, channel_id: ChannelId) -> Option<TicketChannel> {
        match self.http.get_channel(channel_id).await {
            Ok(channel) => channel
                .guild()
                .filter(|channel| channel.kind == ChannelType::Text)
                .map(|channel| TicketChannel {
                    id: channel.id,
                    name: channel.name,
                }),
            Err(e) => {
                tracing::debug!("Failed to fetch text channel {}: {}", channel_id, e);
                None
            }
        }
    }

    async fn guild_icon_url(&self, guild_id: GuildId) -> Option<String> {
        // Guild reference must be dropped before awaiting the HTTP fallback
        let cached = self.cache.guild(guild_id).map(|guild| guild.icon_url());
        if let Some(icon_url) = cached {
            return icon_url;
        }

        match self.http.get_guild(guild_id).await {
            Ok(guild) => guild.icon_url(),
            Err(e) => {
                tracing::warn!("Failed to fetch guild {} for its icon: {}", guild_id, e);
                None
            }
        }
    }

    async fn create_text_channel(
        &self,
        guild_id: GuildId,
        name: &str,
        parent: Option<ChannelId>,
        overwrites: Vec<PermissionOverwrite>,
    ) -> Result<TicketChannel, AppError> {
        let mut builder = CreateChannel::new(name)
            .kind(ChannelType::Text)
            .permissions(overwrites);
        if let Some(parent) = parent {
            builder = builder.category(parent);
        }

        let channel = guild_id.create_channel(&self.http, builder).await?;

        Ok(TicketChannel {
            id: channel.id,
            name: channel.name,
        })
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: OutgoingMessage,
    ) -> Result<(), AppError> {
        let mut builder = CreateMessage::new();

        if let Some(content) = message.content {
            builder = builder.content(content);
        }
        if let Some(notice) = &message.notice {
            builder = builder.embed(build_embed(notice));
        }
        if let Some(file) = message.file {
            builder = builder.add_file(CreateAttachment::bytes(file.data, file.filename));
        }
        if !message.components.is_empty() {
            builder = builder.components(build_components(&message.components));
        }

        channel_id.send_message(&self.http, builder).await?;

        Ok(())
    }

    async fn channel_history(&self, channel_id: ChannelId) -> Result<Vec<HistoryMessage>, AppError> {
        let mut messages: Vec<(MessageId, HistoryMessage)> = Vec::new();
        let mut before: Option<MessageId> = None;

        loop {
            let mut request = GetMessages::new().limit(HISTORY_PAGE_SIZE);
            if let Some(before) = before {
                request = request.before(before);
            }

            let page = channel_id.messages(&self.http, request).await?;
            before = merge_history_page(&mut messages, &page);
            if before.is_none() {
                break;
            }
        }

        Ok(oldest_first(messages))
    }

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), AppError> {
        channel_id.delete(&self.http).await?;

        Ok(())
    }

    async fn respond(
        &self,
        invocation: &Invocation,
        reply: InteractionReply,
    ) -> Result<(), AppError> {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(reply.content)
                .ephemeral(reply.ephemeral),
        );

        self.http
            .create_interaction_response(invocation.id, &invocation.token, &response, Vec::new())
            .await?;

        Ok(())
    }

    async fn follow_up(
        &self,
        invocation: &Invocation,
        reply: InteractionReply,
    ) -> Result<(), AppError> {
        let followup = CreateInteractionResponseFollowup::new()
            .content(reply.content)
            .ephemeral(reply.ephemeral);

        self.http
            .create_followup_message(&invocation.token, &followup, Vec::new())
            .await?;

        Ok(())
    }
}

impl From<&Message> for HistoryMessage {
    fn from(message: &Message) -> Self {
        Self {
            timestamp: message.timestamp.to_utc(),
            author: message.author.tag(),
            content: message.content.clone(),
        }
    }
}

/// Adds one page of channel history to `messages`.
///
/// Discord returns each page newest-first, so the next page is requested
/// before the oldest message of this one.
///
/// # Returns
/// - `Some(MessageId)` - Cursor for the next page
/// - `None` - Page was short or empty, history is exhausted
fn merge_history_page(
    messages: &mut Vec<(MessageId, HistoryMessage)>,
    page: &[Message],
) -> Option<MessageId> {
    messages.extend(
        page.iter()
            .map(|message| (message.id, HistoryMessage::from(message))),
    );

    if page.len() < HISTORY_PAGE_SIZE as usize {
        return None;
    }

    page.iter().map(|message| message.id).min()
}

fn oldest_first(mut messages: Vec<(MessageId, HistoryMessage)>) -> Vec<HistoryMessage> {
    messages.sort_by_key(|(id, _)| *id);

    messages.into_iter().map(|(_, message)| message).collect()
}

/// Converts a notice into a Discord embed.
fn build_embed(notice: &Notice) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(&notice.title)
        .description(&notice.description)
        .color(notice.color);

    if let Some(url) = &notice.thumbnail {
        embed = embed.thumbnail(url);
    }
    for field in &notice.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }
    if let Some(footer) = &notice.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }
    if let Some(timestamp) = notice.timestamp {
        embed = embed.timestamp(Timestamp::from(timestamp));
    }

    embed
}

fn build_components(components: &[TicketComponent]) -> Vec<CreateActionRow> {
    components
        .iter()
        .map(|component| match component {
            TicketComponent::CategorySelect => CreateActionRow::SelectMenu(category_select_menu()),
            TicketComponent::CloseButton => CreateActionRow::Buttons(vec![close_button()]),
        })
        .collect()
}

fn category_select_menu() -> CreateSelectMenu {
    let options = TicketCategory::ALL
        .into_iter()
        .map(|category| {
            CreateSelectMenuOption::new(category.label(), category.label())
                .description(category.option_description())
                .emoji(ReactionType::Unicode(category.emoji().to_string()))
        })
        .collect();

    CreateSelectMenu::new(
        TicketComponent::CategorySelect.custom_id(),
        CreateSelectMenuKind::String { options },
    )
    .placeholder("Select a ticket category...")
    .min_values(1)
    .max_values(1)
}

fn close_button() -> CreateButton {
    CreateButton::new(TicketComponent::CloseButton.custom_id())
        .label("Close")
        .style(ButtonStyle::Danger)
        .emoji(ReactionType::Unicode("🔒".to_string()))
}
