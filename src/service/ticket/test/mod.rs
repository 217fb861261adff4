use crate::{
    error::AppError,
    gateway::mock::{Call, MockGateway, BOT_USER_ID},
    model::{
        category::TicketCategory,
        component::TicketComponent,
        message::InteractionReply,
        ticket::{Invocation, TicketUser},
        transcript::HistoryMessage,
    },
    service::{permission::can_view, ticket::TicketService},
};
use chrono::{Duration, TimeZone, Utc};
use serenity::all::{
    ChannelId, GuildId, InteractionId, PermissionOverwriteType, RoleId, UserId,
};


const GUILD_ID: u64 = 100000000000000001;
const TICKET_CATEGORY_ID: u64 = 1465103469785514067;
const LOG_CHANNEL_ID: u64 = 1461729802343026924;
const MENU_CHANNEL_ID: u64 = 600000000000000009;
const TICKET_CHANNEL_ID: u64 = 600000000000000001;

fn user(id: u64, name: &str) -> TicketUser {
    TicketUser {
        id: UserId::new(id),
        name: name.to_string(),
        tag: name.to_string(),
    }
}

fn invocation(channel_id: u64, user: TicketUser) -> Invocation {
    Invocation {
        id: InteractionId::new(800000000000000001),
        token: "interaction-token".to_string(),
        guild_id: Some(GuildId::new(GUILD_ID)),
        channel_id: ChannelId::new(channel_id),
        user,
    }
}

fn history(author: &str, contents: &[&str]) -> Vec<HistoryMessage> {
    let start = Utc.with_ymd_and_hms(2025, 1, 31, 18, 0, 0).unwrap();
    contents
        .iter()
        .enumerate()
        .map(|(i, content)| HistoryMessage {
            timestamp: start + Duration::minutes(i as i64),
            author: author.to_string(),
            content: content.to_string(),
        })
        .collect()
}

fn service(gateway: &MockGateway) -> TicketService<'_, MockGateway> {
    TicketService::new(
        gateway,
        Some(ChannelId::new(TICKET_CATEGORY_ID)),
        Some(ChannelId::new(LOG_CHANNEL_ID)),
    )
    .with_close_grace(std::time::Duration::ZERO)
}
