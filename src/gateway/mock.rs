//! In-memory gateway for service tests.
//!
//! Keeps a tiny model of a guild (categories, text channels and their history)
//! and records every outgoing call in order, so tests can assert both the final
//! state and the sequence of operations. Individual operations can be made to
//! fail to exercise the error paths.

use serenity::all::{ChannelId, GuildId, PermissionOverwrite, UserId};
use serenity::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::{
    error::AppError,
    gateway::TicketGateway,
    model::{
        message::{InteractionReply, OutgoingMessage},
        ticket::{Invocation, TicketChannel},
        transcript::HistoryMessage,
    },
};

pub const BOT_USER_ID: u64 = 900000000000000001;

const FIRST_CREATED_CHANNEL_ID: u64 = 700000000000000001;

/// Gateway operation, recorded in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    CreateChannel,
    SendMessage,
    History,
    DeleteChannel,
    Respond,
    FollowUp,
}

#[derive(Debug, Clone)]
pub struct MockChannel {
    pub name: String,
    pub is_category: bool,
    pub parent: Option<ChannelId>,
    pub overwrites: Vec<PermissionOverwrite>,
    pub history: Vec<HistoryMessage>,
}

#[derive(Default)]
struct MockState {
    channels: BTreeMap<ChannelId, MockChannel>,
    sent: Vec<(ChannelId, OutgoingMessage)>,
    replies: Vec<InteractionReply>,
    follow_ups: Vec<InteractionReply>,
    calls: Vec<Call>,
    next_channel_id: u64,
    icon_url: Option<String>,
    fail_create: bool,
    fail_history: bool,
    fail_respond: bool,
    fail_delete: bool,
    fail_send_to: Option<ChannelId>,
}

pub struct MockGateway {
    state: Mutex<MockState>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                next_channel_id: FIRST_CREATED_CHANNEL_ID,
                ..Default::default()
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    pub fn with_category(self, id: u64, name: &str) -> Self {
        self.state().channels.insert(
            ChannelId::new(id),
            MockChannel {
                name: name.to_string(),
                is_category: true,
                parent: None,
                overwrites: Vec::new(),
                history: Vec::new(),
            },
        );
        self
    }

    pub fn with_text_channel(self, id: u64, name: &str, history: Vec<HistoryMessage>) -> Self {
        self.state().channels.insert(
            ChannelId::new(id),
            MockChannel {
                name: name.to_string(),
                is_category: false,
                parent: None,
                overwrites: Vec::new(),
                history,
            },
        );
        self
    }

    pub fn with_icon_url(self, url: &str) -> Self {
        self.state().icon_url = Some(url.to_string());
        self
    }

    pub fn failing_create(self) -> Self {
        self.state().fail_create = true;
        self
    }

    pub fn failing_history(self) -> Self {
        self.state().fail_history = true;
        self
    }

    pub fn failing_respond(self) -> Self {
        self.state().fail_respond = true;
        self
    }

    pub fn failing_delete(self) -> Self {
        self.state().fail_delete = true;
        self
    }

    pub fn failing_send_to(self, channel_id: u64) -> Self {
        self.state().fail_send_to = Some(ChannelId::new(channel_id));
        self
    }

    pub fn channel(&self, id: ChannelId) -> Option<MockChannel> {
        self.state().channels.get(&id).cloned()
    }

    /// Text channels whose name matches, useful after a ticket was created.
    pub fn find_channel(&self, name: &str) -> Option<(ChannelId, MockChannel)> {
        self.state()
            .channels
            .iter()
            .find(|(_, channel)| !channel.is_category && channel.name == name)
            .map(|(id, channel)| (*id, channel.clone()))
    }

    pub fn sent_to(&self, channel_id: ChannelId) -> Vec<OutgoingMessage> {
        self.state()
            .sent
            .iter()
            .filter(|(id, _)| *id == channel_id)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn sent(&self) -> Vec<(ChannelId, OutgoingMessage)> {
        self.state().sent.clone()
    }

    pub fn replies(&self) -> Vec<InteractionReply> {
        self.state().replies.clone()
    }

    pub fn follow_ups(&self) -> Vec<InteractionReply> {
        self.state().follow_ups.clone()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state().calls.clone()
    }
}

fn rejected(operation: &str) -> AppError {
    AppError::InternalError(format!("{} rejected: Missing Permissions", operation))
}

#[async_trait]
impl TicketGateway for MockGateway {
    fn current_user_id(&self) -> UserId {
        UserId::new(BOT_USER_ID)
    }

    async fn resolve_category(&self, channel_id: ChannelId) -> Option<ChannelId> {
        self.state()
            .channels
            .get(&channel_id)
            .filter(|channel| channel.is_category)
            .map(|_| channel_id)
    }

    async fn resolve_text_channel(&self, channel_id: ChannelId) -> Option<TicketChannel> {
        self.state()
            .channels
            .get(&channel_id)
            .filter(|channel| !channel.is_category)
            .map(|channel| TicketChannel {
                id: channel_id,
                name: channel.name.clone(),
            })
    }

    async fn guild_icon_url(&self, _guild_id: GuildId) -> Option<String> {
        self.state().icon_url.clone()
    }

    async fn create_text_channel(
        &self,
        _guild_id: GuildId,
        name: &str,
        parent: Option<ChannelId>,
        overwrites: Vec<PermissionOverwrite>,
    ) -> Result<TicketChannel, AppError> {
        let mut state = self.state();
        state.calls.push(Call::CreateChannel);
        if state.fail_create {
            return Err(rejected("Channel creation"));
        }

        let id = ChannelId::new(state.next_channel_id);
        state.next_channel_id += 1;
        state.channels.insert(
            id,
            MockChannel {
                name: name.to_string(),
                is_category: false,
                parent,
                overwrites,
                history: Vec::new(),
            },
        );

        Ok(TicketChannel {
            id,
            name: name.to_string(),
        })
    }

    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: OutgoingMessage,
    ) -> Result<(), AppError> {
        let mut state = self.state();
        state.calls.push(Call::SendMessage);
        if state.fail_send_to == Some(channel_id) {
            return Err(rejected("Message send"));
        }
        if !state.channels.contains_key(&channel_id) {
            return Err(AppError::InternalError(format!("Unknown channel {}", channel_id)));
        }

        state.sent.push((channel_id, message));
        Ok(())
    }

    async fn channel_history(&self, channel_id: ChannelId) -> Result<Vec<HistoryMessage>, AppError> {
        let mut state = self.state();
        state.calls.push(Call::History);
        if state.fail_history {
            return Err(rejected("History fetch"));
        }

        state
            .channels
            .get(&channel_id)
            .map(|channel| channel.history.clone())
            .ok_or_else(|| AppError::InternalError(format!("Unknown channel {}", channel_id)))
    }

    async fn delete_channel(&self, channel_id: ChannelId) -> Result<(), AppError> {
        let mut state = self.state();
        state.calls.push(Call::DeleteChannel);
        if state.fail_delete {
            return Err(rejected("Channel deletion"));
        }

        state
            .channels
            .remove(&channel_id)
            .map(|_| ())
            .ok_or_else(|| AppError::InternalError(format!("Unknown channel {}", channel_id)))
    }

    async fn respond(
        &self,
        _invocation: &Invocation,
        reply: InteractionReply,
    ) -> Result<(), AppError> {
        let mut state = self.state();
        state.calls.push(Call::Respond);
        if state.fail_respond {
            return Err(rejected("Interaction response"));
        }

        state.replies.push(reply);
        Ok(())
    }

    async fn follow_up(
        &self,
        _invocation: &Invocation,
        reply: InteractionReply,
    ) -> Result<(), AppError> {
        let mut state = self.state();
        state.calls.push(Call::FollowUp);
        state.follow_ups.push(reply);
        Ok(())
    }
}
