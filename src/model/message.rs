use chrono::{DateTime, Utc};

use crate::config::EMBED_COLOR;
use crate::model::component::TicketComponent;

/// Embed content posted by the bot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub thumbnail: Option<String>,
    pub fields: Vec<NoticeField>,
    pub footer: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NoticeField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl Notice {
    /// Creates a notice in the brand colour.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            color: EMBED_COLOR,
            ..Default::default()
        }
    }

    pub fn thumbnail(mut self, url: Option<String>) -> Self {
        self.thumbnail = url;
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(NoticeField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// In-memory file sent as a message attachment.
#[derive(Debug, Clone, PartialEq)]
pub struct FileAttachment {
    pub filename: String,
    pub data: Vec<u8>,
}

/// A channel message the bot sends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutgoingMessage {
    pub content: Option<String>,
    pub notice: Option<Notice>,
    pub file: Option<FileAttachment>,
    pub components: Vec<TicketComponent>,
}

impl OutgoingMessage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }

    pub fn file(mut self, file: FileAttachment) -> Self {
        self.file = Some(file);
        self
    }

    pub fn component(mut self, component: TicketComponent) -> Self {
        self.components.push(component);
        self
    }
}

/// Text response to an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionReply {
    pub content: String,
    /// Only the invoking user can see ephemeral replies
    pub ephemeral: bool,
}

impl InteractionReply {
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
        }
    }

    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
        }
    }
}
