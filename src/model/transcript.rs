//! Plain-text ticket transcripts.
//!
//! A transcript is rendered once when a ticket is closed, attached to the archive
//! message as `log-{channel}.txt` and dropped. The layout is:
//!
//! ```text
//! --- VOID MARKET TRANSCRIPT: support-bob ---
//! Closed by: staff (200000000000000001)
//! Date: 2025/01/31 18:04:05
//! ----------------------------------------
//!
//! [18:01:00] bob: my order never arrived
//! [18:02:30] bob: [File/Image]
//! ```

use chrono::{DateTime, Utc};

use crate::model::{message::FileAttachment, ticket::TicketUser};

/// Rendered in place of the content of attachment-only messages.
pub const EMPTY_CONTENT_PLACEHOLDER: &str = "[File/Image]";

const HEADER_RULE_WIDTH: usize = 40;

/// A message read from a ticket channel's history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryMessage {
    pub timestamp: DateTime<Utc>,
    pub author: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub timestamp: DateTime<Utc>,
    pub author: String,
    pub content: String,
}

impl From<&HistoryMessage> for TranscriptLine {
    fn from(message: &HistoryMessage) -> Self {
        let content = if message.content.is_empty() {
            EMPTY_CONTENT_PLACEHOLDER.to_string()
        } else {
            message.content.clone()
        };

        Self {
            timestamp: message.timestamp,
            author: message.author.clone(),
            content,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Transcript {
    pub channel_name: String,
    pub closed_by: TicketUser,
    pub closed_at: DateTime<Utc>,
    pub lines: Vec<TranscriptLine>,
}

impl Transcript {
    /// Builds a transcript from history already ordered oldest-first.
    pub fn new(
        channel_name: impl Into<String>,
        closed_by: TicketUser,
        closed_at: DateTime<Utc>,
        history: &[HistoryMessage],
    ) -> Self {
        Self {
            channel_name: channel_name.into(),
            closed_by,
            closed_at,
            lines: history.iter().map(TranscriptLine::from).collect(),
        }
    }

    pub fn header_lines(&self) -> [String; 4] {
        [
            format!("--- VOID MARKET TRANSCRIPT: {} ---", self.channel_name),
            format!("Closed by: {} ({})", self.closed_by.tag, self.closed_by.id),
            format!("Date: {}", self.closed_at.format("%Y/%m/%d %H:%M:%S")),
            "-".repeat(HEADER_RULE_WIDTH),
        ]
    }

    /// Renders the header, a blank separator line and one line per message.
    pub fn render(&self) -> String {
        let mut text = String::new();

        for line in self.header_lines() {
            text.push_str(&line);
            text.push('\n');
        }
        text.push('\n');

        for line in &self.lines {
            text.push_str(&format!(
                "[{}] {}: {}\n",
                line.timestamp.format("%H:%M:%S"),
                line.author,
                line.content
            ));
        }

        text
    }

    pub fn filename(&self) -> String {
        format!("log-{}.txt", self.channel_name)
    }

    pub fn to_attachment(&self) -> FileAttachment {
        FileAttachment {
            filename: self.filename(),
            data: self.render().into_bytes(),
        }
    }
}
