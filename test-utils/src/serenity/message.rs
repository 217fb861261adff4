//! Test factory for creating Serenity Message objects.

use chrono::{DateTime, SecondsFormat, Utc};
use serenity::all::{Message, User};

use super::user::user_json;

/// Creates a test Serenity Message sent by `author`.
///
/// Creates a plain guild text message with no attachments, embeds or mentions.
/// Pass an empty `content` to simulate an attachment-only message as it appears
/// to the bot.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was sent in
/// - `author` - User who sent the message
/// - `content` - Text content
/// - `sent_at` - Creation timestamp
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author: &User,
    content: &str,
    sent_at: DateTime<Utc>,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": user_json(author.id.get(), &author.name),
        "content": content,
        "timestamp": sent_at.to_rfc3339_opts(SecondsFormat::Micros, false),
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "type": 0,
        "flags": 0,
        "components": [],
        "sticker_items": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
