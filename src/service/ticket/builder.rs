//! Message builders for the ticket lifecycle.
//!
//! Shared by the creation and close operations so every ticket message is
//! formatted the same way.

use chrono::{DateTime, Utc};

use crate::model::{
    category::TicketCategory,
    component::TicketComponent,
    message::{Notice, OutgoingMessage},
    ticket::{TicketChannel, TicketUser},
    transcript::Transcript,
};

pub const CLOSING_NOTICE: &str = "🛠️ **Generating transcript and closing ticket...**";

const INTRO_FOOTER: &str = "Void Market • Fast & Reliable";
const ARCHIVE_TITLE: &str = "🔒 Ticket Archived";
const ARCHIVE_FOOTER: &str = "Void Market Logs";

/// Builds the first message of a new ticket.
///
/// Pings the owner and `@everyone`, explains what to provide for the category
/// and carries the persistent close button.
///
/// # Arguments
/// - `category` - Category the ticket was opened for
/// - `owner` - Member who opened the ticket
/// - `icon_url` - Guild icon shown as thumbnail, if any
pub fn build_intro_message(
    category: TicketCategory,
    owner: &TicketUser,
    icon_url: Option<String>,
) -> OutgoingMessage {
    let mut notice = Notice::new(category.intro_title(), category.intro_description())
        .thumbnail(icon_url)
        .footer(INTRO_FOOTER);

    if let Some((name, value)) = category.requirements() {
        notice = notice.field(name, value, false);
    }

    OutgoingMessage::new()
        .content(format!("{} | @everyone", owner.mention()))
        .notice(notice)
        .component(TicketComponent::CloseButton)
}

/// Builds the log channel message archiving a closed ticket.
pub fn build_archive_message(
    channel: &TicketChannel,
    transcript: &Transcript,
    archived_at: DateTime<Utc>,
) -> OutgoingMessage {
    let notice = Notice::new(
        ARCHIVE_TITLE,
        format!("Ticket `{}` has been closed.", channel.name),
    )
    .footer(ARCHIVE_FOOTER)
    .timestamp(archived_at);

    OutgoingMessage::new()
        .notice(notice)
        .file(transcript.to_attachment())
}
