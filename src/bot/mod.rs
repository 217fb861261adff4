//! Discord bot session.
//!
//! This module owns the serenity client and routes gateway events to the ticket
//! services. The persistent component registry is built before the client
//! connects, so select menus and close buttons posted by earlier runs of the
//! bot keep working as soon as it is online.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Keep guilds in cache (used for guild icons)
//! - `GUILD_MESSAGES` - Receive guild message events
//! - `MESSAGE_CONTENT` - Read message content when building transcripts (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application. Without it every
//! transcript line shows the attachment placeholder.

pub mod command;
pub mod handler;
pub mod registry;
pub mod start;
pub mod state;
