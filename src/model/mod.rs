//! Domain models shared by the services and the Discord gateway.
//!
//! These types describe tickets, the messages the bot posts and the transcripts it
//! archives without depending on serenity's builders. The gateway converts them to
//! Discord payloads, which keeps the ticket services testable against an
//! in-memory gateway.

pub mod category;
pub mod component;
pub mod message;
pub mod ticket;
pub mod transcript;
