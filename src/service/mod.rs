//! Ticket lifecycle services.
//!
//! Services hold a reference to a [`TicketGateway`](crate::gateway::TicketGateway)
//! and implement one step of the ticket lifecycle each: posting the menu,
//! opening a ticket and closing it. The permission policy and the transcript
//! builder are the leaves they share.

pub mod menu;
pub mod permission;
pub mod ticket;
pub mod transcript;
