//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! for testing purposes. These factories create valid Serenity objects by
//! deserializing JSON, simulating what Discord's API would return.
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `message::create_test_message` - Create Serenity Message objects

pub mod message;
pub mod user;

// Re-export commonly used functions for convenience
pub use message::create_test_message;
pub use user::create_test_user;
