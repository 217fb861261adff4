//! Ticket Desk Test Utils
//!
//! Provides shared testing utilities for the ticket bot. The bot never touches a
//! database, so the only fixtures it needs are Serenity API objects, built the
//! way Discord would send them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_user};
//!
//! #[test]
//! fn converts_message() {
//!     let author = create_test_user(300000000000000001, "bob");
//!     let message = create_test_message(1, 2, &author, "hello", chrono::Utc::now());
//!     // Convert and assert...
//! }
//! ```

pub mod serenity;
