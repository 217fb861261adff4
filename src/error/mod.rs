//! Error types and user-facing failure messages.
//!
//! `AppError` is the top-level error type returned by every service and gateway
//! operation. Interaction handlers never let an error leave the interaction
//! unanswered: failures are turned into a short message through
//! [`AppError::user_message`] and reported back to the invoking user.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Serenity errors are
/// boxed through a manual `From` impl.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    ///
    /// Fatal: the process exits before connecting to Discord.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Covers rejected channel creation (missing
    /// permissions, channel quota), failed sends and failed deletes.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// I/O error, raised when the keep-alive listener cannot bind.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// The interaction cannot be handled as submitted.
    ///
    /// Used for interactions outside a guild, unknown component ids and
    /// unknown ticket categories.
    ///
    /// # Fields
    /// - Message describing what was invalid about the interaction
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with custom message.
    ///
    /// # Fields
    /// - Detailed error message for logging
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Text shown to a Discord user when handling their interaction failed.
    ///
    /// Request errors are shown verbatim. Discord rejections include the
    /// platform's reason so staff can fix permissions. Anything else gets a
    /// generic message; the details only go to the log.
    pub fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) => format!("❌ {}", msg),
            Self::DiscordErr(err) => format!("❌ Discord rejected the request: {}", err),
            _ => "❌ Something went wrong while handling your request.".to_string(),
        }
    }
}
