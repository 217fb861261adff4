use serenity::all::ChannelId;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_KEEP_ALIVE_PORT: u16 = 8080;

/// Brand colour used on every embed the bot posts.
pub const EMBED_COLOR: u32 = 0x7110ff;

pub struct Config {
    pub discord_token: String,

    /// Channel category new tickets are created under.
    pub ticket_category_id: Option<ChannelId>,
    /// Text channel transcripts are archived to.
    pub log_channel_id: Option<ChannelId>,

    pub keep_alive_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `DISCORD_TOKEN` is required. The channel ids are optional, but a value
    /// that is present and not a valid id is rejected rather than ignored.
    ///
    /// # Arguments
    /// - `var` - Returns the value of the named variable, if set
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(AppError::ConfigErr)` - Token missing or a value failed to parse
    pub fn from_vars<F>(var: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = var("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;

        let keep_alive_port = match var("KEEP_ALIVE_PORT") {
            Some(value) => {
                let parsed = value.trim().parse::<u16>();
                parsed.map_err(|_| ConfigError::InvalidEnvVar {
                    name: "KEEP_ALIVE_PORT".to_string(),
                    value,
                })?
            }
            None => DEFAULT_KEEP_ALIVE_PORT,
        };

        Ok(Self {
            discord_token,
            ticket_category_id: parse_channel_id("TICKET_CATEGORY_ID", var("TICKET_CATEGORY_ID"))?,
            log_channel_id: parse_channel_id("LOG_CHANNEL_ID", var("LOG_CHANNEL_ID"))?,
            keep_alive_port,
        })
    }
}

fn parse_channel_id(name: &str, value: Option<String>) -> Result<Option<ChannelId>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let parsed = value.trim().parse::<u64>();
    match parsed {
        Ok(id) if id != 0 => Ok(Some(ChannelId::new(id))),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
