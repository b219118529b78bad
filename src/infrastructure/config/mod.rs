//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;
use crate::infrastructure::roblox::{PRESENCE_API_BASE, USERS_API_BASE};

/// Environment variable holding the Discord bot token
pub const TOKEN_VAR: &str = "TOKEN_BOT";

/// Environment variable holding the Roblox session cookie
pub const COOKIE_VAR: &str = "ROBLOSECURITY_TOKEN";

/// Bot configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub roblox: RobloxConfig,
    pub presence: PresenceConfig,
    pub adapters: AdaptersConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RobloxConfig {
    pub users_api: String,
    pub presence_api: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PresenceConfig {
    /// Presence lookups in flight at once; 1 checks members one by one
    pub concurrency: usize,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AdaptersConfig {
    pub discord: DiscordConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DiscordConfig {
    /// Also register commands in this guild for instant availability
    pub guild_id: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: "directory-bot".to_string(),
            prefix: "!".to_string(),
        }
    }
}

impl Default for RobloxConfig {
    fn default() -> Self {
        Self {
            users_api: USERS_API_BASE.to_string(),
            presence_api: PRESENCE_API_BASE.to_string(),
            timeout_seconds: 10,
        }
    }
}

impl Default for PresenceConfig {
    fn default() -> Self {
        Self { concurrency: 4 }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_env() -> Self {
        let mut config = Config::default();

        if let Ok(prefix) = std::env::var("BOT_PREFIX") {
            config.bot.prefix = prefix;
        }

        if let Some(concurrency) = std::env::var("PRESENCE_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n > 0)
        {
            config.presence.concurrency = concurrency;
        }

        if let Some(guild_id) = std::env::var("DISCORD_GUILD_ID")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.adapters.discord.guild_id = Some(guild_id);
        }

        config
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.presence.concurrency == 0 {
            return Err(ConfigError::InvalidValue("presence.concurrency must be at least 1".to_string()));
        }
        if self.roblox.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue("roblox.timeout-seconds must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Secrets supplied through the process environment
#[derive(Clone)]
pub struct Secrets {
    pub bot_token: String,
    pub roblox_cookie: String,
}

impl Secrets {
    /// Load both secrets; either one missing is a startup failure
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            bot_token: required(&lookup, TOKEN_VAR)?,
            roblox_cookie: required(&lookup, COOKIE_VAR)?,
        })
    }
}

/// Load only the Roblox cookie (console mode has no bot token)
pub fn roblox_cookie_from_env() -> Result<String, ConfigError> {
    required(&|key: &str| std::env::var(key).ok(), COOKIE_VAR)
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingVar(key))
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets")
            .field("bot_token", &"<redacted>")
            .field("roblox_cookie", &"<redacted>")
            .finish()
    }
}
