//! Application layer errors

use thiserror::Error;

/// General bot errors
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Adapter error: {0}")]
    Adapter(String),
}

/// Command parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: /{0}")]
    NotFound(String),

    #[error("Usage: {0}")]
    InvalidArgs(String),
}

/// Directory operation failures.
///
/// The `Display` output of each variant is the reply sent back to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Invalid profile link. Please provide a valid Roblox profile link.")]
    InvalidLink,

    #[error("Unable to fetch username. Please try again.")]
    LookupFailed,

    #[error("Directory '{0}' already exists.")]
    AlreadyExists(String),

    #[error("Directory '{0}' does not exist.")]
    DirectoryNotFound(String),

    #[error("No users found in the directory '{0}'.")]
    Empty(String),

    #[error("No users are currently online in the directory '{0}'.")]
    NoneOnline(String),

    #[error("User '{username}' not found in the directory '{directory}'.")]
    MemberNotFound { directory: String, username: String },
}

/// External profile/presence service errors
#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),
}

impl From<reqwest::Error> for ResolverError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ResolverError::Parse(e.to_string())
        } else {
            ResolverError::Network(e.to_string())
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
