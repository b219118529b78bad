//! Roblox profile and presence API client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::errors::{BotError, ResolverError};
use crate::domain::entities::PresenceStatus;
use crate::domain::traits::{PresenceResolver, ProfileResolver};
use crate::infrastructure::config::RobloxConfig;

/// Users API base URL
pub const USERS_API_BASE: &str = "https://users.roblox.com";

/// Presence API base URL
pub const PRESENCE_API_BASE: &str = "https://presence.roblox.com";

/// Authenticated client for the Roblox web APIs
pub struct RobloxClient {
    client: Client,
    cookie: String,
    users_base: String,
    presence_base: String,
}

impl RobloxClient {
    pub fn new(cookie: impl Into<String>, config: &RobloxConfig) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("directory-bot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BotError::Network(e.to_string()))?;

        Ok(Self {
            client,
            cookie: cookie.into(),
            users_base: config.users_api.trim_end_matches('/').to_string(),
            presence_base: config.presence_api.trim_end_matches('/').to_string(),
        })
    }

    /// Value of the `Cookie` header sent with every request
    fn auth_cookie(&self) -> String {
        format!(".ROBLOSECURITY={}", self.cookie)
    }

    fn user_url(&self, user_id: &str) -> String {
        format!("{}/v1/users/{}", self.users_base, user_id)
    }

    fn presence_url(&self) -> String {
        format!("{}/v1/presence/users", self.presence_base)
    }
}

#[derive(Deserialize, Debug)]
struct UserResponse {
    name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PresenceRequest {
    user_ids: Vec<u64>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PresenceResponse {
    #[serde(default)]
    user_presences: Vec<UserPresence>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct UserPresence {
    user_presence_type: Option<i64>,
}

/// Extract the display name from a users API response body
fn parse_username(body: &str) -> Result<String, ResolverError> {
    let data: UserResponse = serde_json::from_str(body)
        .map_err(|e| ResolverError::Parse(e.to_string()))?;

    data.name
        .filter(|n| !n.is_empty())
        .ok_or(ResolverError::MissingField("name"))
}

/// Interpret a presence API response body for a single-user batch
fn parse_presence(body: &str) -> Result<PresenceStatus, ResolverError> {
    let data: PresenceResponse = serde_json::from_str(body)
        .map_err(|e| ResolverError::Parse(e.to_string()))?;

    Ok(data.user_presences
        .first()
        .and_then(|p| p.user_presence_type)
        .map(PresenceStatus::from_code)
        .unwrap_or(PresenceStatus::Offline))
}

#[async_trait]
impl ProfileResolver for RobloxClient {
    async fn fetch_username(&self, user_id: &str) -> Result<String, ResolverError> {
        let response = self.client
            .get(self.user_url(user_id))
            .header("Cookie", self.auth_cookie())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ResolverError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        parse_username(&body)
    }
}

#[async_trait]
impl PresenceResolver for RobloxClient {
    async fn fetch_presence(&self, user_id: &str) -> Result<PresenceStatus, ResolverError> {
        // The API expects numeric ids
        let numeric_id = user_id
            .parse::<u64>()
            .map_err(|e| ResolverError::Parse(format!("user id '{}': {}", user_id, e)))?;

        let response = self.client
            .post(self.presence_url())
            .header("Cookie", self.auth_cookie())
            .json(&PresenceRequest { user_ids: vec![numeric_id] })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ResolverError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        parse_presence(&body)
    }
}
