use async_trait::async_trait;
use crate::application::errors::ResolverError;
use crate::domain::entities::PresenceStatus;

/// Looks up a display name for an external user id
#[async_trait]
pub trait ProfileResolver: Send + Sync {
    async fn fetch_username(&self, user_id: &str) -> Result<String, ResolverError>;
}

/// Looks up the current presence of an external user id
#[async_trait]
pub trait PresenceResolver: Send + Sync {
    async fn fetch_presence(&self, user_id: &str) -> Result<PresenceStatus, ResolverError>;
}
