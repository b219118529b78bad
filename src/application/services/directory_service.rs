use std::sync::Arc;
use futures::future::join_all;
use tokio::sync::Semaphore;

use crate::application::errors::DirectoryError;
use crate::domain::entities::{extract_user_id, Member, PresenceStatus};
use crate::domain::traits::{DirectoryStore, PresenceResolver, ProfileResolver};

/// Directory use cases: every operation returns the reply text on success
/// and a [`DirectoryError`] whose message is the reply text on failure.
pub struct DirectoryService {
    store: Arc<dyn DirectoryStore>,
    profiles: Arc<dyn ProfileResolver>,
    presence: Arc<dyn PresenceResolver>,
    presence_concurrency: usize,
}

impl DirectoryService {
    pub fn new(
        store: Arc<dyn DirectoryStore>,
        profiles: Arc<dyn ProfileResolver>,
        presence: Arc<dyn PresenceResolver>,
    ) -> Self {
        Self {
            store,
            profiles,
            presence,
            presence_concurrency: 1,
        }
    }

    /// Allow up to `n` presence lookups in flight at once
    pub fn with_presence_concurrency(mut self, n: usize) -> Self {
        self.presence_concurrency = n.max(1);
        self
    }

    pub async fn create(&self, directory: &str) -> Result<String, DirectoryError> {
        self.store.create(directory).await?;
        tracing::info!("Created directory '{}'", directory);
        Ok(format!("Directory '{}' created successfully.", directory))
    }

    pub async fn delete(&self, directory: &str) -> Result<String, DirectoryError> {
        self.store.delete(directory).await?;
        tracing::info!("Deleted directory '{}'", directory);
        Ok(format!("Directory '{}' deleted successfully.", directory))
    }

    pub async fn add_member(&self, directory: &str, profile_link: &str) -> Result<String, DirectoryError> {
        let user_id = extract_user_id(profile_link).ok_or(DirectoryError::InvalidLink)?;
        let username = self.resolve_name(&user_id).await.ok_or(DirectoryError::LookupFailed)?;

        let member = Member::new(username.clone(), profile_link, user_id);
        // add_user also creates the directory when it is missing; kept for
        // compatibility with existing usage even though create_directory exists
        if self.store.append(directory, member).await {
            tracing::debug!("Directory '{}' created implicitly by add_user", directory);
        }

        tracing::info!("Added '{}' to directory '{}'", username, directory);
        Ok(format!("User '{}' added to the directory '{}'.", username, directory))
    }

    pub async fn list_members(&self, directory: &str) -> Result<String, DirectoryError> {
        let members = self.non_empty_members(directory).await?;
        Ok(format_listing(&format!("Users in '{}':", directory), &members))
    }

    pub async fn list_online_members(&self, directory: &str) -> Result<String, DirectoryError> {
        let members = self.non_empty_members(directory).await?;

        // join_all keeps results in directory order; the semaphore bounds
        // how many lookups are in flight
        let limiter = Semaphore::new(self.presence_concurrency);
        let limiter = &limiter;
        let user_ids: Vec<String> = members.iter().map(|m| m.user_id.clone()).collect();
        let checks = user_ids.into_iter().map(move |user_id| async move {
            let _permit = limiter.acquire().await.ok();
            self.presence(&user_id).await
        });
        let statuses: Vec<PresenceStatus> = join_all(checks).await;

        let online: Vec<Member> = members
            .into_iter()
            .zip(statuses)
            .filter(|(_, status)| status.is_online())
            .map(|(member, _)| member)
            .collect();

        if online.is_empty() {
            return Err(DirectoryError::NoneOnline(directory.to_string()));
        }

        Ok(format_listing(&format!("Online users in '{}':", directory), &online))
    }

    pub async fn remove_member(&self, directory: &str, username: &str) -> Result<String, DirectoryError> {
        self.store.remove_by_name(directory, username).await?;
        tracing::info!("Removed '{}' from directory '{}'", username, directory);
        Ok(format!("User '{}' removed from the directory '{}'.", username, directory))
    }

    /// Display name for an external id, or `None` when the lookup fails
    pub async fn resolve_name(&self, user_id: &str) -> Option<String> {
        match self.profiles.fetch_username(user_id).await {
            Ok(name) => Some(name),
            Err(e) => {
                tracing::warn!("Error fetching username for {}: {}", user_id, e);
                None
            }
        }
    }

    /// Presence of an external id; failed lookups become `Unknown`
    pub async fn presence(&self, user_id: &str) -> PresenceStatus {
        match self.presence.fetch_presence(user_id).await {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!("Error checking online status for {}: {}", user_id, e);
                PresenceStatus::Unknown
            }
        }
    }

    pub async fn is_online(&self, user_id: &str) -> bool {
        self.presence(user_id).await.is_online()
    }

    async fn non_empty_members(&self, directory: &str) -> Result<Vec<Member>, DirectoryError> {
        match self.store.members(directory).await {
            Some(members) if !members.is_empty() => Ok(members),
            _ => Err(DirectoryError::Empty(directory.to_string())),
        }
    }
}

fn format_listing(header: &str, members: &[Member]) -> String {
    let mut response = format!("{}\n", header);
    for member in members {
        response.push_str(&format!("{}\n", member));
    }
    response
}
