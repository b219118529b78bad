use async_trait::async_trait;
use crate::application::errors::DirectoryError;
use crate::domain::entities::Member;

/// Directory store - named, ordered member lists
///
/// Implementations must make each call atomic with respect to the others.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// Insert an empty directory
    async fn create(&self, name: &str) -> Result<(), DirectoryError>;

    /// Remove a directory and all of its members
    async fn delete(&self, name: &str) -> Result<(), DirectoryError>;

    /// Append a member, creating the directory if needed.
    /// Returns `true` when the directory did not exist before.
    async fn append(&self, name: &str, member: Member) -> bool;

    /// Snapshot of a directory's members in insertion order
    async fn members(&self, name: &str) -> Option<Vec<Member>>;

    /// Remove the first member whose display name equals `username`
    async fn remove_by_name(&self, name: &str, username: &str) -> Result<Member, DirectoryError>;
}
