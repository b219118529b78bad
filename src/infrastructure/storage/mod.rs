//! In-memory directory storage

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::application::errors::DirectoryError;
use crate::domain::entities::Member;
use crate::domain::traits::DirectoryStore;

/// Process-local directory store.
///
/// All directories share one lock, so concurrent commands never observe a
/// half-mutated member list. Contents are lost when the process exits.
#[derive(Clone, Default)]
pub struct MemoryStore {
    directories: Arc<RwLock<HashMap<String, Vec<Member>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DirectoryStore for MemoryStore {
    async fn create(&self, name: &str) -> Result<(), DirectoryError> {
        let mut directories = self.directories.write().await;
        if directories.contains_key(name) {
            return Err(DirectoryError::AlreadyExists(name.to_string()));
        }
        directories.insert(name.to_string(), Vec::new());
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<(), DirectoryError> {
        let mut directories = self.directories.write().await;
        directories
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| DirectoryError::DirectoryNotFound(name.to_string()))
    }

    async fn append(&self, name: &str, member: Member) -> bool {
        let mut directories = self.directories.write().await;
        let created = !directories.contains_key(name);
        directories.entry(name.to_string())
            .or_insert_with(Vec::new)
            .push(member);
        created
    }

    async fn members(&self, name: &str) -> Option<Vec<Member>> {
        let directories = self.directories.read().await;
        directories.get(name).cloned()
    }

    async fn remove_by_name(&self, name: &str, username: &str) -> Result<Member, DirectoryError> {
        let mut directories = self.directories.write().await;
        let members = directories
            .get_mut(name)
            .ok_or_else(|| DirectoryError::DirectoryNotFound(name.to_string()))?;

        match members.iter().position(|m| m.display_name == username) {
            Some(index) => Ok(members.remove(index)),
            None => Err(DirectoryError::MemberNotFound {
                directory: name.to_string(),
                username: username.to_string(),
            }),
        }
    }
}
