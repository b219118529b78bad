//! Command dispatcher - Routes commands to the directory service

use crate::application::services::DirectoryService;
use crate::domain::entities::{Content, DirectoryCommand, Message, COMMANDS};

/// Turns inbound commands into reply text.
///
/// Every outcome, including failures, becomes a single reply; nothing here
/// is fatal to the process.
pub struct CommandDispatcher {
    service: DirectoryService,
}

impl CommandDispatcher {
    pub fn new(service: DirectoryService) -> Self {
        Self { service }
    }

    /// Process a message from a text adapter. Returns `None` for messages
    /// that need no reply.
    pub async fn process(&self, message: &Message) -> Option<String> {
        let Content::Command { name, args } = &message.content else {
            return None;
        };

        tracing::debug!(
            "Message {} from {} in {} on {} at {}: /{} {:?}",
            message.id,
            message.sender_name(),
            message.chat_id,
            message.platform,
            message.timestamp.to_rfc3339(),
            name,
            args
        );

        if name.eq_ignore_ascii_case("help") {
            return Some(help_text());
        }

        match DirectoryCommand::parse(name, args) {
            Ok(command) => Some(self.execute(command).await),
            Err(e) => Some(e.to_string()),
        }
    }

    /// Run a parsed command and return the reply
    pub async fn execute(&self, command: DirectoryCommand) -> String {
        tracing::info!("Handling /{} for directory '{}'", command.name(), command.directory());

        let result = match &command {
            DirectoryCommand::AddUser { directory, profile_link } => {
                self.service.add_member(directory, profile_link).await
            }
            DirectoryCommand::ShowDirectory { directory } => {
                self.service.list_members(directory).await
            }
            DirectoryCommand::ShowOnlineUsers { directory } => {
                self.service.list_online_members(directory).await
            }
            DirectoryCommand::RemoveUser { directory, username } => {
                self.service.remove_member(directory, username).await
            }
            DirectoryCommand::CreateDirectory { directory } => {
                self.service.create(directory).await
            }
            DirectoryCommand::DeleteDirectory { directory } => {
                self.service.delete(directory).await
            }
        };

        result.unwrap_or_else(|e| {
            tracing::debug!("/{} failed: {}", command.name(), e);
            e.to_string()
        })
    }
}

/// Help listing for text adapters
pub fn help_text() -> String {
    let mut help = "Available commands:\n".to_string();
    for cmd in COMMANDS {
        help.push_str(&format!("  {} - {}\n", cmd.usage(), cmd.description));
    }
    help
}
