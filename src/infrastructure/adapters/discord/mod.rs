//! Discord adapter using poise slash commands

use async_trait::async_trait;
use poise::serenity_prelude as serenity;
use std::sync::Arc;

use crate::application::errors::BotError;
use crate::application::messaging::CommandDispatcher;
use crate::domain::entities::DirectoryCommand;
use crate::domain::traits::{Bot, BotInfo};

/// Discord rejects messages longer than this
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// poise data
pub struct Data {
    pub dispatcher: Arc<CommandDispatcher>,
}

/// poise error type
pub type DiscordError = serenity::Error;

type Context<'a> = poise::Context<'a, Data, DiscordError>;

/// Discord bot adapter
pub struct DiscordAdapter {
    token: String,
    guild_id: Option<u64>,
    dispatcher: Arc<CommandDispatcher>,
    info: BotInfo,
}

impl DiscordAdapter {
    pub fn new(token: impl Into<String>, dispatcher: Arc<CommandDispatcher>) -> Self {
        Self {
            token: token.into(),
            guild_id: None,
            dispatcher,
            info: BotInfo {
                id: "unknown".to_string(),
                name: "directory-bot".to_string(),
                platform: "discord".to_string(),
            },
        }
    }

    /// Register commands in this guild as well as globally
    pub fn with_guild(mut self, guild_id: Option<u64>) -> Self {
        self.guild_id = guild_id;
        self
    }
}

/// Run a command and send its reply, split to fit Discord's length limit
async fn respond(ctx: Context<'_>, command: DirectoryCommand) -> Result<(), DiscordError> {
    // Resolver calls can outlive the 3s interaction window
    ctx.defer().await?;

    tracing::info!(
        "/{} from {} in channel {}",
        command.name(),
        ctx.author().name,
        ctx.channel_id()
    );

    let reply = ctx.data().dispatcher.execute(command).await;
    for chunk in split_message(&reply, MAX_MESSAGE_LENGTH) {
        ctx.say(chunk).await?;
    }
    Ok(())
}

/// Add a user to a specific directory using their profile link.
#[poise::command(slash_command)]
async fn add_user(
    ctx: Context<'_>,
    #[description = "Directory to add the user to"] directory_name: String,
    #[description = "Roblox profile link"] profile_link: String,
) -> Result<(), DiscordError> {
    respond(ctx, DirectoryCommand::AddUser { directory: directory_name, profile_link }).await
}

/// Show all users in a specific directory.
#[poise::command(slash_command)]
async fn show_directory(
    ctx: Context<'_>,
    #[description = "Directory to list"] directory_name: String,
) -> Result<(), DiscordError> {
    respond(ctx, DirectoryCommand::ShowDirectory { directory: directory_name }).await
}

/// Show all online users in a directory.
#[poise::command(slash_command)]
async fn show_online_users(
    ctx: Context<'_>,
    #[description = "Directory to check"] directory_name: String,
) -> Result<(), DiscordError> {
    respond(ctx, DirectoryCommand::ShowOnlineUsers { directory: directory_name }).await
}

/// Remove a user from a specific directory.
#[poise::command(slash_command)]
async fn remove_user(
    ctx: Context<'_>,
    #[description = "Directory to remove the user from"] directory_name: String,
    #[description = "Roblox username"] username: String,
) -> Result<(), DiscordError> {
    respond(ctx, DirectoryCommand::RemoveUser { directory: directory_name, username }).await
}

/// Create a new directory.
#[poise::command(slash_command)]
async fn create_directory(
    ctx: Context<'_>,
    #[description = "Name of the new directory"] directory_name: String,
) -> Result<(), DiscordError> {
    respond(ctx, DirectoryCommand::CreateDirectory { directory: directory_name }).await
}

/// Delete a directory.
#[poise::command(slash_command)]
async fn delete_directory(
    ctx: Context<'_>,
    #[description = "Directory to delete"] directory_name: String,
) -> Result<(), DiscordError> {
    respond(ctx, DirectoryCommand::DeleteDirectory { directory: directory_name }).await
}

fn commands() -> Vec<poise::Command<Data, DiscordError>> {
    vec![
        add_user(),
        show_directory(),
        show_online_users(),
        remove_user(),
        create_directory(),
        delete_directory(),
    ]
}

/// Split text into chunks of at most `max` bytes, preferring line breaks
pub fn split_message(text: &str, max: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in text.split_inclusive('\n') {
        if current.len() + line.len() > max && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }

        if line.len() <= max {
            current.push_str(line);
            continue;
        }

        // A single line longer than the limit: cut on char boundaries
        for ch in line.chars() {
            if current.len() + ch.len_utf8() > max {
                chunks.push(std::mem::take(&mut current));
            }
            current.push(ch);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[async_trait]
impl Bot for DiscordAdapter {
    async fn start(&self) -> Result<(), BotError> {
        let dispatcher = self.dispatcher.clone();
        let guild_id = self.guild_id;

        let framework = poise::Framework::builder()
            .options(poise::FrameworkOptions {
                commands: commands(),
                on_error: |error| {
                    Box::pin(async move {
                        if let Err(e) = poise::builtins::on_error(error).await {
                            tracing::error!("Error while handling command error: {}", e);
                        }
                    })
                },
                ..Default::default()
            })
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    tracing::info!("Logged in as {}", ready.user.name);

                    // Runs once, on the first ready event
                    match poise::builtins::register_globally(ctx, &framework.options().commands).await {
                        Ok(_) => tracing::info!("Slash commands synced."),
                        Err(e) => tracing::error!("Failed to register slash commands: {}", e),
                    }

                    if let Some(guild_id) = guild_id {
                        let gid = serenity::GuildId::new(guild_id);
                        match poise::builtins::register_in_guild(ctx, &framework.options().commands, gid).await {
                            Ok(_) => tracing::info!("Slash commands synced in guild {}", guild_id),
                            Err(e) => tracing::error!("Failed to register commands in guild {}: {}", guild_id, e),
                        }
                    }

                    Ok(Data { dispatcher })
                })
            })
            .build();

        let intents = serenity::GatewayIntents::non_privileged();
        let mut client = serenity::ClientBuilder::new(&self.token, intents)
            .framework(framework)
            .await
            .map_err(|e| BotError::Adapter(format!("discord client error: {}", e)))?;

        tracing::info!("Starting Discord bot");
        client
            .start()
            .await
            .map_err(|e| BotError::Network(format!("discord gateway error: {}", e)))
    }

    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), BotError> {
        let channel_id = chat_id
            .parse::<u64>()
            .map_err(|e| BotError::Adapter(format!("invalid discord channel id {}: {}", chat_id, e)))?;
        let http = serenity::Http::new(&self.token);

        for chunk in split_message(text, MAX_MESSAGE_LENGTH) {
            serenity::ChannelId::new(channel_id)
                .say(&http, chunk)
                .await
                .map_err(|e| BotError::Network(e.to_string()))?;
        }
        Ok(())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_is_one_chunk() {
        assert_eq!(split_message("hello\n", 2000), vec!["hello\n".to_string()]);
        assert!(split_message("", 2000).is_empty());
    }

    #[test]
    fn test_split_prefers_line_breaks() {
        let text = "aaaa\nbbbb\ncccc\n";
        assert_eq!(split_message(text, 10), vec!["aaaa\nbbbb\n", "cccc\n"]);
    }

    #[test]
    fn test_split_long_line_on_char_boundaries() {
        let text = "ééééé";
        let chunks = split_message(text, 4);
        assert_eq!(chunks, vec!["éé", "éé", "é"]);
        assert!(chunks.iter().all(|c| c.len() <= 4));
    }

    #[test]
    fn test_registers_all_commands() {
        let names: Vec<String> = commands().into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "add_user",
                "show_directory",
                "show_online_users",
                "remove_user",
                "create_directory",
                "delete_directory",
            ]
        );
    }
}
