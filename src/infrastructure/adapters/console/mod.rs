//! Console adapter for development/testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::application::errors::BotError;
use crate::application::messaging::{CommandDispatcher, MessageParser};
use crate::domain::entities::Sender;
use crate::domain::traits::{Bot, BotInfo};

/// Reads commands from stdin and prints replies to stdout
pub struct ConsoleAdapter {
    info: BotInfo,
    parser: MessageParser,
    dispatcher: Arc<CommandDispatcher>,
}

impl ConsoleAdapter {
    pub fn new(dispatcher: Arc<CommandDispatcher>, prefix: impl Into<String>) -> Self {
        Self {
            info: BotInfo {
                id: "console".to_string(),
                name: "directory-bot".to_string(),
                platform: "console".to_string(),
            },
            parser: MessageParser::new(prefix),
            dispatcher,
        }
    }

    /// Handle one line of input, returning the reply if any
    pub async fn handle_line(&self, line: &str) -> Option<String> {
        let sender = std::env::var("USER").ok().map(|name| Sender::new(name));
        let message = self.parser
            .parse("console", line, sender)
            .with_platform("console");
        self.dispatcher.process(&message).await
    }

    async fn prompt() {
        let mut stdout = tokio::io::stdout();
        let _ = stdout.write_all(b"> ").await;
        let _ = stdout.flush().await;
    }
}

#[async_trait]
impl Bot for ConsoleAdapter {
    async fn start(&self) -> Result<(), BotError> {
        tracing::info!("Starting console bot (dev mode), type /help for commands");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        Self::prompt().await;

        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| BotError::Adapter(format!("stdin: {}", e)))?
        {
            if let Some(reply) = self.handle_line(&line).await {
                self.send_message("console", &reply).await?;
            }
            Self::prompt().await;
        }

        tracing::info!("stdin closed, console bot stopping");
        Ok(())
    }

    async fn send_message(&self, _chat_id: &str, text: &str) -> Result<(), BotError> {
        println!("[BOT] {}", text.trim_end());
        Ok(())
    }

    fn bot_info(&self) -> BotInfo {
        self.info.clone()
    }
}
