//! Discord bot that groups Roblox profiles into named directories and
//! reports which members are currently in game.

pub mod domain;
pub mod application;
pub mod infrastructure;

use std::sync::Arc;

use application::errors::BotError;
use application::messaging::CommandDispatcher;
use application::services::DirectoryService;
use infrastructure::config::Config;
use infrastructure::roblox::RobloxClient;
use infrastructure::storage::MemoryStore;

/// Wire the store, the Roblox client and the service into a dispatcher
pub fn build_dispatcher(config: &Config, roblox_cookie: &str) -> Result<Arc<CommandDispatcher>, BotError> {
    let roblox = Arc::new(RobloxClient::new(roblox_cookie, &config.roblox)?);
    let service = DirectoryService::new(Arc::new(MemoryStore::new()), roblox.clone(), roblox)
        .with_presence_concurrency(config.presence.concurrency);
    Ok(Arc::new(CommandDispatcher::new(service)))
}
