//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod resolver;
pub mod store;

pub use bot::{Bot, BotInfo};
pub use resolver::{PresenceResolver, ProfileResolver};
pub use store::DirectoryStore;
