//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Storage: in-memory directory store
//! - Roblox: profile and presence API client
//! - Adapters: Platform integrations (Discord, console)

pub mod config;
pub mod storage;
pub mod roblox;
pub mod adapters;
