//! Domain layer - Core business logic with no external dependencies
//! 
//! This layer contains:
//! - Entities: Core business objects (Member, Message, DirectoryCommand)
//! - Traits: Abstractions for infrastructure (Bot, DirectoryStore, resolvers)
//! - Rules: profile link parsing, presence interpretation

pub mod entities;
pub mod traits;
