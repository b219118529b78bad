//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: directory operations over the store and resolvers
//! - Errors: Domain-specific errors
//! - Messaging: Message parsing and dispatching

pub mod errors;
pub mod services;
pub mod messaging;
