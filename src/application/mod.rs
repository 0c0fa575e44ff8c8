//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Context: Immutable state handed to every handler
//! - Services: Command handlers and the dashboard aggregator
//! - Errors: Domain-specific errors
//! - Messaging: Message parsing, dispatching, reply formatting
//! - Runner: Polling loops for each transport

pub mod context;
pub mod errors;
pub mod services;
pub mod messaging;
pub mod runner;
