//! Remote-control bot reporting host telemetry and GitHub Actions status

pub mod domain;
pub mod application;
pub mod infrastructure;

pub use application::context::AppContext;
pub use application::errors::BotError;
pub use application::messaging::MessageDispatcher;
pub use infrastructure::config::Config;
