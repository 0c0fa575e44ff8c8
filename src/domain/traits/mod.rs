//! Domain traits - Abstractions for infrastructure implementations

pub mod bot;
pub mod telemetry;
pub mod ci;

pub use bot::{Bot, BotInfo};
pub use telemetry::TelemetrySource;
pub use ci::CiProvider;
