//! Domain layer - Core types with no I/O
//! 
//! This layer contains:
//! - Entities: commands, messages, replies, telemetry and workflow snapshots
//! - Traits: Abstractions for infrastructure (Bot, TelemetrySource, CiProvider)

pub mod entities;
pub mod traits;
