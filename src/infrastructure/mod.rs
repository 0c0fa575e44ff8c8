//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Logging: Tracing subscriber and log line format
//! - Storage: Reading the log file back
//! - Telemetry: Host metrics via sysinfo
//! - GitHub: Workflow runs and dispatch
//! - Process: Stop and restart
//! - Adapters: Platform integrations (Telegram, console)

pub mod config;
pub mod logging;
pub mod storage;
pub mod telemetry;
pub mod github;
pub mod process;
pub mod adapters;
