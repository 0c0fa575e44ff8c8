//! Application services - command handlers

use std::time::Duration;

pub mod command_service;
pub mod dashboard_service;

pub use command_service::CommandService;
pub use dashboard_service::{DashboardReport, DashboardService};

/// Observation window for CPU utilization
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);
