use std::sync::Arc;

use crate::application::context::AppContext;
use crate::application::errors::{BotError, TelemetryError};
use crate::application::services::CPU_SAMPLE_WINDOW;
use crate::domain::entities::{CiSnapshot, CpuSnapshot, DiskSnapshot, MemorySnapshot, OsIdentity};
use crate::domain::traits::TelemetrySource;

/// Everything shown on the `/dashboard` panel
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    pub uptime_secs: u64,
    pub cpu: CpuSnapshot,
    pub memory: MemorySnapshot,
    pub disk: DiskSnapshot,
    pub os: OsIdentity,
    pub runtime: String,
    pub ci: CiSnapshot,
}

struct HostReading {
    cpu: CpuSnapshot,
    memory: MemorySnapshot,
    disk: DiskSnapshot,
    os: OsIdentity,
    runtime: String,
}

fn read_host(telemetry: &dyn TelemetrySource) -> Result<HostReading, TelemetryError> {
    Ok(HostReading {
        cpu: telemetry.cpu(CPU_SAMPLE_WINDOW),
        memory: telemetry.memory(),
        disk: telemetry.disk()?,
        os: telemetry.os(),
        runtime: telemetry.runtime_version(),
    })
}

/// Builds the dashboard. Host readings must succeed; CI status may not.
pub struct DashboardService {
    ctx: Arc<AppContext>,
}

impl DashboardService {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self { ctx }
    }

    pub async fn collect(&self) -> Result<DashboardReport, BotError> {
        // The CPU window and the CI request overlap
        let (host, ci) = tokio::join!(self.ctx.read_host(read_host), self.ci_snapshot());
        let host = host??;

        Ok(DashboardReport {
            uptime_secs: self.ctx.uptime().as_secs(),
            cpu: host.cpu,
            memory: host.memory,
            disk: host.disk,
            os: host.os,
            runtime: host.runtime,
            ci,
        })
    }

    /// Latest run, or `Degraded` on any CI failure
    pub async fn ci_snapshot(&self) -> CiSnapshot {
        match self.ctx.ci().latest_run().await {
            Ok(run) => CiSnapshot::Available(run),
            Err(e) => {
                tracing::warn!("CI status unavailable for dashboard: {}", e);
                CiSnapshot::Degraded
            }
        }
    }
}
