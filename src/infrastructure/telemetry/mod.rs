//! Host telemetry backed by `sysinfo`

use std::path::{Path, PathBuf};
use std::time::Duration;

use sysinfo::{CpuRefreshKind, RefreshKind, System};

use crate::application::errors::TelemetryError;
use crate::domain::entities::{CpuSnapshot, DiskSnapshot, MemorySnapshot, OsIdentity};
use crate::domain::traits::TelemetrySource;

/// Reads the local host. Every call takes a fresh reading; nothing is cached.
#[derive(Debug, Clone)]
pub struct HostTelemetry {
    mount_point: PathBuf,
}

impl HostTelemetry {
    /// Disk figures are taken for the filesystem mounted at `/`
    pub fn new() -> Self {
        Self::with_mount_point("/")
    }

    pub fn with_mount_point(mount_point: impl Into<PathBuf>) -> Self {
        Self {
            mount_point: mount_point.into(),
        }
    }
}

impl Default for HostTelemetry {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetrySource for HostTelemetry {
    fn cpu(&self, window: Duration) -> CpuSnapshot {
        let mut sys = System::new_with_specifics(
            RefreshKind::nothing().with_cpu(CpuRefreshKind::nothing().with_cpu_usage()),
        );

        // Usage is a delta between two refreshes, so sample across the window
        sys.refresh_cpu_usage();
        std::thread::sleep(window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        sys.refresh_cpu_usage();

        let logical_cores = match sys.cpus().len() {
            0 => std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
            n => n,
        };

        CpuSnapshot {
            usage_percent: sys.global_cpu_usage(),
            logical_cores,
        }
    }

    fn memory(&self) -> MemorySnapshot {
        let mut sys = System::new();
        sys.refresh_memory();
        MemorySnapshot::from_host(sys.total_memory(), sys.used_memory(), sys.available_memory())
    }

    fn disk(&self) -> Result<DiskSnapshot, TelemetryError> {
        read_disk(&self.mount_point)
    }

    fn os(&self) -> OsIdentity {
        OsIdentity {
            name: System::name().unwrap_or_else(|| std::env::consts::OS.to_string()),
            release: System::kernel_version().unwrap_or_else(|| "unknown".to_string()),
        }
    }

    fn runtime_version(&self) -> String {
        format!("rustc {}", env!("VPS_BOT_RUSTC_VERSION"))
    }
}

/// Block counts straight from `statvfs(2)`
#[cfg(unix)]
fn read_disk(mount_point: &Path) -> Result<DiskSnapshot, TelemetryError> {
    use nix::errno::Errno;
    use nix::sys::statvfs::statvfs;

    let stat = statvfs(mount_point).map_err(|e| match e {
        Errno::ENOENT => TelemetryError::MountNotFound(mount_point.display().to_string()),
        e => TelemetryError::Stat {
            path: mount_point.display().to_string(),
            reason: e.to_string(),
        },
    })?;

    let block = stat.fragment_size() as u64;
    let blocks = stat.blocks() as u64;
    let total = blocks * block;
    let used = blocks.saturating_sub(stat.blocks_free() as u64) * block;
    let free = stat.blocks_available() as u64 * block;

    Ok(DiskSnapshot::from_host(total, used, free))
}

#[cfg(not(unix))]
fn read_disk(mount_point: &Path) -> Result<DiskSnapshot, TelemetryError> {
    let disks = sysinfo::Disks::new_with_refreshed_list();
    let disk = disks
        .list()
        .iter()
        .find(|d| d.mount_point() == mount_point)
        .ok_or_else(|| TelemetryError::MountNotFound(mount_point.display().to_string()))?;

    let total = disk.total_space();
    let free = disk.available_space();
    Ok(DiskSnapshot::from_host(total, total.saturating_sub(free), free))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_sample_is_in_range() {
        let cpu = HostTelemetry::new().cpu(Duration::from_millis(200));
        assert!(cpu.logical_cores >= 1);
        assert!(cpu.usage_percent >= 0.0);
        assert!(cpu.usage_percent <= 100.0 + f32::EPSILON);
    }

    #[test]
    fn test_memory_is_consistent() {
        let mem = HostTelemetry::new().memory();
        assert!(mem.total_bytes > 0);
        assert!(mem.available_bytes <= mem.total_bytes);
        assert!((0.0..=100.0).contains(&mem.percent));
    }

    #[test]
    fn test_unknown_mount_point_is_an_error() {
        let telemetry = HostTelemetry::with_mount_point("/definitely/not/a/mount");
        assert!(matches!(telemetry.disk(), Err(TelemetryError::MountNotFound(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_root_disk_reading() {
        let disk = HostTelemetry::new().disk().unwrap();
        assert!(disk.total_bytes > 0);
        assert!(disk.used_bytes + disk.free_bytes <= disk.total_bytes);
        assert_eq!(
            disk.percent,
            crate::domain::entities::telemetry::percent(disk.used_bytes, disk.used_bytes + disk.free_bytes)
        );
    }

    #[test]
    fn test_runtime_version_names_the_compiler() {
        assert!(HostTelemetry::new().runtime_version().starts_with("rustc "));
    }
}
