use std::time::Duration;
use crate::application::errors::TelemetryError;
use crate::domain::entities::{CpuSnapshot, DiskSnapshot, MemorySnapshot, OsIdentity};

/// Read-only view of the host the bot runs on.
///
/// Calls are synchronous. `cpu` blocks for the whole sampling window, so
/// async callers run it on the blocking pool.
pub trait TelemetrySource: Send + Sync {
    fn cpu(&self, window: Duration) -> CpuSnapshot;

    fn memory(&self) -> MemorySnapshot;

    /// Usage of the filesystem the source was configured with
    fn disk(&self) -> Result<DiskSnapshot, TelemetryError>;

    fn os(&self) -> OsIdentity;

    /// Version of the toolchain that built this binary
    fn runtime_version(&self) -> String;
}
