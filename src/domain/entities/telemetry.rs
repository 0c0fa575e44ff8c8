//! Host telemetry snapshots

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Convert a byte count to gibibytes rounded to two decimals
pub fn gib(bytes: u64) -> f64 {
    (bytes as f64 / BYTES_PER_GIB * 100.0).round() / 100.0
}

/// Percentage of `part` in `whole`, rounded to one decimal
pub fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 1000.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuSnapshot {
    pub usage_percent: f32,
    pub logical_cores: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemorySnapshot {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub available_bytes: u64,
    pub percent: f64,
}

impl MemorySnapshot {
    pub fn from_host(total_bytes: u64, used_bytes: u64, available_bytes: u64) -> Self {
        Self {
            total_bytes,
            used_bytes,
            available_bytes,
            percent: percent(total_bytes.saturating_sub(available_bytes), total_bytes),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskSnapshot {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub percent: f64,
}

impl DiskSnapshot {
    /// `free_bytes` is what unprivileged users may still write. Blocks
    /// reserved for root count as neither used nor free, so the percentage
    /// is taken over `used + free` rather than `total`.
    pub fn from_host(total_bytes: u64, used_bytes: u64, free_bytes: u64) -> Self {
        Self {
            total_bytes,
            used_bytes,
            free_bytes,
            percent: percent(used_bytes, used_bytes.saturating_add(free_bytes)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsIdentity {
    pub name: String,
    pub release: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gib_rounds_to_two_decimals() {
        assert_eq!(gib(0), 0.0);
        assert_eq!(gib(1024 * 1024 * 1024), 1.0);
        // 16_666_666_666 / 1024^3 = 15.5220...
        assert_eq!(gib(16_666_666_666), 15.52);
        assert_eq!(gib(3 * 1024 * 1024 * 1024 / 2), 1.5);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(1, 4), 25.0);
        assert_eq!(percent(1, 3), 33.3);
        assert_eq!(percent(5, 0), 0.0);
    }

    #[test]
    fn test_memory_percent_counts_unavailable_memory() {
        let gib_bytes = 1024 * 1024 * 1024;
        let mem = MemorySnapshot::from_host(8 * gib_bytes, 3 * gib_bytes, 6 * gib_bytes);
        assert_eq!(mem.percent, 25.0);
        assert_eq!(mem.used_bytes, 3 * gib_bytes);
    }

    #[test]
    fn test_disk_without_reserved_blocks() {
        let disk = DiskSnapshot::from_host(100, 60, 40);
        assert_eq!(disk.used_bytes, 60);
        assert_eq!(disk.free_bytes, 40);
        assert_eq!(disk.percent, 60.0);
    }

    #[test]
    fn test_disk_percent_excludes_reserved_blocks() {
        // 100 blocks, 20 free of which 5 are reserved for root
        let disk = DiskSnapshot::from_host(100, 80, 15);
        assert_eq!(disk.percent, 84.2);
        assert_eq!(disk.total_bytes, 100);
    }

    #[test]
    fn test_empty_disk_is_zero_percent() {
        assert_eq!(DiskSnapshot::from_host(0, 0, 0).percent, 0.0);
    }
}
