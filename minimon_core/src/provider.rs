//! OS metrics provider: the narrow read-only contract the sampler depends on,
//! plus the sysinfo-backed implementation.

use std::collections::HashSet;
use std::panic::{catch_unwind, AssertUnwindSafe};

use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, Networks, RefreshKind, System};
use tracing::warn;

use crate::error::ProviderError;
use crate::types::{DiskCounters, MemoryStats, NetCounters};

pub trait MetricsProvider {
    /// Opens the CPU accounting window; the first usage read after this is meaningful.
    fn prime_cpu(&mut self);

    /// Global CPU utilization since the previous call, 0..=100.
    fn cpu_percent(&mut self) -> Result<f64, ProviderError>;

    fn memory(&mut self) -> Result<MemoryStats, ProviderError>;

    /// Cumulative disk bytes read/written since boot.
    fn disk_counters(&mut self) -> Result<DiskCounters, ProviderError>;

    /// Cumulative network bytes received/sent since boot.
    fn net_counters(&mut self) -> Result<NetCounters, ProviderError>;
}

/// Provider over persistent sysinfo handles. Keep them alive across ticks so
/// CPU usage is computed against the previous refresh.
pub struct SysinfoProvider {
    sys: System,
    disks: Disks,
    networks: Networks,
}

impl SysinfoProvider {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::nothing().with_ram());
        Self {
            sys: System::new_with_specifics(refresh_kind),
            disks: Disks::new_with_refreshed_list(),
            networks: Networks::new_with_refreshed_list(),
        }
    }
}

impl Default for SysinfoProvider {
    fn default() -> Self {
        Self::new()
    }
}

// sysinfo reads procfs/sysfs and may panic on odd sandboxes; surface that as an error
fn guarded<F: FnOnce()>(what: &'static str, f: F) -> Result<(), ProviderError> {
    catch_unwind(AssertUnwindSafe(f)).map_err(|e| {
        let msg = e
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| e.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".into());
        warn!("sysinfo {what} refresh panicked: {msg}");
        ProviderError::RefreshPanicked(msg)
    })
}

impl MetricsProvider for SysinfoProvider {
    fn prime_cpu(&mut self) {
        let _ = guarded("cpu", || self.sys.refresh_cpu_usage());
    }

    fn cpu_percent(&mut self) -> Result<f64, ProviderError> {
        guarded("cpu", || self.sys.refresh_cpu_usage())?;
        if self.sys.cpus().is_empty() {
            return Err(ProviderError::NotReported("cpu usage"));
        }
        Ok(f64::from(self.sys.global_cpu_usage()).clamp(0.0, 100.0))
    }

    fn memory(&mut self) -> Result<MemoryStats, ProviderError> {
        guarded("memory", || self.sys.refresh_memory())?;
        let total_bytes = self.sys.total_memory();
        if total_bytes == 0 {
            return Err(ProviderError::NotReported("memory"));
        }
        Ok(MemoryStats {
            total_bytes,
            available_bytes: self.sys.available_memory(),
        })
    }

    fn disk_counters(&mut self) -> Result<DiskCounters, ProviderError> {
        guarded("disk", || self.disks.refresh(true))?;
        if self.disks.list().is_empty() {
            return Err(ProviderError::NotReported("disk counters"));
        }
        // The same device can be mounted more than once (bind mounts, overlays).
        let mut seen = HashSet::new();
        let mut out = DiskCounters::default();
        for d in self.disks.list() {
            if !seen.insert(d.name().to_os_string()) {
                continue;
            }
            let usage = d.usage();
            out.read_bytes = out.read_bytes.saturating_add(usage.total_read_bytes);
            out.written_bytes = out.written_bytes.saturating_add(usage.total_written_bytes);
        }
        Ok(out)
    }

    fn net_counters(&mut self) -> Result<NetCounters, ProviderError> {
        guarded("network", || self.networks.refresh(true))?;
        if self.networks.list().is_empty() {
            return Err(ProviderError::NotReported("network counters"));
        }
        Ok(self
            .networks
            .list()
            .iter()
            .fold(NetCounters::default(), |acc, (_, data)| NetCounters {
                received_bytes: acc.received_bytes.saturating_add(data.total_received()),
                sent_bytes: acc.sent_bytes.saturating_add(data.total_transmitted()),
            }))
    }
}
