//! Value objects handed from the core to the presentation layer.
//! Keep this module minimal and stable — the JSON output mirrors it.

use serde::Serialize;
use std::fmt;
use std::time::Instant;

use crate::error::SampleIssue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Resource {
    #[serde(rename = "CPU")]
    Cpu,
    #[serde(rename = "RAM")]
    Ram,
    Disk,
    Network,
}

impl Resource {
    /// Display order used by the status line.
    pub const ALL: [Resource; 4] = [Resource::Cpu, Resource::Ram, Resource::Disk, Resource::Network];

    pub fn label(self) -> &'static str {
        match self {
            Resource::Cpu => "CPU",
            Resource::Ram => "RAM",
            Resource::Disk => "Disk",
            Resource::Network => "Network",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Individual cumulative counters, used to tag rollbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Counter {
    DiskRead,
    DiskWrite,
    NetReceived,
    NetSent,
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Counter::DiskRead => "disk read",
            Counter::DiskWrite => "disk write",
            Counter::NetReceived => "net received",
            Counter::NetSent => "net sent",
        })
    }
}

// cumulative totals since boot; the sampler diffs them to get rates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiskCounters {
    pub read_bytes: u64,
    pub written_bytes: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetCounters {
    pub received_bytes: u64,
    pub sent_bytes: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStats {
    pub total_bytes: u64,
    pub available_bytes: u64,
}

/// One reading of a counter group, stamped with the monotonic time it was taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterSample<T> {
    pub counters: T,
    pub timestamp: Instant,
}

impl<T> CounterSample<T> {
    pub fn new(counters: T, timestamp: Instant) -> Self {
        Self { counters, timestamp }
    }
}

/// Point-in-time gauges that need no delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct InstantMetrics {
    pub cpu_percent: f64,
    pub mem_used_bytes: u64,
    pub mem_total_bytes: u64,
    pub mem_percent: f64,
}

impl InstantMetrics {
    /// Copies the memory fields from `stats`. Used is total minus available.
    pub fn set_memory(&mut self, stats: MemoryStats) {
        let used = stats.total_bytes.saturating_sub(stats.available_bytes);
        self.mem_used_bytes = used;
        self.mem_total_bytes = stats.total_bytes;
        self.mem_percent = if stats.total_bytes > 0 {
            used as f64 / stats.total_bytes as f64 * 100.0
        } else {
            0.0
        };
    }
}

/// Derived rates, bytes per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RateMetrics {
    pub disk_read_bps: f64,
    pub disk_write_bps: f64,
    pub net_down_bps: f64,
    pub net_up_bps: f64,
}

impl RateMetrics {
    pub fn disk_total_bps(&self) -> f64 {
        self.disk_read_bps + self.disk_write_bps
    }

    pub fn net_total_bps(&self) -> f64 {
        self.net_down_bps + self.net_up_bps
    }
}

/// What a single `Sampler::sample` call produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub metrics: InstantMetrics,
    pub rates: RateMetrics,
    pub issues: Vec<SampleIssue>,
}

impl Snapshot {
    /// True when the provider failed for `resource` this tick and the shown
    /// values are carried over from an earlier one.
    pub fn is_stale(&self, resource: Resource) -> bool {
        self.issues.iter().any(|i| i.unavailable_resource() == Some(resource))
    }
}

/// Per-resource hot flags plus the aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThresholdFlags {
    pub cpu_hot: bool,
    pub ram_hot: bool,
    pub disk_hot: bool,
    pub net_hot: bool,
    pub any_hot: bool,
    pub hot_list: Vec<Resource>,
}

impl ThresholdFlags {
    pub fn is_hot(&self, resource: Resource) -> bool {
        match resource {
            Resource::Cpu => self.cpu_hot,
            Resource::Ram => self.ram_hot,
            Resource::Disk => self.disk_hot,
            Resource::Network => self.net_hot,
        }
    }

    /// "OK", or "Peak in CPU, Disk" listing the hot resources in display order.
    pub fn status(&self) -> String {
        if !self.any_hot {
            return "OK".into();
        }
        let names: Vec<&str> = self.hot_list.iter().map(|r| r.label()).collect();
        format!("Peak in {}", names.join(", "))
    }
}

/// Everything one tick produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub tick: u64,
    pub snapshot: Snapshot,
    pub flags: ThresholdFlags,
    pub status: String,
}
