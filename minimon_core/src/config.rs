//! Compile-time configuration: tick period and warning thresholds.

use std::time::Duration;

/// How often the monitor samples.
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Floor for the elapsed time between two samples (seconds).
pub const MIN_ELAPSED_SECS: f64 = 0.001;

/// Warning thresholds. A value equal to its threshold counts as hot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// CPU utilization, percent.
    pub cpu_warn: f64,
    /// Memory utilization, percent.
    pub ram_warn: f64,
    /// Disk read+write, MB/s.
    pub disk_mb_s_warn: f64,
    /// Network down+up, KB/s.
    pub net_kb_s_warn: f64,
}

impl Thresholds {
    pub const DEFAULT: Thresholds = Thresholds {
        cpu_warn: 80.0,
        ram_warn: 85.0,
        disk_mb_s_warn: 50.0,
        net_kb_s_warn: 2000.0,
    };
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
