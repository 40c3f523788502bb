//! Text for each panel line.

use minimon_core::units::{bytes_to_gb, bytes_to_kb, bytes_to_mb};
use minimon_core::{Report, Resource};

use super::theme::HOT_ICON;

/// Placeholder shown before the first tick.
pub const PLACEHOLDER: &str = "--";

fn marker(hot: bool) -> &'static str {
    if hot {
        HOT_ICON
    } else {
        " "
    }
}

/// One line for `resource`: hot marker, value, and a stale tag when the
/// value is carried over from an earlier tick.
pub fn resource_line(resource: Resource, r: &Report) -> String {
    let m = &r.snapshot.metrics;
    let rates = &r.snapshot.rates;
    let body = match resource {
        Resource::Cpu => format!("CPU      {:5.1}%", m.cpu_percent),
        Resource::Ram => format!(
            "RAM      {:5.1}%  ({:.1}/{:.1} GB)",
            m.mem_percent,
            bytes_to_gb(m.mem_used_bytes as f64),
            bytes_to_gb(m.mem_total_bytes as f64)
        ),
        Resource::Disk => format!(
            "Disk     R {:6.1} MB/s | W {:6.1} MB/s",
            bytes_to_mb(rates.disk_read_bps),
            bytes_to_mb(rates.disk_write_bps)
        ),
        Resource::Network => format!(
            "Network  ↓ {:7.0} KB/s | ↑ {:7.0} KB/s",
            bytes_to_kb(rates.net_down_bps),
            bytes_to_kb(rates.net_up_bps)
        ),
    };
    let stale = if r.snapshot.is_stale(resource) {
        "  (stale)"
    } else {
        ""
    };
    format!("{} {body}{stale}", marker(r.flags.is_hot(resource)))
}

pub fn placeholder_line(resource: Resource) -> String {
    format!("  {:<8} {PLACEHOLDER}", resource.label())
}

pub fn status_line(r: Option<&Report>) -> String {
    match r {
        Some(r) => format!("Status: {}", r.status),
        None => format!("Status: {PLACEHOLDER}"),
    }
}
