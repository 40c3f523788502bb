//! Threshold evaluation. Pure: same input, same flags.

use crate::config::Thresholds;
use crate::types::{InstantMetrics, RateMetrics, Resource, ThresholdFlags};
use crate::units::{bytes_to_kb, bytes_to_mb};

pub fn evaluate(metrics: &InstantMetrics, rates: &RateMetrics, t: &Thresholds) -> ThresholdFlags {
    let cpu_hot = metrics.cpu_percent >= t.cpu_warn;
    let ram_hot = metrics.mem_percent >= t.ram_warn;
    let disk_hot = bytes_to_mb(rates.disk_total_bps()) >= t.disk_mb_s_warn;
    let net_hot = bytes_to_kb(rates.net_total_bps()) >= t.net_kb_s_warn;

    let hot = [cpu_hot, ram_hot, disk_hot, net_hot];
    let hot_list = Resource::ALL
        .into_iter()
        .zip(hot)
        .filter_map(|(r, h)| h.then_some(r))
        .collect();

    ThresholdFlags {
        cpu_hot,
        ram_hot,
        disk_hot,
        net_hot,
        any_hot: hot.contains(&true),
        hot_list,
    }
}
