//! Sampler: turns cumulative OS counters into per-second rates.
//!
//! The sampler keeps exactly one baseline reading per counter group (disk,
//! network). Each `sample()` diffs the fresh counters against that baseline,
//! divides by the elapsed monotonic time, then replaces the baseline. A group
//! whose read fails keeps both its old counters and its old timestamp, so the
//! next successful read spans the whole gap instead of producing a spike.

use std::time::Instant;

use tracing::{debug, warn};

use crate::clock::{Clock, MonotonicClock};
use crate::config::MIN_ELAPSED_SECS;
use crate::error::SampleIssue;
use crate::provider::MetricsProvider;
use crate::types::{
    Counter, CounterSample, DiskCounters, InstantMetrics, NetCounters, RateMetrics, Resource,
    Snapshot,
};

/// Seconds from `prev` to `now`, floored to `MIN_ELAPSED_SECS`.
pub fn elapsed_secs(prev: Instant, now: Instant) -> f64 {
    now.saturating_duration_since(prev)
        .as_secs_f64()
        .max(MIN_ELAPSED_SECS)
}

/// Per-second rate for a counter that moved from `prev` to `cur`. A counter
/// that went backwards counts as no activity. `elapsed_secs` must be positive;
/// take it from [`elapsed_secs`], which applies the floor.
pub fn rate(prev: u64, cur: u64, elapsed_secs: f64) -> f64 {
    cur.saturating_sub(prev) as f64 / elapsed_secs
}

#[derive(Debug, Clone, Copy, Default)]
struct Baseline {
    disk: Option<CounterSample<DiskCounters>>,
    net: Option<CounterSample<NetCounters>>,
}

pub struct Sampler<P, C = MonotonicClock> {
    provider: P,
    clock: C,
    baseline: Baseline,
    // last values handed out, re-shown when a read fails
    last: Snapshot,
}

impl<P: MetricsProvider> Sampler<P> {
    /// Primes the CPU window and records the first counter baseline.
    pub fn initialize(provider: P) -> Self {
        Self::with_clock(provider, MonotonicClock)
    }
}

impl<P: MetricsProvider, C: Clock> Sampler<P, C> {
    pub fn with_clock(mut provider: P, clock: C) -> Self {
        provider.prime_cpu();
        let now = clock.now();
        let disk = match provider.disk_counters() {
            Ok(c) => Some(CounterSample::new(c, now)),
            Err(e) => {
                warn!("initial disk counters unavailable: {e}");
                None
            }
        };
        let net = match provider.net_counters() {
            Ok(c) => Some(CounterSample::new(c, now)),
            Err(e) => {
                warn!("initial network counters unavailable: {e}");
                None
            }
        };
        Self {
            provider,
            clock,
            baseline: Baseline { disk, net },
            last: Snapshot::default(),
        }
    }

    pub fn disk_baseline(&self) -> Option<CounterSample<DiskCounters>> {
        self.baseline.disk
    }

    pub fn net_baseline(&self) -> Option<CounterSample<NetCounters>> {
        self.baseline.net
    }

    /// Takes one reading. Never fails: unavailable fields keep their last value
    /// and are listed in `Snapshot::issues`.
    pub fn sample(&mut self) -> Snapshot {
        let now = self.clock.now();
        let mut issues = Vec::new();
        let mut metrics: InstantMetrics = self.last.metrics;
        let mut rates: RateMetrics = self.last.rates;

        match self.provider.cpu_percent() {
            Ok(pct) => metrics.cpu_percent = pct,
            Err(e) => issues.push(SampleIssue::unavailable(Resource::Cpu, &e)),
        }

        match self.provider.memory() {
            Ok(stats) => metrics.set_memory(stats),
            Err(e) => issues.push(SampleIssue::unavailable(Resource::Ram, &e)),
        }

        match self.provider.disk_counters() {
            Ok(cur) => {
                if let Some(prev) = self.baseline.disk {
                    let dt = group_elapsed(Resource::Disk, prev.timestamp, now, &mut issues);
                    let p = prev.counters;
                    rates.disk_read_bps =
                        checked_rate(Counter::DiskRead, p.read_bytes, cur.read_bytes, dt, &mut issues);
                    rates.disk_write_bps = checked_rate(
                        Counter::DiskWrite,
                        p.written_bytes,
                        cur.written_bytes,
                        dt,
                        &mut issues,
                    );
                } else {
                    // first successful read; nothing to diff against yet
                    rates.disk_read_bps = 0.0;
                    rates.disk_write_bps = 0.0;
                }
                self.baseline.disk = Some(CounterSample::new(cur, now));
            }
            Err(e) => issues.push(SampleIssue::unavailable(Resource::Disk, &e)),
        }

        match self.provider.net_counters() {
            Ok(cur) => {
                if let Some(prev) = self.baseline.net {
                    let dt = group_elapsed(Resource::Network, prev.timestamp, now, &mut issues);
                    let p = prev.counters;
                    rates.net_down_bps = checked_rate(
                        Counter::NetReceived,
                        p.received_bytes,
                        cur.received_bytes,
                        dt,
                        &mut issues,
                    );
                    rates.net_up_bps =
                        checked_rate(Counter::NetSent, p.sent_bytes, cur.sent_bytes, dt, &mut issues);
                } else {
                    rates.net_down_bps = 0.0;
                    rates.net_up_bps = 0.0;
                }
                self.baseline.net = Some(CounterSample::new(cur, now));
            }
            Err(e) => issues.push(SampleIssue::unavailable(Resource::Network, &e)),
        }

        for issue in &issues {
            match issue {
                SampleIssue::MetricsUnavailable { .. } => warn!("{issue}; keeping last values"),
                _ => debug!("{issue}; clamped"),
            }
        }

        let snapshot = Snapshot {
            metrics,
            rates,
            issues,
        };
        self.last = snapshot.clone();
        snapshot
    }
}

fn group_elapsed(
    resource: Resource,
    prev: Instant,
    now: Instant,
    issues: &mut Vec<SampleIssue>,
) -> f64 {
    if now <= prev {
        issues.push(SampleIssue::ClockNonMonotonic { resource });
    }
    elapsed_secs(prev, now)
}

fn checked_rate(
    counter: Counter,
    previous: u64,
    current: u64,
    dt: f64,
    issues: &mut Vec<SampleIssue>,
) -> f64 {
    if current < previous {
        issues.push(SampleIssue::CounterRollback {
            counter,
            previous,
            current,
        });
    }
    rate(previous, current, dt)
}
