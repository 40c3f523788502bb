//! Tick driver: sample, evaluate, hand a `Report` to whoever renders it.

use std::time::Duration;

use tokio::time::{Interval, MissedTickBehavior};

use crate::clock::{Clock, MonotonicClock};
use crate::config::Thresholds;
use crate::evaluator::evaluate;
use crate::provider::MetricsProvider;
use crate::sampler::Sampler;
use crate::types::Report;

pub struct Monitor<P, C = MonotonicClock> {
    sampler: Sampler<P, C>,
    thresholds: Thresholds,
    ticks: u64,
}

impl<P: MetricsProvider, C: Clock> Monitor<P, C> {
    pub fn new(sampler: Sampler<P, C>, thresholds: Thresholds) -> Self {
        Self {
            sampler,
            thresholds,
            ticks: 0,
        }
    }

    /// One full cycle. Tick numbers start at 1.
    pub fn tick(&mut self) -> Report {
        self.ticks += 1;
        let snapshot = self.sampler.sample();
        let flags = evaluate(&snapshot.metrics, &snapshot.rates, &self.thresholds);
        let status = flags.status();
        Report {
            tick: self.ticks,
            snapshot,
            flags,
            status,
        }
    }
}

/// Periodic ticker. The first tick fires after one full period (the sampler's
/// baseline was just taken); a late tick delays the schedule instead of bursting.
pub fn ticker(period: Duration) -> Interval {
    let start = tokio::time::Instant::now() + period;
    let mut iv = tokio::time::interval_at(start, period);
    iv.set_missed_tick_behavior(MissedTickBehavior::Delay);
    iv
}
