//! Tick driver and ticker.

mod common;

use std::time::Duration;

use common::{FakeClock, FakeProvider, GIB, MIB};
use minimon_core::types::{DiskCounters, MemoryStats, NetCounters};
use minimon_core::{ticker, Monitor, Resource, Sampler, Thresholds, TICK_PERIOD};

#[test]
fn tick_reports_peak_in_ram() {
    let provider = FakeProvider::default();
    let clock = FakeClock::new();
    let mut monitor = Monitor::new(
        Sampler::with_clock(provider.clone(), clock.clone()),
        Thresholds::DEFAULT,
    );

    provider.set(|r| {
        r.cpu = Ok(50.0);
        r.mem = Ok(MemoryStats {
            total_bytes: 10 * GIB,
            available_bytes: GIB,
        });
        r.disk = Ok(DiskCounters {
            read_bytes: 4 * MIB,
            written_bytes: 6 * MIB,
        });
        r.net = Ok(NetCounters {
            received_bytes: 60 * 1024,
            sent_bytes: 40 * 1024,
        });
    });
    clock.advance(Duration::from_secs(1));

    let report = monitor.tick();
    assert_eq!(report.tick, 1);
    assert_eq!(report.snapshot.metrics.mem_percent, 90.0);
    assert_eq!(report.flags.hot_list, vec![Resource::Ram]);
    assert_eq!(report.status, "Peak in RAM");

    clock.advance(Duration::from_secs(1));
    let report = monitor.tick();
    assert_eq!(report.tick, 2);
    // counters did not move, so disk and network went quiet
    assert_eq!(report.snapshot.rates.disk_total_bps(), 0.0);
}

#[test]
fn report_serializes_with_labels() {
    let provider = FakeProvider::default();
    provider.set(|r| r.cpu = Ok(99.0));
    let clock = FakeClock::new();
    let mut monitor = Monitor::new(Sampler::with_clock(provider, clock.clone()), Thresholds::DEFAULT);
    clock.advance(TICK_PERIOD);

    let js = serde_json::to_value(monitor.tick()).expect("serialize report");
    assert_eq!(js["status"], "Peak in CPU");
    assert_eq!(js["flags"]["hot_list"][0], "CPU");
    assert_eq!(js["snapshot"]["metrics"]["cpu_percent"], 99.0);
}

#[tokio::test(start_paused = true)]
async fn ticker_waits_one_period_between_ticks() {
    let start = tokio::time::Instant::now();
    let mut iv = ticker(TICK_PERIOD);
    iv.tick().await;
    assert_eq!(start.elapsed(), TICK_PERIOD);
    iv.tick().await;
    iv.tick().await;
    assert_eq!(start.elapsed(), TICK_PERIOD * 3);
}

#[tokio::test(start_paused = true)]
async fn ticker_delays_after_a_slow_tick() {
    let start = tokio::time::Instant::now();
    let mut iv = ticker(Duration::from_millis(100));
    iv.tick().await;
    // simulate a tick that overran by 2.5 periods
    tokio::time::advance(Duration::from_millis(250)).await;
    iv.tick().await;
    iv.tick().await;
    // no burst: the following tick is a full period after the late one
    assert_eq!(start.elapsed(), Duration::from_millis(450));
}
