//! Scripted provider and clock shared by the integration tests.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use minimon_core::clock::Clock;
use minimon_core::types::{DiskCounters, MemoryStats, NetCounters};
use minimon_core::{MetricsProvider, ProviderError};

pub const MIB: u64 = 1_048_576;
pub const GIB: u64 = 1024 * MIB;

#[derive(Clone)]
pub struct FakeClock(Rc<Cell<Instant>>);

impl FakeClock {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(Instant::now())))
    }

    pub fn advance(&self, d: Duration) {
        self.0.set(self.0.get() + d);
    }

    pub fn rewind(&self, d: Duration) {
        self.0.set(self.0.get() - d);
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.0.get()
    }
}

#[derive(Debug, Clone)]
pub struct Readings {
    pub cpu: Result<f64, ProviderError>,
    pub mem: Result<MemoryStats, ProviderError>,
    pub disk: Result<DiskCounters, ProviderError>,
    pub net: Result<NetCounters, ProviderError>,
    pub primed: u32,
}

impl Default for Readings {
    fn default() -> Self {
        Self {
            cpu: Ok(0.0),
            mem: Ok(MemoryStats {
                total_bytes: 16 * GIB,
                available_bytes: 16 * GIB,
            }),
            disk: Ok(DiskCounters::default()),
            net: Ok(NetCounters::default()),
            primed: 0,
        }
    }
}

/// Provider whose readings the test rewrites between samples.
#[derive(Clone, Default)]
pub struct FakeProvider(pub Rc<RefCell<Readings>>);

impl FakeProvider {
    pub fn set(&self, f: impl FnOnce(&mut Readings)) {
        f(&mut self.0.borrow_mut());
    }

    pub fn primed(&self) -> u32 {
        self.0.borrow().primed
    }
}

impl MetricsProvider for FakeProvider {
    fn prime_cpu(&mut self) {
        self.0.borrow_mut().primed += 1;
    }
    fn cpu_percent(&mut self) -> Result<f64, ProviderError> {
        self.0.borrow().cpu.clone()
    }
    fn memory(&mut self) -> Result<MemoryStats, ProviderError> {
        self.0.borrow().mem.clone()
    }
    fn disk_counters(&mut self) -> Result<DiskCounters, ProviderError> {
        self.0.borrow().disk.clone()
    }
    fn net_counters(&mut self) -> Result<NetCounters, ProviderError> {
        self.0.borrow().net.clone()
    }
}

pub fn unavailable() -> ProviderError {
    ProviderError::NotReported("test")
}
