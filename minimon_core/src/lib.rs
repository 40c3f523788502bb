//! Core of the minimon resource monitor: samples CPU, memory, disk and network
//! counters, derives per-second rates and flags values over their thresholds.

pub mod clock;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod monitor;
pub mod provider;
pub mod sampler;
pub mod types;
pub mod units;

pub use config::{Thresholds, TICK_PERIOD};
pub use error::{ProviderError, SampleIssue};
pub use evaluator::evaluate;
pub use monitor::{ticker, Monitor};
pub use provider::{MetricsProvider, SysinfoProvider};
pub use sampler::Sampler;
pub use types::{InstantMetrics, RateMetrics, Report, Resource, Snapshot, ThresholdFlags};
