//! Error and anomaly types. Nothing here is fatal to the monitor loop.

use serde::Serialize;
use thiserror::Error;

use crate::types::{Counter, Resource};

/// Failure of the OS metrics provider to produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("{0} not reported by the OS")]
    NotReported(&'static str),
    #[error("refresh panicked: {0}")]
    RefreshPanicked(String),
}

/// Conditions raised while taking one sample.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SampleIssue {
    #[error("{resource} metrics unavailable: {reason}")]
    MetricsUnavailable { resource: Resource, reason: String },
    #[error("clock did not advance for {resource} counters")]
    ClockNonMonotonic { resource: Resource },
    #[error("{counter} counter went backwards ({previous} -> {current})")]
    CounterRollback {
        counter: Counter,
        previous: u64,
        current: u64,
    },
}

impl SampleIssue {
    pub fn unavailable(resource: Resource, err: &ProviderError) -> Self {
        SampleIssue::MetricsUnavailable {
            resource,
            reason: err.to_string(),
        }
    }

    pub fn unavailable_resource(&self) -> Option<Resource> {
        match self {
            SampleIssue::MetricsUnavailable { resource, .. } => Some(*resource),
            _ => None,
        }
    }
}
