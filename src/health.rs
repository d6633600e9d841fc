//! Liveness reporting.
//!
//! A `HealthStatus` is built fresh for every request from the wall clock and the
//! deployment mode resolved at startup. There is no unhealthy state: if the
//! process can run the reporter, it is alive.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Reported process status. Only `ok` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Ok,
}

/// Body of the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: HealthState,
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// ISO 8601 in UTC with nanosecond precision, e.g. `2026-10-16T08:00:00.123456789Z`
fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Nanos, true))
}

/// Capability consulted by every health route binding.
pub trait HealthReporter: Send + Sync {
    fn report(&self) -> HealthStatus;
}

/// Reads the system clock on every call.
#[derive(Debug, Clone, Default)]
pub struct SystemHealthReporter {
    mode: Option<String>,
}

impl SystemHealthReporter {
    pub fn new(mode: Option<String>) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> Option<&str> {
        self.mode.as_deref()
    }
}

impl HealthReporter for SystemHealthReporter {
    fn report(&self) -> HealthStatus {
        HealthStatus {
            status: HealthState::Ok,
            timestamp: Utc::now(),
            mode: self.mode.clone(),
        }
    }
}
