//! Replay log retrieval.
//!
//! The reducer consumes an already-materialized event list; this module is
//! the seam that produces one. [`TelemetrySource`] keeps the core agnostic to
//! where a log comes from, and [`HttpTelemetrySource`] is the standard
//! implementation over the telemetry CDN. Retry policy, if any, belongs to
//! callers of this layer; the reducer never retries.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use super::reducer::reduce;
use super::types::BlueZoneParams;
use crate::error::{Result, TelemetryError};

/// Request timeout for telemetry downloads. The documents are large (tens of
/// megabytes for a full match) so this is generous.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Source of raw replay event logs.
pub trait TelemetrySource {
    /// Fetch the full event log for one replay as an ordered record list.
    ///
    /// Implementations deliver either a complete list or an error; the
    /// reducer never sees a partial sequence.
    fn fetch(&self, url: &str) -> Result<Vec<Value>>;
}

/// HTTP source for telemetry JSON documents.
pub struct HttpTelemetrySource {
    client: reqwest::blocking::Client,
}

impl HttpTelemetrySource {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// Use a preconfigured client (custom timeouts, proxies).
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Default for HttpTelemetrySource {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetrySource for HttpTelemetrySource {
    fn fetch(&self, url: &str) -> Result<Vec<Value>> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .map_err(|err| transport_error(url, &err))?;

        let body: Value = response.json().map_err(|err| transport_error(url, &err))?;
        event_list(url, body)
    }
}

/// Interpret a parsed telemetry body as an ordered event list.
fn event_list(url: &str, body: Value) -> Result<Vec<Value>> {
    match body {
        Value::Array(events) => {
            debug!(url, events = events.len(), "telemetry fetched");
            Ok(events)
        }
        _ => Err(TelemetryError::Transport {
            url: url.to_string(),
            reason: "expected a JSON array of events".to_string(),
        }),
    }
}

fn transport_error(url: &str, err: &reqwest::Error) -> TelemetryError {
    TelemetryError::Transport { url: url.to_string(), reason: err.to_string() }
}

/// Fetch one replay's event log and reduce it to blue-zone parameters.
pub fn extract_blue_zone_params<S>(source: &S, url: &str) -> Result<BlueZoneParams>
where
    S: TelemetrySource + ?Sized,
{
    let events = source.fetch(url)?;
    reduce(&events)
}
