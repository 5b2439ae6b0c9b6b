//! Single-pass reduction of a replay event log into blue-zone parameters.
//!
//! The reducer folds the raw event sequence through the classifier once, in
//! input order, accumulating a frequency count over announced safe-zone
//! circles and the first two distinct qualifying position samples. The count
//! is then denoised: a circle announced only once is treated as a transient
//! or erroneous reading and dropped.

use std::cmp::Reverse;
use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use super::classifier::{classify, Observation};
use super::types::{BlueZoneParams, Circle, Point};
use crate::error::{Result, TelemetryError};

/// Open-interval gate on `common.isGame` for admissible position samples.
/// Preserved literally from the telemetry format's phase encoding.
pub const IS_GAME_MIN: f64 = 0.0;
pub const IS_GAME_MAX: f64 = 0.5;

/// A circle must be announced at least this many times to survive denoising.
pub const MIN_ZONE_OBSERVATIONS: usize = 2;

/// Frequency counter over announced circles, keyed by exact value.
#[derive(Debug, Default)]
struct ZoneCounter {
    entries: HashMap<(u64, u64, u64), ZoneEntry>,
}

#[derive(Debug)]
struct ZoneEntry {
    circle: Circle,
    count: usize,
    first_seen: usize,
}

impl ZoneCounter {
    fn observe(&mut self, circle: Circle) {
        let first_seen = self.entries.len();
        let entry = self
            .entries
            .entry(circle.key())
            .or_insert(ZoneEntry { circle, count: 0, first_seen });
        entry.count += 1;
    }

    /// Circles seen at least [`MIN_ZONE_OBSERVATIONS`] times, most frequent
    /// first; equal counts keep first-observed order.
    fn recurring(self) -> Vec<Circle> {
        let mut entries: Vec<ZoneEntry> = self
            .entries
            .into_values()
            .filter(|entry| entry.count >= MIN_ZONE_OBSERVATIONS)
            .collect();

        entries.sort_by_key(|entry| (Reverse(entry.count), entry.first_seen));
        entries.into_iter().map(|entry| entry.circle).collect()
    }
}

/// Fixed-capacity accumulator for the two tracked position samples.
///
/// The two-sample requirement is structural: callers can only get a pair out
/// of the [`Full`](PointPair::Full) state, so there is no way to silently
/// truncate or pad.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PointPair {
    Empty,
    One(Point),
    Full(Point, Point),
}

impl PointPair {
    fn is_full(&self) -> bool {
        matches!(self, PointPair::Full(..))
    }

    fn len(&self) -> usize {
        match self {
            PointPair::Empty => 0,
            PointPair::One(_) => 1,
            PointPair::Full(..) => 2,
        }
    }

    /// Admit a sample unless it duplicates one already held.
    fn admit(&mut self, point: Point) {
        *self = match *self {
            PointPair::Empty => PointPair::One(point),
            PointPair::One(first) if first.same_value(&point) => PointPair::One(first),
            PointPair::One(first) => PointPair::Full(first, point),
            full @ PointPair::Full(..) => full,
        };
    }

    fn into_pair(self) -> Result<(Point, Point)> {
        match self {
            PointPair::Full(a, b) => Ok((a, b)),
            partial => Err(TelemetryError::InsufficientSamples { found: partial.len() }),
        }
    }
}

/// Reduce a full replay event log to its blue-zone parameters.
///
/// Traverses the events once in input order. Fails on the first malformed
/// consumed event, and when the log holds fewer than two distinct position
/// samples inside the `isGame` gate.
pub fn reduce(events: &[Value]) -> Result<BlueZoneParams> {
    let mut zones = ZoneCounter::default();
    let mut points = PointPair::Empty;

    for event in events {
        match classify(event)? {
            Observation::Zone(circle) => zones.observe(circle),
            Observation::Position { point, is_game } => {
                // Once full, further samples are skipped without inspection.
                if !points.is_full() && IS_GAME_MIN < is_game && is_game < IS_GAME_MAX {
                    points.admit(point);
                }
            }
            Observation::Ignored => {}
        }
    }

    let (point_a, point_b) = points.into_pair()?;
    let zones = zones.recurring();
    debug!(zone_count = zones.len(), "replay reduced");

    Ok(BlueZoneParams { point_a, point_b, zones })
}
