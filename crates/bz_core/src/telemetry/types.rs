use serde::{Deserialize, Serialize};

/// Map position (world units as reported by the telemetry service)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Bit-exact equality key. `0.0` and `-0.0` describe the same position.
    pub(crate) fn key(&self) -> (u64, u64) {
        (float_key(self.x), float_key(self.y))
    }

    /// Exact value equality as used for sample deduplication.
    pub fn same_value(&self, other: &Point) -> bool {
        self.key() == other.key()
    }
}

/// Announced safe-zone circle: center plus radius
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl Circle {
    /// Bit-exact equality key for frequency counting. No spatial tolerance:
    /// two announcements match only when all three components match.
    pub(crate) fn key(&self) -> (u64, u64, u64) {
        (float_key(self.x), float_key(self.y), float_key(self.r))
    }
}

fn float_key(v: f64) -> u64 {
    // Collapse -0.0 onto 0.0; they are the same announced coordinate.
    if v == 0.0 { 0 } else { v.to_bits() }
}

/// Extraction output for one replay: two reference positions for the tracked
/// player and the recurring safe-zone circles, most frequent first.
///
/// Built once per event log and immutable afterwards; it owns copies of its
/// points and circles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BlueZoneParams {
    pub point_a: Point,
    pub point_b: Point,
    pub zones: Vec<Circle>,
}
