//! # bz_core - Blue-Zone Parameter Extraction
//!
//! This library extracts match geometry from battle-royale replay telemetry:
//! two reference positions for the tracked player and the sequence of
//! recurring safe-zone circles announced during the match.
//!
//! ## Features
//! - Single-pass reduction over a raw telemetry event log
//! - Frequency-based denoising of safe-zone announcements
//! - HTTP transport for telemetry CDN documents
//! - Parallel extraction across many replays on a bounded worker pool

pub mod error;
pub mod telemetry;

// Re-export main API types
pub use error::{Result, TelemetryError};
pub use telemetry::classifier::{classify, Observation};
pub use telemetry::parallel::{extract_many, ReplayExtraction, ReplayExtractions, DEFAULT_WORKERS};
pub use telemetry::reducer::reduce;
pub use telemetry::transport::{extract_blue_zone_params, HttpTelemetrySource, TelemetrySource};
pub use telemetry::types::{BlueZoneParams, Circle, Point};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
