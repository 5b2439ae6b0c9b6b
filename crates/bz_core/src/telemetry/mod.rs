//! Match telemetry processing.
//!
//! A replay's telemetry document is an ordered list of open-schema JSON
//! events. The modules here classify those events, reduce a full log to its
//! blue-zone parameters, fetch logs over HTTP, and fan extraction out across
//! many replays.

pub mod classifier;
pub mod parallel;
pub mod reducer;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use classifier::*;
pub use parallel::*;
pub use reducer::*;
pub use transport::*;
pub use types::*;
