//! Parallel extraction across many replays.
//!
//! Extractions share no state and have no ordering dependency on each other,
//! so they fan out over a fixed-size worker pool and come back in completion
//! order. One replay's failure is attributed to its own URL and never cancels
//! or corrupts its siblings; no cancellation signal reaches the reducer.

use std::sync::mpsc;
use std::thread;

use rayon::prelude::*;
use tracing::warn;

use super::transport::{extract_blue_zone_params, TelemetrySource};
use super::types::BlueZoneParams;
use crate::error::{Result, TelemetryError};

/// Worker-pool size used when the caller does not pick one.
pub const DEFAULT_WORKERS: usize = 8;

/// Outcome of one replay extraction, attributed to its source URL.
#[derive(Debug)]
pub struct ReplayExtraction {
    pub url: String,
    pub result: Result<BlueZoneParams>,
}

/// Stream of completed extractions, in completion order.
///
/// Dropping the stream early is safe: remaining workers finish their current
/// replay and their results are discarded.
pub struct ReplayExtractions {
    rx: mpsc::Receiver<ReplayExtraction>,
}

impl Iterator for ReplayExtractions {
    type Item = ReplayExtraction;

    fn next(&mut self) -> Option<Self::Item> {
        self.rx.recv().ok()
    }
}

/// Extract blue-zone parameters for every replay URL on a bounded pool.
///
/// Results arrive as each extraction completes, not in input order. Every
/// input URL is reported exactly once, as a success or as its own error.
pub fn extract_many<S>(source: S, urls: Vec<String>, workers: usize) -> Result<ReplayExtractions>
where
    S: TelemetrySource + Send + Sync + 'static,
{
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers.max(1))
        .build()
        .map_err(|err| TelemetryError::WorkerPool(err.to_string()))?;

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        pool.install(|| {
            urls.into_par_iter().for_each_with(tx, |tx, url| {
                let result = extract_blue_zone_params(&source, &url);
                if let Err(err) = &result {
                    warn!("extraction failed for {}: {}", url, err);
                }
                // Receiver may be gone if the caller stopped consuming.
                let _ = tx.send(ReplayExtraction { url, result });
            });
        });
    });

    Ok(ReplayExtractions { rx })
}
