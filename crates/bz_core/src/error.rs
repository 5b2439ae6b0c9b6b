use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("malformed {kind} event: {reason}")]
    MalformedEvent { kind: &'static str, reason: String },

    #[error("insufficient position samples: found {found}, need 2")]
    InsufficientSamples { found: usize },

    #[error("transport error for {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("worker pool error: {0}")]
    WorkerPool(String),
}

impl TelemetryError {
    /// Transport failures may be retried by the caller; everything else is
    /// a property of the replay itself and will fail the same way again.
    pub fn is_recoverable(&self) -> bool {
        match self {
            TelemetryError::Transport { .. } => true,
            TelemetryError::WorkerPool(_) => true,
            TelemetryError::MalformedEvent { .. } => false,
            TelemetryError::InsufficientSamples { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, TelemetryError>;
