use musicscope_core::{EtlJob, Failure, FetchSet, Generation};
use thiserror::Error;

/// Failure of one remote call. `Display` is the user-visible message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Network failure, timeout, or an error status without a usable `detail`.
    #[error("{0}")]
    Transport(String),
    /// Error status carrying a server-supplied `detail`, passed through verbatim.
    #[error("{detail}")]
    Service { status: u16, detail: String },
}

impl From<ServiceError> for Failure {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Transport(message) => Failure::transport(message),
            ServiceError::Service { detail, .. } => Failure::service(detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    FetchSetLoaded {
        generation: Generation,
        result: Result<FetchSet, ServiceError>,
    },
    EtlCompleted {
        job: EtlJob,
        result: Result<(), ServiceError>,
    },
}
