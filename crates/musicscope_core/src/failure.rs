use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Request could not complete (network, timeout, status without detail).
    Transport,
    /// Server rejected the request with a human-readable `detail`.
    Service,
}

/// A remote failure as stored in state. `message` is shown verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl Failure {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport,
            message: message.into(),
        }
    }

    pub fn service(detail: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Service,
            message: detail.into(),
        }
    }
}
