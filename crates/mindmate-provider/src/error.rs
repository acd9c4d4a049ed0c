use thiserror::Error;

/// The one failure kind the core can surface: anything that goes wrong
/// between us and the hosted completion endpoint.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("completion api error (timeout): request timed out after {0}s")]
    Timeout(u64),

    #[error("completion api error (connect): {0}")]
    Connect(String),

    #[error("completion api error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("completion api error: malformed response: {0}")]
    Malformed(String),
}

impl RemoteError {
    pub fn kind(&self) -> RemoteErrorKind {
        match self {
            Self::Timeout(_) => RemoteErrorKind::Timeout,
            Self::Connect(_) => RemoteErrorKind::Network,
            Self::Api { status, .. } => RemoteErrorKind::from_status(*status),
            Self::Malformed(_) => RemoteErrorKind::MalformedResponse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    Network,
    Timeout,
    AuthError,
    RateLimit,
    ServerError,
    InvalidRequest,
    MalformedResponse,
    Unknown,
}

impl RemoteErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            429 => Self::RateLimit,
            401 | 403 => Self::AuthError,
            400 | 422 => Self::InvalidRequest,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

}
