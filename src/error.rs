use reqwest::StatusCode;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Backend returned status {status}: {body}")]
    BackendStatus { status: StatusCode, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// How a failed request looks from the user's side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The backend answered, but not with usable data
    Unavailable,
    /// The backend could not be reached at all
    Unreachable,
}

impl AppError {
    /// Classifies the error for choosing a section placeholder
    pub fn failure_kind(&self) -> FailureKind {
        match self {
            AppError::HttpClient(_) | AppError::Io(_) => FailureKind::Unreachable,
            AppError::BackendStatus { .. }
            | AppError::MalformedResponse(_)
            | AppError::Session(_)
            | AppError::Internal(_) => FailureKind::Unavailable,
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Unavailable => write!(f, "unavailable"),
            FailureKind::Unreachable => write!(f, "unreachable"),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
