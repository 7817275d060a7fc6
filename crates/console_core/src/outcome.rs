use thiserror::Error;

/// Closed result set for a single directory operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome<T> {
    Success(T),
    /// The service rejected a create because the email is already taken.
    Conflict(String),
    Failure(String),
}

impl<T> RequestOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, RequestOutcome::Success(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RequestOutcome<U> {
        match self {
            RequestOutcome::Success(value) => RequestOutcome::Success(f(value)),
            RequestOutcome::Conflict(message) => RequestOutcome::Conflict(message),
            RequestOutcome::Failure(message) => RequestOutcome::Failure(message),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestOutcome::Success(_) => None,
            RequestOutcome::Conflict(message) | RequestOutcome::Failure(message) => Some(message),
        }
    }
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("invalid directory service url '{0}'")]
    InvalidBaseUrl(String),
    #[error("directory request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("directory returned HTTP {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    #[error("malformed directory response: {0}")]
    Decode(String),
}

impl DirectoryError {
    pub fn status(&self) -> Option<u16> {
        match self {
            DirectoryError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(": {detail}"))
        .unwrap_or_default()
}
