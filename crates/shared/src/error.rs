use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error envelope returned by the directory service (`{"detail": ...}`).
///
/// `detail` is usually a string; validation failures carry a list of objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: serde_json::Value,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: serde_json::Value::String(detail.into()),
        }
    }

    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort field '{0}' (expected name, email, fav_number or active)")]
pub struct ParseSortFieldError(pub String);
