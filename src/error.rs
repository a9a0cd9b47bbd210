use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = FirebaseError> = std::result::Result<T, E>;

/// A failed call against the remote data API.
///
/// Built once from the status line and `ETag` of the failing response and
/// never modified afterwards. The type carries the data only; callers branch
/// on [`status_code`](Self::status_code) themselves, e.g. retrying a
/// `412 Precondition Failed` with the returned [`etag`](Self::etag).
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{message}")]
pub struct FirebaseError {
    status_code: u16,
    reason_phrase: String,
    etag: String,
    message: String,
}

impl FirebaseError {
    /// Any status code is accepted as-is. `reason_phrase` and `etag` may be empty.
    pub fn new(status_code: u16, reason_phrase: impl Into<String>, etag: impl Into<String>) -> Self {
        let reason_phrase = reason_phrase.into();
        let message = format!("HTTP Error {}: {}", status_code, reason_phrase);
        FirebaseError {
            status_code,
            reason_phrase,
            etag: etag.into(),
            message,
        }
    }

    /// Status code of the failed call, stored as received.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Typed status, `None` when the stored code is outside `100..=999`.
    pub fn status(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status_code).ok()
    }

    /// Reason phrase supplied by the server, possibly empty.
    pub fn reason_phrase(&self) -> &str {
        &self.reason_phrase
    }

    /// Entity tag of the resource at failure time, empty when the server sent none.
    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Whether the server sent a non-empty entity tag.
    pub fn has_etag(&self) -> bool {
        !self.etag.is_empty()
    }

    /// `HTTP Error {status_code}: {reason_phrase}`, formatted at construction.
    pub fn message(&self) -> &str {
        &self.message
    }
}
