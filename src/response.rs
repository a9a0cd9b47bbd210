use crate::error::{FirebaseError, Result};
use hyper::ext::ReasonPhrase;
use reqwest::header::ETAG;
use reqwest::Response;
use std::borrow::Cow;

impl FirebaseError {
    /// Reads the status line and `ETag` header of an already received response.
    ///
    /// hyper only records the reason phrase when the server sent one that
    /// differs from the canonical text, so the canonical reason fills in
    /// otherwise (empty for unregistered codes without a phrase).
    pub fn from_response(response: &Response) -> Self {
        let status = response.status();
        let reason = match response.extensions().get::<ReasonPhrase>() {
            Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
            None => status.canonical_reason().unwrap_or_default().to_string(),
        };
        let etag = match response.headers().get(ETAG) {
            Some(value) => {
                let etag = String::from_utf8_lossy(value.as_bytes());
                if let Cow::Owned(_) = etag {
                    log::warn!("ETag header is not valid UTF-8, replaced invalid bytes: {:?}", value);
                }
                etag.into_owned()
            }
            None => String::new(),
        };

        FirebaseError::new(status.as_u16(), reason, etag)
    }
}

/// Hands back 2xx responses untouched and turns anything else into a [`FirebaseError`].
pub fn error_for_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let err = FirebaseError::from_response(&response);
    log::debug!("request to {} failed: {} (etag={:?})", response.url(), err, err.etag());
    Err(err)
}
