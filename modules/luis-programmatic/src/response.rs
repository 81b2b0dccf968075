use bytes::Bytes;
use http::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{LuisError, Result};

/// Fully buffered HTTP response
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    body: Bytes,
}

impl Response {
    #[must_use]
    pub fn new(status: StatusCode, body: Bytes) -> Self {
        Self { status, body }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as UTF-8 text
    ///
    /// # Errors
    ///
    /// Returns [`LuisError::MalformedResponse`] if the body is not valid UTF-8.
    pub fn text(&self) -> Result<&str> {
        std::str::from_utf8(&self.body)
            .map_err(|e| LuisError::MalformedResponse(format!("Invalid UTF-8: {e}")))
    }

    /// Decode the body as JSON
    ///
    /// # Errors
    ///
    /// Returns [`LuisError::MalformedResponse`] if the body does not decode
    /// into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| {
            LuisError::MalformedResponse(format!(
                "cannot decode {} from response (status {}): {e}",
                std::any::type_name::<T>(),
                self.status
            ))
        })
    }

    /// Convert this response into the error it describes.
    ///
    /// Intended for non-success responses; the body is decoded as a service
    /// error envelope.
    #[must_use]
    pub fn into_error(self) -> LuisError {
        match self.text() {
            Ok(text) => LuisError::from_error_body(self.status, text),
            Err(e) => e,
        }
    }

    /// Pass success responses through, turn anything else into an error
    ///
    /// # Errors
    ///
    /// Returns [`LuisError::Service`] for a decodable error body and
    /// [`LuisError::MalformedResponse`] otherwise.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            tracing::warn!(status = %self.status, "LUIS request failed");
            Err(self.into_error())
        }
    }
}
