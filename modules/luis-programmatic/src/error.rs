use http::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors surfaced by the LUIS programmatic client
#[derive(Debug, Error)]
pub enum LuisError {
    /// The service rejected the request with a structured error body
    #[error("{code} - {message}")]
    Service {
        status: StatusCode,
        code: String,
        message: String,
    },

    /// A body could not be decoded into the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Request build error: {0}")]
    BuildError(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, LuisError>;

impl LuisError {
    /// True for connection-level failures (DNS, TLS, refused, timed out).
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            Self::Connection(_) | Self::Timeout(_) | Self::Network(_)
        )
    }

    /// Service-reported error code, if this error came from the service.
    #[must_use]
    pub fn service_code(&self) -> Option<&str> {
        match self {
            Self::Service { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Decode a non-success response body into a [`LuisError::Service`].
    ///
    /// Falls back to [`LuisError::MalformedResponse`] when the body matches
    /// neither of the shapes the service is known to return.
    pub(crate) fn from_error_body(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ServiceErrorBody>(body) {
            Ok(ServiceErrorBody {
                error: Some(detail),
                ..
            }) => Self::Service {
                status,
                code: detail.code,
                message: detail.message,
            },
            Ok(ServiceErrorBody {
                error: None,
                message: Some(message),
                status_code,
            }) => Self::Service {
                status,
                code: status_code.unwrap_or(status.as_u16()).to_string(),
                message,
            },
            Ok(_) => Self::MalformedResponse(format!(
                "error response (status {status}) carries no error details"
            )),
            Err(e) => Self::MalformedResponse(format!(
                "undecodable error response (status {status}): {e}"
            )),
        }
    }
}

impl From<serde_json::Error> for LuisError {
    fn from(err: serde_json::Error) -> Self {
        LuisError::Serialization(err.to_string())
    }
}

/// Error envelope returned by the authoring API.
///
/// The API itself answers with `{"error": {"code", "message"}}`; the gateway
/// in front of it (bad key, quota) answers with `{"statusCode", "message"}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServiceErrorBody {
    error: Option<ServiceErrorDetail>,
    message: Option<String>,
    status_code: Option<u16>,
}

#[derive(Debug, Deserialize)]
struct ServiceErrorDetail {
    #[serde(alias = "Code")]
    code: String,
    #[serde(alias = "Message")]
    message: String,
}
