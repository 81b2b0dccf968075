use bytes::Bytes;
use serde::Serialize;

use crate::error::Result;

/// Outgoing request body
#[derive(Default)]
pub enum Body {
    /// No body at all (not even an empty JSON document)
    #[default]
    Empty,
    /// Buffered bytes
    Bytes(Bytes),
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Body::Empty => write!(f, "Body::Empty"),
            Body::Bytes(bytes) => f.debug_tuple("Body::Bytes").field(&bytes.len()).finish(),
        }
    }
}

impl Body {
    /// Create a body from a JSON-serializable value
    ///
    /// # Errors
    ///
    /// Returns [`LuisError::Serialization`](crate::LuisError::Serialization)
    /// if the value cannot be encoded.
    pub fn from_json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let json = serde_json::to_vec(value)?;
        Ok(Body::Bytes(Bytes::from(json)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Body::Empty)
    }
}
