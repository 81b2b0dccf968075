use http::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::LuisClientConfig;
use crate::error::{LuisError, Result};
use crate::region::Region;
use crate::transport::Transport;

/// Client for the LUIS programmatic authoring API.
///
/// Every method maps to exactly one HTTP exchange, except the `*_by_name`
/// lookups which list the collection and match locally. Nothing is cached
/// between calls.
#[derive(Debug)]
pub struct LuisProgClient {
    transport: Transport,
}

impl LuisProgClient {
    /// Client for the public endpoint of `region`
    ///
    /// # Errors
    ///
    /// Returns [`LuisError::BuildError`] if the key is not a valid header value.
    pub fn new(region: Region, subscription_key: impl Into<String>) -> Result<Self> {
        Self::from_config(&LuisClientConfig::new(region, subscription_key))
    }

    /// Create client from configuration
    ///
    /// # Errors
    ///
    /// Returns [`LuisError::BuildError`] if the HTTP client cannot be built.
    pub fn from_config(config: &LuisClientConfig) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Underlying transport, for endpoints without a typed wrapper
    #[must_use]
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// GET for list and lookup operations: a 400 means "absent", any other
    /// failure is raised.
    pub(crate) async fn get_optional<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let response = self.transport.get(path).await?;
        if response.is_success() {
            return response.json().map(Some);
        }
        if response.status() == StatusCode::BAD_REQUEST {
            tracing::debug!(path, "treating 400 as absent");
            return Ok(None);
        }
        tracing::warn!(path, status = %response.status(), "LUIS request failed");
        Err(response.into_error())
    }

    /// GET where every non-success status is a failure.
    pub(crate) async fn get_required<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.transport.get(path).await?.error_for_status()?.json()
    }

    /// POST whose success body is a bare JSON string identifier.
    pub(crate) async fn post_for_id<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String> {
        let raw = self.transport.post(path, Some(body)).await?;
        decode(path, &raw)
    }

    /// POST whose success body decodes into `T`.
    pub(crate) async fn post_for<B, T>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let raw = self.transport.post(path, body).await?;
        decode(path, &raw)
    }
}

fn decode<T: DeserializeOwned>(path: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|e| {
        LuisError::MalformedResponse(format!("cannot decode response of {path}: {e}"))
    })
}

/// First entry whose name equals `name` exactly (case-sensitive).
pub(crate) fn find_by_name<T>(
    items: Option<Vec<T>>,
    name: &str,
    name_of: impl Fn(&T) -> &str,
) -> Option<T> {
    items?.into_iter().find(|item| name_of(item) == name)
}
