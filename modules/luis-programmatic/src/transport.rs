use http::{HeaderValue, Method};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::body::Body;
use crate::config::LuisClientConfig;
use crate::error::{LuisError, Result};
use crate::request::Request;
use crate::response::Response;

/// Header carrying the authoring key on every request
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Single-exchange HTTP transport for the authoring API.
///
/// Injects the subscription key, encodes JSON bodies and normalizes failure
/// responses. Holds no state besides its configuration, so one instance can
/// be shared freely between concurrent callers.
pub struct Transport {
    base_url: String,
    subscription_key: SecretString,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Transport {
    /// Create a transport from configuration
    ///
    /// # Errors
    ///
    /// Returns [`LuisError::BuildError`] if the subscription key is not a
    /// valid header value or the HTTP client cannot be constructed.
    pub fn new(config: &LuisClientConfig) -> Result<Self> {
        HeaderValue::from_str(config.subscription_key.expose_secret()).map_err(|_| {
            LuisError::BuildError("subscription key is not a valid header value".into())
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| LuisError::BuildError(e.to_string()))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            subscription_key: config.subscription_key.clone(),
            http_client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET. Non-success statuses are returned, not raised; the caller
    /// decides what they mean.
    ///
    /// # Errors
    ///
    /// Only network-level failures.
    pub async fn get(&self, path: &str) -> Result<Response> {
        let request = Request::builder().method(Method::GET).path(path).build()?;
        self.execute(request).await
    }

    /// Issue a POST, with a JSON body when `body` is `Some`, and return the
    /// raw success body.
    ///
    /// # Errors
    ///
    /// [`LuisError::Service`] for a non-success status with a decodable error
    /// body, [`LuisError::MalformedResponse`] when that body does not decode,
    /// or a network error.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&T>,
    ) -> Result<String> {
        let mut builder = Request::builder().method(Method::POST).path(path);
        if let Some(body) = body {
            builder = builder.json(body)?;
        }
        let response = self.execute(builder.build()?).await?.error_for_status()?;
        response.text().map(str::to_owned)
    }

    /// Issue a PUT with a JSON body, discarding any success body.
    ///
    /// # Errors
    ///
    /// Same as [`Transport::post`].
    pub async fn put<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<()> {
        let request = Request::builder()
            .method(Method::PUT)
            .path(path)
            .json(body)?
            .build()?;
        self.execute(request).await?.error_for_status()?;
        Ok(())
    }

    /// Issue a DELETE.
    ///
    /// # Errors
    ///
    /// Same as [`Transport::post`].
    pub async fn delete(&self, path: &str) -> Result<()> {
        let request = Request::builder()
            .method(Method::DELETE)
            .path(path)
            .build()?;
        self.execute(request).await?.error_for_status()?;
        Ok(())
    }

    /// Execute one request and buffer the response
    ///
    /// # Errors
    ///
    /// Network-level failures only; the status is not inspected.
    pub async fn execute(&self, request: Request) -> Result<Response> {
        let (method, path, headers, body) = request.into_parts();
        let url = format!("{}{}", self.base_url, path);

        let mut req_builder = self
            .http_client
            .request(method.clone(), &url)
            .header(
                SUBSCRIPTION_KEY_HEADER,
                self.subscription_key.expose_secret(),
            )
            .headers(headers);

        req_builder = match body {
            Body::Empty => req_builder,
            Body::Bytes(bytes) => req_builder.body(bytes),
        };

        let resp = req_builder.send().await.map_err(classify_send_error)?;

        let status = resp.status();
        let bytes = resp.bytes().await.map_err(classify_send_error)?;

        tracing::debug!(%method, path = %path, %status, len = bytes.len(), "LUIS exchange");

        Ok(Response::new(status, bytes))
    }
}

fn classify_send_error(e: reqwest::Error) -> LuisError {
    if e.is_timeout() {
        LuisError::Timeout(e.to_string())
    } else if e.is_connect() {
        LuisError::Connection(e.to_string())
    } else {
        LuisError::Network(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;

    #[test]
    fn test_transport_creation() {
        let config = LuisClientConfig::new(Region::WestUs, "key");
        let transport = Transport::new(&config).unwrap();
        assert_eq!(
            transport.base_url(),
            "https://westus.api.cognitive.microsoft.com/luis/api/v2.0"
        );
    }

    #[test]
    fn test_invalid_key_rejected() {
        let config = LuisClientConfig::new(Region::WestUs, "bad\nkey");
        let err = Transport::new(&config).unwrap_err();
        assert!(matches!(err, LuisError::BuildError(_)));
    }

    #[test]
    fn test_debug_hides_key() {
        let config = LuisClientConfig::new(Region::WestUs, "hidden-key");
        let transport = Transport::new(&config).unwrap();
        assert!(!format!("{transport:?}").contains("hidden-key"));
    }
}
