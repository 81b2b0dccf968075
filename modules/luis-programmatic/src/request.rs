use http::{HeaderMap, HeaderValue, Method};
use serde::Serialize;

use crate::body::Body;
use crate::error::{LuisError, Result};

/// HTTP request relative to the client's base URL
#[derive(Debug)]
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Body,
}

impl Request {
    /// Create a new request builder
    #[must_use]
    pub fn builder() -> RequestBuilder {
        RequestBuilder::default()
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path below the API prefix, e.g. `/apps/{id}`
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[must_use]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[must_use]
    pub fn into_parts(self) -> (Method, String, HeaderMap, Body) {
        (self.method, self.path, self.headers, self.body)
    }
}

/// Builder for constructing HTTP requests with a fluent API
#[derive(Debug, Default)]
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    headers: HeaderMap,
    body: Body,
}

impl RequestBuilder {
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the body to a JSON-serialized value and add Content-Type header
    ///
    /// # Errors
    ///
    /// Returns [`LuisError::Serialization`] if the value cannot be encoded.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self> {
        self.body = Body::from_json(value)?;
        self.headers.insert(
            http::header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        Ok(self)
    }

    /// Build the request
    ///
    /// # Errors
    ///
    /// Returns [`LuisError::BuildError`] if no path was set or the path is
    /// not rooted at `/`.
    pub fn build(self) -> Result<Request> {
        let method = self.method.unwrap_or(Method::GET);
        let path = self
            .path
            .ok_or_else(|| LuisError::BuildError("Request path is required".into()))?;
        if !path.starts_with('/') {
            return Err(LuisError::BuildError(format!(
                "Request path must start with '/': {path}"
            )));
        }

        Ok(Request {
            method,
            path,
            headers: self.headers,
            body: self.body,
        })
    }
}
