use std::fmt;
use std::time::Duration;

use secrecy::SecretString;

use crate::error::{LuisError, Result};
use crate::region::Region;

/// Host suffix of the public authoring endpoints.
pub const SERVICE_HOST: &str = "api.cognitive.microsoft.com";

/// Path prefix of the v2.0 authoring API.
pub const API_PATH: &str = "/luis/api/v2.0";

/// Configuration for [`LuisProgClient`](crate::LuisProgClient)
#[derive(Clone)]
pub struct LuisClientConfig {
    pub base_url: String,
    pub subscription_key: SecretString,
    /// Per-request timeout. `None` leaves the HTTP client default in place.
    pub timeout: Option<Duration>,
}

impl fmt::Debug for LuisClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LuisClientConfig")
            .field("base_url", &self.base_url)
            .field("subscription_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl LuisClientConfig {
    /// Configuration for the public endpoint of `region`
    #[must_use]
    pub fn new(region: Region, subscription_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url_for(region),
            subscription_key: SecretString::from(subscription_key.into()),
            timeout: None,
        }
    }

    /// Point the client at a different base URL (stub servers, sovereign clouds)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    /// Set a per-request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create configuration from environment variables
    ///
    /// Expects:
    /// - `LUIS_SUBSCRIPTION_KEY`: authoring key (required)
    /// - `LUIS_REGION`: authoring region (default: "westus")
    /// - `LUIS_BASE_URL`: full base URL overriding the region-derived one (optional)
    ///
    /// # Errors
    ///
    /// Returns [`LuisError::BuildError`] when the key is missing or the region
    /// is not recognised.
    pub fn from_env() -> Result<Self> {
        let subscription_key = std::env::var("LUIS_SUBSCRIPTION_KEY")
            .map_err(|_| LuisError::BuildError("LUIS_SUBSCRIPTION_KEY not set".into()))?;
        let region = match std::env::var("LUIS_REGION") {
            Ok(label) => label.parse()?,
            Err(_) => Region::default(),
        };

        let config = Self::new(region, subscription_key);
        Ok(match std::env::var("LUIS_BASE_URL") {
            Ok(base_url) if !base_url.trim().is_empty() => config.with_base_url(base_url),
            _ => config,
        })
    }
}

/// `https://{region}.api.cognitive.microsoft.com/luis/api/v2.0`
#[must_use]
pub fn base_url_for(region: Region) -> String {
    format!("https://{region}.{SERVICE_HOST}{API_PATH}")
}
