//! Client for the LUIS programmatic (authoring) API, v2.0.
//!
//! Covers the management surface of a LUIS subscription: applications,
//! intents, entities, labeled examples, training and publishing. Each call is
//! a single request/response exchange against
//! `https://{region}.api.cognitive.microsoft.com/luis/api/v2.0` authenticated
//! with a static subscription key.
//!
//! # Errors
//!
//! List and get-by-id calls treat an HTTP 400 as "absent" and return `None`.
//! Every other failure is returned as a [`LuisError`]:
//!
//! - [`LuisError::Service`]: the service answered with a structured error body
//! - [`LuisError::MalformedResponse`]: a body did not have the expected shape
//! - [`LuisError::Connection`], [`LuisError::Timeout`], [`LuisError::Network`]:
//!   the exchange itself failed
//!
//! No call is retried.
//!
//! # Example
//!
//! ```no_run
//! use luis_programmatic::{CreateAppRequest, LuisProgClient, Region};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LuisProgClient::new(Region::WestUs, "subscription-key")?;
//!
//! let app_id = client
//!     .add_app(&CreateAppRequest {
//!         name: "Demo".into(),
//!         description: "desc".into(),
//!         culture: "en-us".into(),
//!         usage_scenario: "IoT".into(),
//!         domain: String::new(),
//!         initial_version_id: None,
//!     })
//!     .await?;
//!
//! let intent_id = client.add_intent(&app_id, "0.1", "BookFlight").await?;
//! let details = client.train(&app_id, "0.1").await?;
//! println!("intent {intent_id}, training {:?}", details.status);
//! # Ok(())
//! # }
//! ```

mod body;
mod client;
mod config;
mod error;
mod models;
mod region;
mod request;
mod resources;
mod response;
mod transport;

// Re-export public API
pub use body::Body;
pub use client::LuisProgClient;
pub use config::{API_PATH, LuisClientConfig, SERVICE_HOST, base_url_for};
pub use error::{LuisError, Result};
pub use models::{
    CreateAppRequest, Entity, EntityLabel, Example, Intent, LuisApp, ModelNameRequest,
    ModelTrainingDetails, ModelTrainingStatus, Publish, PublishRequest, RenameAppRequest,
    TrainingDetails, TrainingStatus, Utterance,
};
pub use region::Region;
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use transport::{SUBSCRIPTION_KEY_HEADER, Transport};

// Re-export commonly used types from dependencies
pub use http::{Method, StatusCode};
